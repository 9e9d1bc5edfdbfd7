use super::{Contact, ContactStore};
use crate::errors::AppError;

/// What submitting the contact form does.
///
/// `Adding` upserts by name. `Updating` replaces the selected contact,
/// renaming it when the name changed. A successful submit always returns
/// to `Adding`; a failed one keeps the pending update so the input can be
/// corrected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Adding,
    Updating {
        original: String,
    },
}

impl EditMode {
    pub fn is_updating(&self) -> bool {
        matches!(self, EditMode::Updating { .. })
    }

    /// Name of the contact being updated.
    pub fn original(&self) -> Option<&str> {
        match self {
            EditMode::Adding => None,
            EditMode::Updating { original } => Some(original),
        }
    }

    /// Selects an existing contact for update and returns it so the form
    /// can be filled in. Selecting while already updating retargets.
    pub fn begin_update<'s>(
        &mut self,
        store: &'s ContactStore,
        name: &str,
    ) -> Result<&'s Contact, AppError> {
        let contact = store
            .get(name)
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))?;

        *self = EditMode::Updating {
            original: contact.name.clone(),
        };
        Ok(contact)
    }

    pub fn submit(&mut self, store: &mut ContactStore, draft: &Contact) -> Result<(), AppError> {
        match self {
            EditMode::Adding => {
                store.add_or_replace(&draft.name, &draft.phone, &draft.email, &draft.address)?
            }
            EditMode::Updating { original } => store.rename_and_replace(
                original.as_str(),
                &draft.name,
                &draft.phone,
                &draft.email,
                &draft.address,
            )?,
        }

        *self = EditMode::Adding;
        Ok(())
    }

    pub fn cancel(&mut self) {
        *self = EditMode::Adding;
    }
}
