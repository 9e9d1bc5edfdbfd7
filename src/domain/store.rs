use super::contact::validate_input;
use super::{Contact, Contacts, Search};
use crate::errors::AppError;
use crate::storage::Storage;

/// The contact book: contacts in memory plus the backend they are persisted to.
///
/// Mutations only touch memory. Callers persist with [`ContactStore::save`]
/// after each one, and the in-memory state stays usable when a save fails.
pub struct ContactStore {
    mem: Contacts,
    storage: Box<dyn Storage>,
}

impl ContactStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            mem: Contacts::new(),
            storage,
        }
    }

    /// Creates a store and loads whatever its backend holds.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, AppError> {
        let mut store = Self::new(storage);
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory contacts with the persisted ones.
    pub fn load(&mut self) -> Result<usize, AppError> {
        self.mem = self.storage.load()?;

        tracing::info!(
            medium = self.storage.get_medium(),
            count = self.mem.len(),
            "contacts loaded"
        );
        Ok(self.mem.len())
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem).inspect_err(|e| {
            tracing::warn!(medium = self.storage.get_medium(), error = %e, "saving contacts failed");
        })
    }

    pub fn add_or_replace(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<(), AppError> {
        let contact = Contact::new(name, phone, email, address);
        contact.validate_required()?;

        tracing::debug!(name = %contact.name, "add or replace contact");
        self.mem.insert(contact.name.clone(), contact);
        Ok(())
    }

    pub fn rename_and_replace(
        &mut self,
        old_name: &str,
        new_name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<(), AppError> {
        let contact = Contact::new(new_name, phone, email, address);
        contact.validate_required()?;

        let renamed = contact.name != old_name;

        if renamed && self.mem.contains_key(&contact.name) {
            return Err(AppError::DuplicateName(contact.name));
        }

        if renamed {
            self.mem.shift_remove(old_name);
        }

        tracing::debug!(old = old_name, new = %contact.name, "replace contact");
        self.mem.insert(contact.name.clone(), contact);
        Ok(())
    }

    pub fn delete(&mut self, name: &str) -> Result<Contact, AppError> {
        self.mem
            .shift_remove(name)
            .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))
    }

    pub fn clear(&mut self) {
        self.mem.clear();
    }

    pub fn search(&self, term: &str) -> Search<'_> {
        Search::new(&self.mem, term)
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.mem.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mem.contains_key(name)
    }

    pub fn contacts(&self) -> impl Iterator<Item = &Contact> {
        self.mem.values()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn medium(&self) -> &str {
        self.storage.get_medium()
    }

    /// Upserts every record another backend holds. Records that would not
    /// pass the input forms (missing name or phone, non-digit phone) are
    /// skipped. Returns `(imported, skipped)`.
    pub fn import_from(&mut self, source: &dyn Storage) -> Result<(usize, usize), AppError> {
        let mut imported = 0;
        let mut skipped = 0;

        for record in source.load()?.into_values() {
            let contact = Contact::new(&record.name, &record.phone, &record.email, &record.address);

            match validate_input(&contact).and_then(|()| {
                self.add_or_replace(
                    &contact.name,
                    &contact.phone,
                    &contact.email,
                    &contact.address,
                )
            }) {
                Ok(()) => imported += 1,
                Err(e) if e.is_validation() => {
                    tracing::warn!(name = %contact.name, error = %e, "skipping imported contact");
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok((imported, skipped))
    }

    pub fn export_to(&self, target: &dyn Storage) -> Result<usize, AppError> {
        target.save(&self.mem)?;
        Ok(self.mem.len())
    }
}
