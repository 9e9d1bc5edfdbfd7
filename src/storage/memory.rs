use super::*;
use std::cell::RefCell;

/// Keeps the last saved snapshot in memory. Nothing touches the disk.
#[derive(Default)]
pub struct MemStorage {
    data: RefCell<Contacts>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Contacts) -> Self {
        Self {
            data: RefCell::new(contacts),
        }
    }

    pub fn snapshot(&self) -> Contacts {
        self.data.borrow().clone()
    }
}

impl Storage for MemStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
