pub mod memory;
pub mod stores;

use crate::prelude::{AppError, Contacts};
use std::fs;
use std::path::Path;

pub use memory::MemStorage;
pub use stores::{CsvStorage, TxtStorage};

pub const DEFAULT_CONTACTS_PATH: &str = "contacts.txt";

/// A place contacts can be loaded from and written back to in full.
pub trait Storage {
    fn load(&self) -> Result<Contacts, AppError>;

    fn save(&self, contacts: &Contacts) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
