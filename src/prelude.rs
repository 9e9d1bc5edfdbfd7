pub use crate::cli::{command, run_app, run_shell};
pub use crate::domain::{
    ContactStore, Contacts, EditMode, Search,
    contact::{self, Contact},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, CsvStorage, MemStorage, Storage, TxtStorage};
