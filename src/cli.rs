pub mod command;
pub mod run;
pub mod shell;

pub use run::run_app;
pub use shell::run_shell;

use crate::domain::Contact;

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        contact.name, contact.phone, contact.email, contact.address
    )
}
