use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::storage::DEFAULT_CONTACTS_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Contacts file (one `name|phone|email|address` record per line)
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_CONTACTS_PATH, global = true)]
    pub file: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact, replacing any contact with the same name
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number (digits only)
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: Option<String>,

        /// Contact postal address
        #[arg(long)]
        address: Option<String>,
    },
    /// Update an existing contact
    /// Fields that are not provided keep their current value
    Update {
        /// Current contact name
        #[arg(long)]
        name: String,

        /// Rename the contact
        #[arg(long)]
        new_name: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,

        /// Update email address (empty to clear)
        #[arg(long)]
        email: Option<String>,

        /// Update postal address (empty to clear)
        #[arg(long)]
        address: Option<String>,
    },
    /// Delete a contact by name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// Delete every contact
    Clear {
        /// Confirm clearing all contacts
        #[arg(long)]
        yes: bool,
    },
    /// List contacts
    List,
    /// Show every field of a contact
    Show {
        /// Contact name
        #[arg(long)]
        name: String,
    },
    /// Search contacts by part of a name (any case) or phone number
    Search {
        /// Search term
        #[arg(long)]
        term: String,
    },
    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long, default_value = "contacts.csv")]
        src: String,
    },
    /// Export contacts to a .csv file
    Export {
        /// File path or directory for the exported .csv file
        #[arg(short, long, default_value = "exported.csv")]
        des: String,
    },
    /// Interactive contact book session
    Shell,
}
