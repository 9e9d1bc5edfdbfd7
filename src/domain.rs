pub mod contact;
pub mod mode;
pub mod search;
pub mod store;

use indexmap::IndexMap;

pub use contact::Contact;
pub use mode::EditMode;
pub use search::Search;
pub use store::ContactStore;

/// Contacts keyed by name, in insertion order.
pub type Contacts = IndexMap<String, Contact>;
