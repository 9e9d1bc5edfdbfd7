use crate::errors::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const REQUIRED_FIELDS_MSG: &str = "Name and Phone are required.";
pub const PHONE_DIGITS_MSG: &str = "Phone must contain digits only.";

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub address: String,
}

impl Contact {
    /// Builds a contact from raw input. Every field is trimmed.
    pub fn new(name: &str, phone: &str, email: &str, address: &str) -> Self {
        Contact {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            address: address.trim().to_string(),
        }
    }

    pub fn has_required_fields(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty()
    }

    pub fn validate_required(&self) -> Result<(), AppError> {
        if self.has_required_fields() {
            Ok(())
        } else {
            Err(AppError::Validation(REQUIRED_FIELDS_MSG.to_string()))
        }
    }

    /// `term` must already be trimmed and lowercased.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.phone.contains(term)
    }

    /// One line as shown in contact listings.
    pub fn listing(&self) -> String {
        format!("{} - {}", self.name, self.phone)
    }
}

pub fn validate_phone(phone: &str) -> Result<bool, AppError> {
    // Empty is left to the required-field check
    let re = Regex::new(r"^[0-9]*$")?;
    Ok(re.is_match(phone))
}

/// Checks a contact the way the input forms do before it reaches the store.
pub fn validate_input(contact: &Contact) -> Result<(), AppError> {
    contact.validate_required()?;

    if !validate_phone(&contact.phone)? {
        return Err(AppError::Validation(PHONE_DIGITS_MSG.to_string()));
    }
    Ok(())
}
