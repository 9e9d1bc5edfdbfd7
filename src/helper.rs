use std::io::BufRead;

use crate::domain::{Contact, Contacts};
use crate::errors::AppError;

pub const FIELD_DELIMITER: char = '|';
const DELIMITER_REPLACEMENT: char = '/';

/// Makes a value safe to store as one field of one line.
pub fn escape_field(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            FIELD_DELIMITER => DELIMITER_REPLACEMENT,
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect()
}

pub fn serialize_contact(contact: &Contact) -> String {
    format!(
        "{}|{}|{}|{}\n",
        escape_field(&contact.name),
        escape_field(&contact.phone),
        escape_field(&contact.email),
        escape_field(&contact.address)
    )
}

pub fn serialize_contacts(contacts: &Contacts) -> String {
    let mut data = String::new();

    for contact in contacts.values() {
        data.push_str(&serialize_contact(contact));
    }
    data
}

/// Parses one stored line. `None` unless the line has exactly four fields.
pub fn parse_line(line: &str) -> Option<Contact> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let [name, phone, email, address] = parts.as_slice() else {
        return None;
    };

    Some(Contact {
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
    })
}

pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(buffer: R) -> Result<Contacts, AppError> {
    let mut contacts = Contacts::new();

    for (line_no, line) in buffer.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(contact) => {
                contacts.insert(contact.name.clone(), contact);
            }
            None => {
                tracing::debug!(line = line_no + 1, "skipping malformed contact line");
            }
        }
    }

    Ok(contacts)
}
