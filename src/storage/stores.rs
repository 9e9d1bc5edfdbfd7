use super::*;

use crate::domain::Contact;
use crate::helper;
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

pub struct TxtStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl TxtStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.into(),
        }
    }
}

impl Storage for TxtStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        // A missing file is an empty contact book
        if !fs::exists(&self.path)? {
            tracing::debug!(path = %self.path.display(), "no contacts file yet");
            return Ok(Contacts::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let contacts = helper::deserialize_contacts_from_txt_buffer(reader)?;

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        writer.write_all(helper::serialize_contacts(contacts).as_bytes())?;
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), count = contacts.len(), "saved contacts");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

pub struct CsvStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: &str) -> Result<Self, AppError> {
        let mut file_path = PathBuf::from(path);

        if file_path.is_dir() {
            file_path = file_path.join("exported.csv");
        } else if file_path.extension().is_none_or(|ext| ext != "csv") {
            return Err(AppError::Validation("File must be a .csv file".to_string()));
        }

        Ok(Self {
            medium: "csv".to_string(),
            path: file_path,
        })
    }
}

impl Storage for CsvStorage {
    fn load(&self) -> Result<Contacts, AppError> {
        if !self.path.exists() {
            return Err(AppError::NotFound("CSV file".to_string()));
        }

        let mut reader = Reader::from_path(&self.path)?;
        let mut contacts = Contacts::new();

        for result in reader.deserialize() {
            let record: Contact = result?;
            contacts.insert(record.name.clone(), record);
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &Contacts) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut writer = Writer::from_path(&self.path)?;

        for contact in contacts.values() {
            writer.serialize(contact)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
