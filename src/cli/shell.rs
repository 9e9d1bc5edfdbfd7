use std::io::{BufRead, Write};

use crate::cli::display_contact;
use crate::domain::contact::{PHONE_DIGITS_MSG, validate_phone};
use crate::prelude::{AppError, Contact, ContactStore, EditMode};

const BACK: &str = "*";
const CLEAR_FIELD: &str = "-";

#[derive(Debug, PartialEq)]
pub enum MenuChoice {
    AddContact,
    ListContacts,
    SearchContacts,
    UpdateContact,
    DeleteContact,
    ClearAll,
    Exit,
}

enum Flow {
    Continue,
    Quit,
}

pub fn parse_menu_choice(action: &str) -> Result<MenuChoice, AppError> {
    match action.trim() {
        "1" => Ok(MenuChoice::AddContact),
        "2" => Ok(MenuChoice::ListContacts),
        "3" => Ok(MenuChoice::SearchContacts),
        "4" => Ok(MenuChoice::UpdateContact),
        "5" => Ok(MenuChoice::DeleteContact),
        "6" => Ok(MenuChoice::ClearAll),
        "7" => Ok(MenuChoice::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

/// Runs the interactive menu until the user exits or input ends.
///
/// Every change is saved right away. A failed save is reported and the
/// session carries on with the contacts held in memory.
pub fn run_shell<R: BufRead, W: Write>(
    store: &mut ContactStore,
    input: R,
    output: W,
) -> Result<(), AppError> {
    let mut shell = Shell {
        input,
        output,
        mode: EditMode::default(),
    };
    shell.run(store)
}

struct Shell<R, W> {
    input: R,
    output: W,
    mode: EditMode,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    fn run(&mut self, store: &mut ContactStore) -> Result<(), AppError> {
        writeln!(self.output, "\n--- Contact BOOK ---")?;

        loop {
            self.show_menu()?;

            let Some(action) = self.read_line()? else {
                break;
            };

            let flow = match parse_menu_choice(&action) {
                Ok(MenuChoice::AddContact) => self.add_contact(store)?,
                Ok(MenuChoice::ListContacts) => self.list_contacts(store)?,
                Ok(MenuChoice::SearchContacts) => self.search_contacts(store)?,
                Ok(MenuChoice::UpdateContact) => self.update_contact(store)?,
                Ok(MenuChoice::DeleteContact) => self.delete_contact(store)?,
                Ok(MenuChoice::ClearAll) => self.clear_all(store)?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "\nBye!")?;
                    Flow::Quit
                }
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n1. Add Contact")?;
        writeln!(self.output, "2. List Contacts")?;
        writeln!(self.output, "3. Search Contacts")?;
        writeln!(self.output, "4. Update Contact")?;
        writeln!(self.output, "5. Delete Contact")?;
        writeln!(self.output, "6. Clear All")?;
        writeln!(self.output, "7. Exit")?;
        write!(self.output, "> ")?;
        self.output.flush()?;
        Ok(())
    }

    // INPUT FUNCTIONS
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "\n{}\n> ", message)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Empty input keeps `current`, `-` clears the field.
    fn prompt_with_current(
        &mut self,
        label: &str,
        current: &str,
    ) -> Result<Option<String>, AppError> {
        let answer = self.prompt(&format!("{} [{}]:", label, current))?;

        Ok(answer.map(|value| {
            if value.is_empty() {
                current.to_string()
            } else if value == CLEAR_FIELD {
                String::new()
            } else {
                value
            }
        }))
    }

    fn confirm(&mut self, action: &str) -> Result<Option<bool>, AppError> {
        let answer = self.prompt(&format!("Are you sure you want to {}? (y/n)", action))?;
        Ok(answer.map(|a| a.eq_ignore_ascii_case("y")))
    }

    fn persist(&mut self, store: &ContactStore) -> Result<(), AppError> {
        if let Err(e) = store.save() {
            writeln!(self.output, "Failed to save contacts: {}", e)?;
        }
        Ok(())
    }

    fn submit(&mut self, store: &mut ContactStore, draft: &Contact) -> Result<bool, AppError> {
        match self.mode.submit(store, draft) {
            Ok(()) => {
                self.persist(store)?;
                Ok(true)
            }
            Err(e) if e.is_validation() => {
                writeln!(self.output, "{}", e)?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn add_contact(&mut self, store: &mut ContactStore) -> Result<Flow, AppError> {
        let Some(name) = self.prompt("Enter contact name\n* to go back:")? else {
            return Ok(Flow::Quit);
        };
        if name == BACK {
            return Ok(Flow::Continue);
        }

        let phone = loop {
            let Some(phone) = self.prompt("Enter contact phone (digits only):")? else {
                return Ok(Flow::Quit);
            };
            if phone == BACK {
                return Ok(Flow::Continue);
            }
            if validate_phone(&phone)? {
                break phone;
            }
            writeln!(self.output, "{}", PHONE_DIGITS_MSG)?;
        };

        let Some(email) = self.prompt("Enter contact email (optional):")? else {
            return Ok(Flow::Quit);
        };
        let Some(address) = self.prompt("Enter contact address (optional):")? else {
            return Ok(Flow::Quit);
        };

        let draft = Contact::new(&name, &phone, &email, &address);
        if self.submit(store, &draft)? {
            writeln!(self.output, "Contact added successfully!")?;
        }
        Ok(Flow::Continue)
    }

    fn list_contacts(&mut self, store: &ContactStore) -> Result<Flow, AppError> {
        if store.is_empty() {
            writeln!(self.output, "No contact yet")?;
            return Ok(Flow::Continue);
        }

        for contact in store.contacts() {
            writeln!(self.output, "{}", contact.listing())?;
        }
        Ok(Flow::Continue)
    }

    fn search_contacts(&mut self, store: &ContactStore) -> Result<Flow, AppError> {
        let Some(term) = self.prompt("Search by name or phone:")? else {
            return Ok(Flow::Quit);
        };

        let mut found = 0;
        for (name, phone) in store.search(&term) {
            writeln!(self.output, "{} - {}", name, phone)?;
            found += 1;
        }

        if found == 0 {
            writeln!(self.output, "No matching contact")?;
        }
        Ok(Flow::Continue)
    }

    fn update_contact(&mut self, store: &mut ContactStore) -> Result<Flow, AppError> {
        let Some(name) = self.prompt("Enter the name of the contact to update\n* to go back:")?
        else {
            return Ok(Flow::Quit);
        };
        if name == BACK {
            return Ok(Flow::Continue);
        }

        let current = match self.mode.begin_update(store, &name) {
            Ok(contact) => contact.clone(),
            Err(e @ AppError::NotFound(_)) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e),
        };

        writeln!(self.output, "\n{}", display_contact(&current))?;

        // Stays here until the update goes through or is cancelled
        while self.mode.is_updating() {
            writeln!(
                self.output,
                "\nEnter keeps the current value, - clears it, * cancels the update."
            )?;

            let Some(new_name) = self.prompt_with_current("Name", &current.name)? else {
                return Ok(Flow::Quit);
            };
            if new_name == BACK {
                self.mode.cancel();
                writeln!(self.output, "Update cancelled")?;
                return Ok(Flow::Continue);
            }

            let Some(phone) = self.prompt_with_current("Phone", &current.phone)? else {
                return Ok(Flow::Quit);
            };
            if !validate_phone(&phone)? {
                writeln!(self.output, "{}", PHONE_DIGITS_MSG)?;
                continue;
            }

            let Some(email) = self.prompt_with_current("Email", &current.email)? else {
                return Ok(Flow::Quit);
            };
            let Some(address) = self.prompt_with_current("Address", &current.address)? else {
                return Ok(Flow::Quit);
            };

            let draft = Contact::new(&new_name, &phone, &email, &address);
            if self.submit(store, &draft)? {
                writeln!(self.output, "Contact updated successfully!")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self, store: &mut ContactStore) -> Result<Flow, AppError> {
        let Some(name) = self.prompt("Enter the name of the contact to delete\n* to go back:")?
        else {
            return Ok(Flow::Quit);
        };
        if name == BACK {
            return Ok(Flow::Continue);
        }

        if !store.contains(&name) {
            writeln!(self.output, "{}", AppError::NotFound(format!("Contact '{}'", name)))?;
            return Ok(Flow::Continue);
        }

        match self.confirm(&format!("delete '{}'", name))? {
            None => Ok(Flow::Quit),
            Some(false) => Ok(Flow::Continue),
            Some(true) => {
                store.delete(&name)?;
                self.mode.cancel();
                self.persist(store)?;
                writeln!(self.output, "Contact deleted successfully!")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn clear_all(&mut self, store: &mut ContactStore) -> Result<Flow, AppError> {
        match self.confirm("clear all contacts")? {
            None => Ok(Flow::Quit),
            Some(false) => Ok(Flow::Continue),
            Some(true) => {
                store.clear();
                self.mode.cancel();
                self.persist(store)?;
                writeln!(self.output, "All contacts cleared.")?;
                Ok(Flow::Continue)
            }
        }
    }
}
