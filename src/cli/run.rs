use crate::{
    cli::{display_contact, shell::run_shell},
    prelude::{
        AppError,
        command::{Cli, Commands},
        contact::{Contact, validate_input},
        ContactStore, CsvStorage, EditMode, TxtStorage,
    },
};
use clap::Parser;
use dotenv::dotenv;
use std::io;

pub fn run_app() -> Result<(), AppError> {
    // CONTACTS_FILE may come from a .env file
    dotenv().ok();

    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mut store = ContactStore::open(Box::new(TxtStorage::new(&cli.file)))?;
    tracing::debug!(file = %cli.file.display(), medium = store.medium(), "contact book opened");

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let new_contact = Contact::new(
                &name,
                &phone,
                email.as_deref().unwrap_or_default(),
                address.as_deref().unwrap_or_default(),
            );
            validate_input(&new_contact)?;

            store.add_or_replace(
                &new_contact.name,
                &new_contact.phone,
                &new_contact.email,
                &new_contact.address,
            )?;
            store.save()?;

            println!("Contact added successfully");
            Ok(())
        }

        Commands::Update {
            name,
            new_name,
            phone,
            email,
            address,
        } => {
            let mut mode = EditMode::default();
            let current = mode.begin_update(&store, &name)?.clone();

            // Unspecified fields keep their current value
            let updated = Contact::new(
                new_name.as_deref().unwrap_or(&current.name),
                phone.as_deref().unwrap_or(&current.phone),
                email.as_deref().unwrap_or(&current.email),
                address.as_deref().unwrap_or(&current.address),
            );
            validate_input(&updated)?;

            mode.submit(&mut store, &updated)?;
            store.save()?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { name } => {
            store.delete(&name)?;
            store.save()?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Clear { yes } => {
            if !yes {
                return Err(AppError::Validation(
                    "Refusing to clear all contacts without --yes".to_string(),
                ));
            }

            store.clear();
            store.save()?;

            println!("All contacts cleared");
            Ok(())
        }

        Commands::List => {
            if store.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for contact in store.contacts() {
                println!("{}", contact.listing());
            }
            Ok(())
        }

        Commands::Show { name } => {
            let contact = store
                .get(&name)
                .ok_or_else(|| AppError::NotFound(format!("Contact '{}'", name)))?;

            println!("{}", display_contact(contact));
            Ok(())
        }

        Commands::Search { term } => {
            let search = store.search(&term);
            let mut found = 0;

            for (name, phone) in search.clone() {
                println!("{} - {}", name, phone);
                found += 1;
            }
            tracing::debug!(term = search.term(), found, "search finished");

            if found == 0 {
                println!("Couldn't find a contact matching '{}'", term.trim());
            }
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let source = CsvStorage::new(&src)?;
            let (imported, skipped) = store.import_from(&source)?;
            store.save()?;

            println!(
                "Successfully imported {} contacts from {:?}.",
                imported, source.path
            );
            if skipped > 0 {
                println!(
                    "Skipped {} records without a name or a digits-only phone.",
                    skipped
                );
            }
            Ok(())
        }

        Commands::Export { des } => {
            let target = CsvStorage::new(&des)?;
            let total = store.export_to(&target)?;

            println!(
                "Successfully exported {} contacts to {:?}.",
                total, target.path
            );
            Ok(())
        }

        Commands::Shell => run_shell(&mut store, io::stdin().lock(), io::stdout()),
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("contact_book=debug,warn")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
