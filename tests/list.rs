use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn contact_book(file: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env("CONTACTS_FILE", file).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn listing_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");

    contact_book(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    for (name, phone) in [
        ("Patricia", "08066809241"),
        ("Diane", "08064879199"),
        ("John", "08046516806"),
    ] {
        contact_book(&file)?
            .args(["add", "--name", name, "--phone", phone])
            .assert()
            .success();
    }

    // Listed in the order they were added
    contact_book(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "Patricia - 08066809241\nDiane - 08064879199\nJohn - 08046516806\n",
        ));
    Ok(())
}

#[test]
fn malformed_lines_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");
    fs::write(&file, "Alice|123|a@x.com\n\nBob|456||\nbroken line\n")?;

    contact_book(&file)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::diff("Bob - 456\n"));
    Ok(())
}

#[test]
fn show_contact_details() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");
    fs::write(&file, "Alice|123|a@x.com|1 Main St\n")?;

    contact_book(&file)?
        .args(["show", "--name", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Name: Alice\nPhone: 123\nEmail: a@x.com\nAddress: 1 Main St",
        ));

    contact_book(&file)?
        .args(["show", "--name", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact 'alice' Not found"));
    Ok(())
}

#[test]
fn file_flag_overrides_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let env_file = dir.path().join("env.txt");
    let flag_file = dir.path().join("flag.txt");

    contact_book(&env_file)?
        .args(["--file"])
        .arg(&flag_file)
        .args(["add", "--name", "Alice", "--phone", "1"])
        .assert()
        .success();

    assert!(flag_file.exists());
    assert!(!env_file.exists());
    Ok(())
}

#[test]
fn unreadable_contacts_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    // A directory cannot be read as a contacts file
    contact_book(dir.path())?
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
    Ok(())
}
