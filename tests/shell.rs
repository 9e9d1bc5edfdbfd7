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
fn shell_session_persists_every_change() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");

    // add Alice, add Bob, rename Alice to Alicia, delete Bob, exit
    let script = "1\nAlice\n123\na@x.com\n\n\
                  1\nBob\n456\n\n\n\
                  4\nAlice\nAlicia\n\n\n\n\
                  5\nBob\ny\n\
                  7\n";

    contact_book(&file)?
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully!"))
        .stdout(predicate::str::contains("Bye!"));

    assert_eq!(fs::read_to_string(&file)?, "Alicia|123|a@x.com|\n");
    Ok(())
}

#[test]
fn shell_ends_on_closed_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.txt");

    contact_book(&file)?
        .arg("shell")
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));
    Ok(())
}
