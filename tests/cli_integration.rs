#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookz_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("bookz"));
    cmd.env("BOOKZ_DATA", data_dir.path().as_os_str());
    cmd
}

#[test]
fn test_contact_full_workflow() {
    let data = TempDir::new().unwrap();

    // 1. Add a contact with phone, email and birthday
    bookz_cmd(&data)
        .args([
            "contact",
            "add",
            "Sasha",
            "--phone",
            "38(095)123-45-67",
            "--email",
            "test_sasha@gmail.com",
            "--birthday",
            "26-06-1982",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'sasha' added."));

    // 2. List shows the sanitized phone and the birthday
    bookz_cmd(&data)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sasha"))
        .stdout(predicate::str::contains("+380951234567"))
        .stdout(predicate::str::contains("26-06-1982"));

    // 3. The book persists across invocations
    bookz_cmd(&data)
        .args(["contact", "search", "sa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sasha"));

    // 4. Unmatched criteria is an empty result, not an error
    bookz_cmd(&data)
        .args(["contact", "search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts match"));

    // 5. Delete, then the book is empty
    bookz_cmd(&data)
        .args(["contact", "delete", "sasha"])
        .assert()
        .success();

    bookz_cmd(&data)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_duplicate_contact_is_rejected_before_the_store() {
    let data = TempDir::new().unwrap();

    bookz_cmd(&data)
        .args(["contact", "add", "petro"])
        .assert()
        .success();

    bookz_cmd(&data)
        .args(["contact", "add", "Petro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ValueError"))
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_fields_report_their_kind() {
    let data = TempDir::new().unwrap();

    bookz_cmd(&data)
        .args(["contact", "add", "sasha", "--phone", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ValueError"));

    bookz_cmd(&data)
        .args(["contact", "add", "s4sha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TypeError"));

    bookz_cmd(&data)
        .args(["contact", "delete", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KeyError"));
}

#[test]
fn test_phone_change_and_birthday_window_search() {
    let data = TempDir::new().unwrap();

    bookz_cmd(&data)
        .args(["contact", "add", "anna", "--phone", "380951234567"])
        .assert()
        .success();

    bookz_cmd(&data)
        .args([
            "contact",
            "change-phone",
            "anna",
            "380951234567",
            "380671112233",
        ])
        .assert()
        .success();

    bookz_cmd(&data)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+380671112233"));

    // Changing a number that is not on the contact is a KeyError.
    bookz_cmd(&data)
        .args([
            "contact",
            "change-phone",
            "anna",
            "380951234567",
            "380509998877",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("KeyError"));

    // No birthday set: the window query matches nothing.
    bookz_cmd(&data)
        .args(["contact", "search", "-366"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts match"));
}

#[test]
fn test_note_workflow_renumbers_after_delete() {
    let data = TempDir::new().unwrap();

    for text in ["Buy milk", "Call the bank", "Water the plants"] {
        bookz_cmd(&data)
            .args(["note", "add", text])
            .assert()
            .success();
    }

    bookz_cmd(&data)
        .args(["note", "delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note 2 deleted."));

    // The remaining notes close the gap: "Water the plants" is now note 2.
    bookz_cmd(&data)
        .args(["note", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Water the plants"))
        .stdout(predicate::str::contains("Call the bank").not());

    bookz_cmd(&data)
        .args(["note", "search", "plants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Water the plants"));
}
