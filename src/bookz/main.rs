use clap::Parser;
use colored::*;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use log::info;

use bookz::config::BookzConfig;
use bookz::entities::{Email, Note, Phone, User};
use bookz::error::{report, BookzError, Result};
use bookz::records::{Assignment, RecordContact, RecordNote};
use bookz::store::address_book::AddressBook;
use bookz::store::notes_book::NotesBook;
use bookz::validation::{
    check_name_in_address_book, check_name_not_in_address_book, check_number_not_in_notes_book,
    criteria_validation,
};

mod args;
mod render;

use args::{Cli, Commands, ContactCommands, NoteCommands};

fn main() {
    if let Err(message) = run() {
        eprintln!("{}", message.red());
        std::process::exit(1);
    }
}

fn run() -> std::result::Result<(), String> {
    let cli = Cli::parse();
    let config = BookzConfig::load(BookzConfig::default().data_dir()).unwrap_or_default();
    let _logger = init_logging(&config);

    match cli.command {
        Commands::Contact(command) => report(handle_contact(&config, command)),
        Commands::Note(command) => report(handle_note(&config, command)),
    }
}

/// File logging under `<data dir>/logs`; a failed bootstrap downgrades to
/// no logging rather than aborting the command.
fn init_logging(config: &BookzConfig) -> Option<LoggerHandle> {
    let log_dir = config.data_dir().join("logs");
    let result = Logger::try_with_env_or_str("info").and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("bookz"))
            .rotate(
                Criterion::Size(1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .append()
            .start()
    });

    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("{}", format!("Warning: logging disabled: {err}").yellow());
            None
        }
    }
}

fn load_address_book(config: &BookzConfig) -> Result<AddressBook> {
    let mut book = AddressBook::new();
    match book.read_records_from_file(&config.address_book_path()) {
        Ok(()) | Err(BookzError::FileMissing(_)) => Ok(book),
        Err(err) => Err(err),
    }
}

fn load_notes_book(config: &BookzConfig) -> Result<NotesBook> {
    let mut book = NotesBook::new();
    match book.read_records_from_file(&config.notes_book_path()) {
        Ok(()) | Err(BookzError::FileMissing(_)) => Ok(book),
        Err(err) => Err(err),
    }
}

fn handle_contact(config: &BookzConfig, command: ContactCommands) -> Result<()> {
    let mut book = load_address_book(config)?;

    match command {
        ContactCommands::Add {
            name,
            phone,
            email,
            birthday,
        } => {
            let user = User::new(&name)?;
            check_name_in_address_book(&book, user.name())?;

            let mut record = RecordContact::new(user);
            for raw in &phone {
                record.add_phone_number(Phone::new(raw)?, None);
            }
            for raw in &email {
                record.add_email(Email::new(raw)?, None);
            }
            if let Some(date) = &birthday {
                record.add_birthday(date)?;
            }

            let key = record.user().name().to_string();
            book.add_record(record);
            book.save_records_to_file(&config.address_book_path())?;
            info!("added contact '{key}'");
            print_success(&format!("Contact '{key}' added."));
        }

        ContactCommands::List => {
            if book.is_empty() {
                println!("No contacts found.");
            } else {
                print!("{}", render::contacts_table(&book));
            }
        }

        ContactCommands::Delete { name } => {
            let name = name.to_lowercase();
            book.delete_record(&name)?;
            book.save_records_to_file(&config.address_book_path())?;
            info!("deleted contact '{name}'");
            print_success(&format!("Contact '{name}' deleted."));
        }

        ContactCommands::Search { criteria } => {
            if !is_birthday_window(&criteria) {
                criteria_validation(&criteria)?;
            }
            let found = book.search(&criteria);
            if found.is_empty() {
                println!("No contacts match '{criteria}'.");
            } else {
                print!("{}", render::contacts_table(&found));
            }
        }

        ContactCommands::AddPhone { name, phone, label } => {
            let name = name.to_lowercase();
            check_name_not_in_address_book(&book, &name)?;

            let phone = Phone::new(&phone)?;
            let record = book.get_record_mut(&name)?;
            if record.phone_numbers().iter().any(|sub| sub.value == phone) {
                return Err(BookzError::InvalidValue(format!(
                    "The phone number '{}' already exists on '{name}'",
                    phone.phone()
                )));
            }

            let assignment =
                label.map(|label| Assignment::new(record.phone_numbers().len() as u32, &label));
            record.add_phone_number(phone, assignment);
            book.save_records_to_file(&config.address_book_path())?;
            print_success(&format!("Phone number added to '{name}'."));
        }

        ContactCommands::ChangePhone { name, old, new } => {
            let name = name.to_lowercase();
            let record = book.get_record_mut(&name)?;
            record.change_phone_number(&Phone::new(&old)?, Phone::new(&new)?)?;
            book.save_records_to_file(&config.address_book_path())?;
            print_success(&format!("Phone number changed on '{name}'."));
        }

        ContactCommands::DeletePhone { name, phone } => {
            let name = name.to_lowercase();
            let record = book.get_record_mut(&name)?;
            record.delete_phone_number(&Phone::new(&phone)?)?;
            book.save_records_to_file(&config.address_book_path())?;
            print_success(&format!("Phone number deleted from '{name}'."));
        }

        ContactCommands::AddEmail { name, email, label } => {
            let name = name.to_lowercase();
            check_name_not_in_address_book(&book, &name)?;

            let email = Email::new(&email)?;
            let record = book.get_record_mut(&name)?;
            if record.emails().iter().any(|sub| sub.value == email) {
                return Err(BookzError::InvalidValue(format!(
                    "The email '{}' already exists on '{name}'",
                    email.email()
                )));
            }

            let assignment =
                label.map(|label| Assignment::new(record.emails().len() as u32, &label));
            record.add_email(email, assignment);
            book.save_records_to_file(&config.address_book_path())?;
            print_success(&format!("Email added to '{name}'."));
        }

        ContactCommands::ChangeEmail { name, old, new } => {
            let name = name.to_lowercase();
            let record = book.get_record_mut(&name)?;
            record.change_email(&Email::new(&old)?, Email::new(&new)?)?;
            book.save_records_to_file(&config.address_book_path())?;
            print_success(&format!("Email changed on '{name}'."));
        }

        ContactCommands::DeleteEmail { name, email } => {
            let name = name.to_lowercase();
            let record = book.get_record_mut(&name)?;
            record.delete_email(&Email::new(&email)?)?;
            book.save_records_to_file(&config.address_book_path())?;
            print_success(&format!("Email deleted from '{name}'."));
        }

        ContactCommands::Birthday { name, date } => {
            let name = name.to_lowercase();
            let record = book.get_record_mut(&name)?;
            record.add_birthday(&date)?;
            book.save_records_to_file(&config.address_book_path())?;
            print_success(&format!("Birthday set for '{name}'."));
        }
    }

    Ok(())
}

fn handle_note(config: &BookzConfig, command: NoteCommands) -> Result<()> {
    let mut book = load_notes_book(config)?;

    match command {
        NoteCommands::Add { text, title } => {
            let mut record = RecordNote::new(Note::new(&text)?);
            if let Some(title) = &title {
                record.add_note_name(title);
            }
            book.add_record(record);
            book.save_records_to_file(&config.notes_book_path())?;
            info!("added note {}", book.len());
            print_success(&format!("Note {} added.", book.len()));
        }

        NoteCommands::List => {
            if book.is_empty() {
                println!("No notes found.");
            } else {
                print!("{}", render::notes_table(&book));
            }
        }

        NoteCommands::Delete { number } => {
            check_number_not_in_notes_book(&book, &number)?;
            book.delete_record(&number)?;
            book.save_records_to_file(&config.notes_book_path())?;
            info!("deleted note {number}");
            print_success(&format!("Note {number} deleted."));
        }

        NoteCommands::Search { criteria } => {
            criteria_validation(&criteria)?;
            let found = book.search(&criteria);
            if found.is_empty() {
                println!("No notes match '{criteria}'.");
            } else {
                print!("{}", render::notes_table(&found));
            }
        }

        NoteCommands::Edit { number, text } => {
            let record = book.get_record_mut(&number)?;
            record.add_note(&text)?;
            book.save_records_to_file(&config.notes_book_path())?;
            print_success(&format!("Note {number} updated."));
        }

        NoteCommands::Title { number, title } => {
            let record = book.get_record_mut(&number)?;
            record.add_note_name(&title);
            book.save_records_to_file(&config.notes_book_path())?;
            print_success(&format!("Note {number} titled."));
        }
    }

    Ok(())
}

/// `-N`/`+N` birthday-window criteria bypass the text-criteria check; the
/// book's `search` interprets them itself.
fn is_birthday_window(criteria: &str) -> bool {
    let mut chars = criteria.chars();
    matches!(chars.next(), Some('-') | Some('+'))
        && !chars.as_str().is_empty()
        && chars.as_str().chars().all(|c| c.is_ascii_digit())
}

fn print_success(message: &str) {
    println!("{}", message.green());
}
