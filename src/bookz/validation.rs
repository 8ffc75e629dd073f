//! Field validation for bookz.
//!
//! Pure, stateless checks guarding every mutation of an entity. Each check
//! fails with a specific [`BookzError`] kind and a message naming the
//! offending value:
//!
//! - wrong character class → `InvalidType`
//! - right shape, out of range or grammar → `InvalidValue`
//!
//! The duplicate/missing predicates at the bottom belong to the calling
//! layer's contract: the books themselves never pre-check existence on
//! `add_record`, so interactive callers run these first to produce friendly
//! duplicate/missing errors.

use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BookzError, Result};
use crate::store::address_book::AddressBook;
use crate::store::notes_book::NotesBook;

/// Lowercase Cyrillic block allowed in contact names, plus space,
/// apostrophe and period.
const CYRILLIC: &str = "абвгґдеєёжзиіїйклмнопрстуфхцчшщъыьэюя. ʼ";

/// Full name alphabet: ASCII letters + the Cyrillic block in both cases.
/// Both apostrophe forms are accepted (ASCII `'` and the typographic `ʼ`).
static NAME_ALPHABET: Lazy<String> = Lazy::new(|| {
    let mut letters = String::new();
    letters.extend('a'..='z');
    letters.extend('A'..='Z');
    letters.push('\'');
    letters.push_str(CYRILLIC);
    letters.extend(CYRILLIC.chars().flat_map(char::to_uppercase));
    letters
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_.]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$")
        .expect("email pattern is a valid regex")
});

const NAME_LEN_MIN: usize = 1;
const NAME_LEN_MAX: usize = 49;

/// Canonical phone length bounds, counting the single leading `+`.
const PHONE_LEN_MIN: usize = 11;
const PHONE_LEN_MAX: usize = 16;

/// Characters removed by [`sanitize_phone_number`].
const PHONE_NOISE: &str = "(),-+x. ";

pub fn name_validation(name: &str) -> Result<()> {
    if let Some(bad) = name.chars().find(|c| !NAME_ALPHABET.contains(*c)) {
        return Err(BookzError::InvalidType(format!(
            "Contact's name can only contain letters, but got '{bad}' in '{name}'"
        )));
    }

    let length = name.chars().count();
    if !(NAME_LEN_MIN..=NAME_LEN_MAX).contains(&length) {
        return Err(BookzError::InvalidValue(format!(
            "Name length must be between {NAME_LEN_MIN} and {NAME_LEN_MAX}, but got '{name}'"
        )));
    }

    Ok(())
}

/// Strips grouping punctuation and any leading `+` from a raw phone string,
/// then prefixes a single `+`. Runs before both validation and storage so
/// equality and search see one canonical form.
pub fn sanitize_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !PHONE_NOISE.contains(*c)).collect();
    format!("+{digits}")
}

/// Validates a phone number in canonical (sanitized) form.
pub fn phone_validation(phone: &str) -> Result<()> {
    if !phone.chars().all(|c| c.is_ascii_digit() || c == '+') {
        return Err(BookzError::InvalidType(format!(
            "Contact's phone can only contain digits, but got '{phone}'"
        )));
    }

    let length = phone.chars().count();
    if !(PHONE_LEN_MIN..=PHONE_LEN_MAX).contains(&length) {
        return Err(BookzError::InvalidValue(format!(
            "Contact's phone must be between {PHONE_LEN_MIN} and {PHONE_LEN_MAX} characters, but got '{phone}'"
        )));
    }

    Ok(())
}

pub fn email_validation(email: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(BookzError::InvalidValue(format!(
            "Invalid '{email}' email address"
        )));
    }
    Ok(())
}

/// Parses a `DD-MM-YYYY` birthday string.
pub fn parse_birthday(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%d-%m-%Y").map_err(|_| {
        BookzError::InvalidValue(format!(
            "Birthday '{date}' must be a valid date in DD-MM-YYYY format"
        ))
    })
}

/// A birthday must lie strictly in the past; today is rejected.
pub fn birthday_date_validation(birthday_date: NaiveDate) -> Result<()> {
    let today = Local::now().date_naive();
    if birthday_date >= today {
        return Err(BookzError::InvalidValue(format!(
            "Birthday '{}' must be in the past",
            birthday_date.format("%d-%m-%Y")
        )));
    }
    Ok(())
}

pub fn note_validation(note: &str) -> Result<()> {
    if note.is_empty() {
        return Err(BookzError::InvalidValue(
            "Note must be at least 1 character long".to_string(),
        ));
    }
    Ok(())
}

/// Text-search criteria must be purely digits or purely alphabetic. The
/// birthday-window forms (`-N`/`+N`) are accepted by the books' `search`
/// directly and never reach this check.
pub fn criteria_validation(criteria: &str) -> Result<()> {
    let all_digits = !criteria.is_empty() && criteria.chars().all(|c| c.is_ascii_digit());
    let all_alpha = !criteria.is_empty() && criteria.chars().all(char::is_alphabetic);
    if !all_digits && !all_alpha {
        return Err(BookzError::InvalidValue(format!(
            "Criteria '{criteria}' must be only numbers or letters"
        )));
    }
    Ok(())
}

pub fn check_name_in_address_book(address_book: &AddressBook, name: &str) -> Result<()> {
    if address_book.contains_key(name) {
        return Err(BookzError::InvalidValue(format!(
            "The contact '{name}' already exists in the address book"
        )));
    }
    Ok(())
}

pub fn check_name_not_in_address_book(address_book: &AddressBook, name: &str) -> Result<()> {
    if !address_book.contains_key(name) {
        return Err(BookzError::RecordNotFound(name.to_string()));
    }
    Ok(())
}

pub fn check_number_not_in_notes_book(notes_book: &NotesBook, number: &str) -> Result<()> {
    if !notes_book.contains_key(number) {
        return Err(BookzError::RecordNotFound(number.to_string()));
    }
    Ok(())
}
