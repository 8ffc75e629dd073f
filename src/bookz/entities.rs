//! Single-value entities: `User`, `Phone`, `Email`, `Note`.
//!
//! Each entity wraps one validated scalar. Construction and mutation run the
//! same validator, so no path commits an unchecked value. Equality is
//! value-based, which the search and subrecord-membership logic rely on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::{
    birthday_date_validation, email_validation, name_validation, note_validation, parse_birthday,
    phone_validation, sanitize_phone_number,
};

/// The identity of a contact: a validated, lowercased name and an optional
/// birthday. The lowercased name doubles as the address-book key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    birthday_date: Option<NaiveDate>,
}

impl User {
    pub fn new(name: &str) -> Result<Self> {
        name_validation(name)?;
        Ok(Self {
            name: name.to_lowercase(),
            birthday_date: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, new_name: &str) -> Result<()> {
        name_validation(new_name)?;
        self.name = new_name.to_lowercase();
        Ok(())
    }

    pub fn birthday_date(&self) -> Option<NaiveDate> {
        self.birthday_date
    }

    /// Parses and validates a `DD-MM-YYYY` birthday; must be strictly past.
    pub fn set_birthday(&mut self, birthday_date: &str) -> Result<()> {
        let date = parse_birthday(birthday_date)?;
        birthday_date_validation(date)?;
        self.birthday_date = Some(date);
        Ok(())
    }
}

/// A phone number held in canonical form: sanitized digits behind a single
/// leading `+`. Two phones built from inputs that sanitize identically
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    phone: String,
}

impl Phone {
    pub fn new(phone: &str) -> Result<Self> {
        let canonical = sanitize_phone_number(phone);
        phone_validation(&canonical)?;
        Ok(Self { phone: canonical })
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, new_phone: &str) -> Result<()> {
        let canonical = sanitize_phone_number(new_phone);
        phone_validation(&canonical)?;
        self.phone = canonical;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    email: String,
}

impl Email {
    pub fn new(email: &str) -> Result<Self> {
        email_validation(email)?;
        Ok(Self {
            email: email.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, new_email: &str) -> Result<()> {
        email_validation(new_email)?;
        self.email = new_email.to_string();
        Ok(())
    }
}

/// Free-form note text with an optional display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    note: String,
    name_note: Option<String>,
}

impl Note {
    pub fn new(note: &str) -> Result<Self> {
        note_validation(note)?;
        Ok(Self {
            note: note.to_string(),
            name_note: None,
        })
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, new_note: &str) -> Result<()> {
        note_validation(new_note)?;
        self.note = new_note.to_string();
        Ok(())
    }

    pub fn name_note(&self) -> Option<&str> {
        self.name_note.as_deref()
    }

    pub fn set_name_note(&mut self, name: &str) {
        self.name_note = Some(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookzError;

    #[test]
    fn test_user_lowercases_name() {
        let user = User::new("Sasha").unwrap();
        assert_eq!(user.name(), "sasha");
    }

    #[test]
    fn test_user_rejects_invalid_name() {
        assert!(matches!(
            User::new("sasha77"),
            Err(BookzError::InvalidType(_))
        ));
    }

    #[test]
    fn test_user_birthday_roundtrip() {
        let mut user = User::new("sasha").unwrap();
        assert_eq!(user.birthday_date(), None);

        user.set_birthday("26-06-1982").unwrap();
        assert_eq!(
            user.birthday_date(),
            NaiveDate::from_ymd_opt(1982, 6, 26)
        );
    }

    #[test]
    fn test_user_set_name_runs_validation() {
        let mut user = User::new("sasha").unwrap();
        assert!(user.set_name("p3tro").is_err());
        // Failed mutation leaves the old value intact.
        assert_eq!(user.name(), "sasha");
    }

    #[test]
    fn test_phone_equality_after_sanitize() {
        let messy = Phone::new("38(095)123-45-67").unwrap();
        let clean = Phone::new("+380951234567").unwrap();
        assert_eq!(messy, clean);
        assert_eq!(messy.phone(), "+380951234567");
    }

    #[test]
    fn test_phone_rejects_short_number() {
        assert!(matches!(
            Phone::new("12345"),
            Err(BookzError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_email_value_equality() {
        let a = Email::new("test_sasha@gmail.com").unwrap();
        let b = Email::new("test_sasha@gmail.com").unwrap();
        assert_eq!(a, b);
        assert!(Email::new("not-an-email").is_err());
    }

    #[test]
    fn test_note_title_is_optional() {
        let mut note = Note::new("buy milk").unwrap();
        assert_eq!(note.name_note(), None);
        note.set_name_note("groceries");
        assert_eq!(note.name_note(), Some("groceries"));
    }

    #[test]
    fn test_note_rejects_empty_text() {
        assert!(Note::new("").is_err());
        let mut note = Note::new("x").unwrap();
        assert!(note.set_note("").is_err());
        assert_eq!(note.note(), "x");
    }
}
