//! Records: the units stored in a book.
//!
//! A [`RecordContact`] owns one [`User`] plus ordered lists of tagged phone
//! and email subrecords. A [`RecordNote`] owns one [`Note`] plus an immutable
//! creation timestamp. Records never deduplicate subrecords; callers check
//! with the predicates in [`crate::validation`] before adding.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entities::{Email, Note, Phone, User};
use crate::error::{BookzError, Result};

/// Timestamp format of [`RecordNote::date_of_creation`].
pub const CREATION_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// The assignment slot of a subrecord: which category position it fills and
/// the label shown to the user (e.g. slot 0, "home").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub slot: u32,
    pub label: String,
}

impl Assignment {
    pub fn new(slot: u32, label: &str) -> Self {
        Self {
            slot,
            label: label.to_string(),
        }
    }
}

/// A tagged phone or email value attached to a contact. Subrecords keep
/// their insertion order; meaning does not depend on position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subrecord<T> {
    pub value: T,
    pub assignment: Option<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordContact {
    user: User,
    phone_numbers: Vec<Subrecord<Phone>>,
    emails: Vec<Subrecord<Email>>,
}

impl RecordContact {
    pub fn new(user: User) -> Self {
        Self {
            user,
            phone_numbers: Vec::new(),
            emails: Vec::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn phone_numbers(&self) -> &[Subrecord<Phone>] {
        &self.phone_numbers
    }

    pub fn emails(&self) -> &[Subrecord<Email>] {
        &self.emails
    }

    /// Appends a phone subrecord. Duplicates are not rejected here; the
    /// calling layer checks first.
    pub fn add_phone_number(&mut self, phone: Phone, assignment: Option<Assignment>) {
        self.phone_numbers.push(Subrecord {
            value: phone,
            assignment,
        });
    }

    pub fn add_email(&mut self, email: Email, assignment: Option<Assignment>) {
        self.emails.push(Subrecord {
            value: email,
            assignment,
        });
    }

    /// Replaces the first phone subrecord value-equal to `old`, preserving
    /// its position and assignment. Fails with a Key-kind error when no
    /// subrecord matches.
    pub fn change_phone_number(&mut self, old: &Phone, new: Phone) -> Result<()> {
        match self.phone_numbers.iter_mut().find(|sub| sub.value == *old) {
            Some(sub) => {
                sub.value = new;
                Ok(())
            }
            None => Err(BookzError::PhoneNotFound(old.phone().to_string())),
        }
    }

    pub fn change_email(&mut self, old: &Email, new: Email) -> Result<()> {
        match self.emails.iter_mut().find(|sub| sub.value == *old) {
            Some(sub) => {
                sub.value = new;
                Ok(())
            }
            None => Err(BookzError::EmailNotFound(old.email().to_string())),
        }
    }

    /// Removes the first phone subrecord value-equal to `phone`.
    pub fn delete_phone_number(&mut self, phone: &Phone) -> Result<()> {
        match self.phone_numbers.iter().position(|sub| sub.value == *phone) {
            Some(index) => {
                self.phone_numbers.remove(index);
                Ok(())
            }
            None => Err(BookzError::PhoneNotFound(phone.phone().to_string())),
        }
    }

    pub fn delete_email(&mut self, email: &Email) -> Result<()> {
        match self.emails.iter().position(|sub| sub.value == *email) {
            Some(index) => {
                self.emails.remove(index);
                Ok(())
            }
            None => Err(BookzError::EmailNotFound(email.email().to_string())),
        }
    }

    /// Parses, validates and sets the contact's birthday (`DD-MM-YYYY`).
    pub fn add_birthday(&mut self, birthday_date: &str) -> Result<()> {
        self.user.set_birthday(birthday_date)
    }

    /// Day count to the next occurrence of the birthday's month/day on or
    /// after `reference` (today when `None`). The this-year occurrence
    /// already passed rolls to next year; falling exactly on the reference
    /// date counts as 0. `None` when no birthday is set.
    pub fn days_to_birthday(&self, reference: Option<NaiveDate>) -> Option<i64> {
        let reference = reference.unwrap_or_else(|| Local::now().date_naive());
        let birthday = self.user.birthday_date()?;

        let mut next = birthday_in_year(reference.year(), birthday);
        if next < reference {
            next = birthday_in_year(reference.year() + 1, birthday);
        }

        Some((next - reference).num_days())
    }
}

/// The birthday's month/day projected into `year`. A Feb-29 birthday
/// resolves to Mar-1 in non-leap years.
fn birthday_in_year(year: i32, birthday: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordNote {
    note: Note,
    date_of_creation: String,
}

impl RecordNote {
    /// Stamps the creation time once; it never changes afterwards.
    pub fn new(note: Note) -> Self {
        Self {
            note,
            date_of_creation: Local::now().format(CREATION_FORMAT).to_string(),
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn add_note(&mut self, note_new: &str) -> Result<()> {
        self.note.set_note(note_new)
    }

    pub fn add_note_name(&mut self, note_name: &str) {
        self.note.set_name_note(note_name);
    }

    pub fn date_of_creation(&self) -> &str {
        &self.date_of_creation
    }
}
