//! The address book: contact records keyed by their user's name.

use crate::error::Result;
use crate::records::RecordContact;
use crate::store::{birthday_window, criteria_pattern, Book};

/// Contact records keyed by (lowercased) name, kept in ascending key order.
///
/// Keys come from [`crate::entities::User`], which validates and lowercases
/// names on construction, so a record with an empty or mixed-case key can
/// never reach the book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    book: Book<RecordContact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or overwrites) the record under its user's name and re-sorts
    /// the book, so iteration always yields ascending key order.
    pub fn add_record(&mut self, record: RecordContact) {
        let name = record.user().name().to_string();
        self.book.insert(name, record);
        self.book.sort_book();
    }

    pub fn get_record(&self, name: &str) -> Result<&RecordContact> {
        self.book.get_record(name)
    }

    pub fn get_record_mut(&mut self, name: &str) -> Result<&mut RecordContact> {
        self.book.get_record_mut(name)
    }

    pub fn delete_record(&mut self, name: &str) -> Result<RecordContact> {
        self.book.delete_record(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.book.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordContact)> {
        self.book.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.book.keys()
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordContact> {
        self.book.records()
    }

    pub fn save_records_to_file(&self, path: &std::path::Path) -> Result<()> {
        self.book.save_records_to_file(path)
    }

    pub fn read_records_from_file(&mut self, path: &std::path::Path) -> Result<()> {
        self.book.read_records_from_file(path)
    }

    /// Returns a new book with every matching record.
    ///
    /// Two independent rules, either of which admits a record:
    ///
    /// 1. Text criteria (first char not punctuation): the lowercased name,
    ///    the birthday formatted `DD-MM-YYYY`, any phone value, or any
    ///    lowercased email value matches the criteria (regex, with literal
    ///    fallback).
    /// 2. Birthday window: `-N` admits records whose birthday is at most
    ///    `N` days away, `+N` those at least `N` days away.
    ///
    /// Re-keying on insert dedupes records admitted by both rules. Empty or
    /// unmatched criteria yields an empty book, never an error.
    pub fn search(&self, criteria: &str) -> AddressBook {
        let mut search_contacts = AddressBook::new();
        let Some(first) = criteria.chars().next() else {
            return search_contacts;
        };

        if !first.is_ascii_punctuation() {
            let lowered = criteria_pattern(&criteria.to_lowercase());
            let raw = criteria_pattern(criteria);

            for record in self.book.records() {
                let birthday_text = record
                    .user()
                    .birthday_date()
                    .map(|date| date.format("%d-%m-%Y").to_string());

                let matched = lowered.is_match(record.user().name())
                    || birthday_text.is_some_and(|text| raw.is_match(&text))
                    || record
                        .phone_numbers()
                        .iter()
                        .any(|sub| raw.is_match(sub.value.phone()))
                    || record
                        .emails()
                        .iter()
                        .any(|sub| lowered.is_match(&sub.value.email().to_lowercase()));

                if matched {
                    search_contacts.add_record(record.clone());
                }
            }
        }

        if let Some((sign, threshold)) = birthday_window(criteria) {
            for record in self.book.records() {
                let Some(days) = record.days_to_birthday(None) else {
                    continue;
                };
                let within = match sign {
                    '-' => days <= threshold,
                    _ => days >= threshold,
                };
                if within {
                    search_contacts.add_record(record.clone());
                }
            }
        }

        search_contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Email, Phone, User};
    use crate::error::BookzError;
    use crate::validation::{check_name_in_address_book, check_name_not_in_address_book};
    use chrono::{Datelike, Days, Local};
    use tempfile::TempDir;

    fn sasha() -> RecordContact {
        let mut record = RecordContact::new(User::new("sasha").unwrap());
        record.add_birthday("26-06-1982").unwrap();
        record.add_phone_number(Phone::new("380951234567").unwrap(), None);
        record.add_email(Email::new("test_sasha@gmail.com").unwrap(), None);
        record
    }

    fn named(name: &str) -> RecordContact {
        RecordContact::new(User::new(name).unwrap())
    }

    #[test]
    fn test_add_and_get_record() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        let record = book.get_record("sasha").unwrap();
        assert_eq!(record.user().name(), "sasha");
    }

    #[test]
    fn test_delete_then_get_is_a_key_error() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        book.delete_record("sasha").unwrap();
        assert!(matches!(
            book.get_record("sasha"),
            Err(BookzError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_keys_sorted_after_every_add() {
        let mut book = AddressBook::new();
        for name in ["petro", "anna", "solomia", "bohdan"] {
            book.add_record(named(name));
            let mut expected: Vec<String> = book.keys().map(str::to_string).collect();
            expected.sort();
            let actual: Vec<String> = book.keys().map(str::to_string).collect();
            assert_eq!(actual, expected);
        }
        let keys: Vec<&str> = book.keys().collect();
        assert_eq!(keys, ["anna", "bohdan", "petro", "solomia"]);
    }

    #[test]
    fn test_add_overwrites_same_name() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        book.add_record(named("sasha"));
        assert_eq!(book.len(), 1);
        assert!(book.get_record("sasha").unwrap().phone_numbers().is_empty());
    }

    #[test]
    fn test_search_by_name_substring() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        book.add_record(named("petro"));

        let found = book.search("sa");
        assert_eq!(found.len(), 1);
        assert!(found.contains_key("sasha"));

        assert!(book.search("zzz").is_empty());
        assert!(book.search("").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_on_name() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        assert!(book.search("SA").contains_key("sasha"));
    }

    #[test]
    fn test_search_by_birthday_substring() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        assert!(book.search("26-06").contains_key("sasha"));
        assert!(book.search("1982").contains_key("sasha"));
    }

    #[test]
    fn test_search_by_phone_and_email() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        assert!(book.search("0951").contains_key("sasha"));
        assert!(book.search("gmail").contains_key("sasha"));
    }

    #[test]
    fn test_search_result_is_deduped() {
        // "sasha" matches both the name and the email local part; the
        // result still holds the record once.
        let mut book = AddressBook::new();
        book.add_record(sasha());
        assert_eq!(book.search("sasha").len(), 1);
    }

    #[test]
    fn test_search_birthday_window_sign_convention() {
        let today = Local::now().date_naive();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap();

        // 1992 is a leap year, so any month/day combination is valid.
        let mut celebrant = named("anna");
        celebrant
            .add_birthday(&format!("{:02}-{:02}-1992", today.day(), today.month()))
            .unwrap();
        let mut upcoming = named("petro");
        upcoming
            .add_birthday(&format!(
                "{:02}-{:02}-1992",
                tomorrow.day(),
                tomorrow.month()
            ))
            .unwrap();
        let birthdayless = named("maria");

        let mut book = AddressBook::new();
        book.add_record(celebrant);
        book.add_record(upcoming);
        book.add_record(birthdayless);

        // "-0": at most 0 days away, i.e. only a today-birthday.
        let found = book.search("-0");
        assert!(found.contains_key("anna"));
        assert!(!found.contains_key("petro"));

        // "+1": at least 1 day away.
        let found = book.search("+1");
        assert!(!found.contains_key("anna"));
        assert!(found.contains_key("petro"));

        // "-366" admits every record that has a birthday at all.
        let found = book.search("-366");
        assert_eq!(found.len(), 2);
        assert!(!found.contains_key("maria"));
    }

    #[test]
    fn test_search_ignores_other_punctuation_criteria() {
        let mut book = AddressBook::new();
        book.add_record(sasha());
        assert!(book.search("!sasha").is_empty());
        assert!(book.search("-abc").is_empty());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("address_book.bin");

        let mut book = AddressBook::new();
        book.add_record(sasha());
        book.add_record(named("petro"));
        book.save_records_to_file(&path).unwrap();

        let mut restored = AddressBook::new();
        restored.read_records_from_file(&path).unwrap();
        assert_eq!(restored, book);

        let record = restored.get_record("sasha").unwrap();
        assert_eq!(record.phone_numbers()[0].value.phone(), "+380951234567");
        assert_eq!(
            record.user().birthday_date(),
            chrono::NaiveDate::from_ymd_opt(1982, 6, 26)
        );
    }

    #[test]
    fn test_duplicate_and_missing_predicates() {
        let mut book = AddressBook::new();
        book.add_record(sasha());

        assert!(matches!(
            check_name_in_address_book(&book, "sasha"),
            Err(BookzError::InvalidValue(_))
        ));
        assert!(check_name_in_address_book(&book, "petro").is_ok());

        assert!(check_name_not_in_address_book(&book, "sasha").is_ok());
        assert!(matches!(
            check_name_not_in_address_book(&book, "petro"),
            Err(BookzError::RecordNotFound(_))
        ));
    }
}
