//! The notes book: note records keyed by a 1-based decimal position.

use crate::error::Result;
use crate::records::RecordNote;
use crate::store::{criteria_pattern, Book};

/// Note records under contiguous decimal keys `"1".."N"`.
///
/// Keys are re-assigned on every deletion so iteration in insertion order
/// always yields the positions `1, 2, …, N` with no gaps. Insertion never
/// sorts; new notes take the next position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotesBook {
    book: Book<RecordNote>,
}

impl NotesBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renumbers, then inserts the note at the next position.
    pub fn add_record(&mut self, record: RecordNote) {
        let note_num = self.note_number();
        self.book.insert(note_num, record);
    }

    /// The key for the next note to be added.
    fn note_number(&mut self) -> String {
        self.re_numbering();
        (self.book.len() + 1).to_string()
    }

    /// Rewrites all keys to `"1".."N"` in current entry order.
    pub fn re_numbering(&mut self) {
        for (position, entry) in self.book.entries.iter_mut().enumerate() {
            entry.0 = (position + 1).to_string();
        }
    }

    pub fn get_record(&self, number: &str) -> Result<&RecordNote> {
        self.book.get_record(number)
    }

    pub fn get_record_mut(&mut self, number: &str) -> Result<&mut RecordNote> {
        self.book.get_record_mut(number)
    }

    /// Removes the note and renumbers so the contiguous-key invariant holds
    /// before any key is read again.
    pub fn delete_record(&mut self, number: &str) -> Result<RecordNote> {
        let record = self.book.delete_record(number)?;
        self.re_numbering();
        Ok(record)
    }

    pub fn contains_key(&self, number: &str) -> bool {
        self.book.contains_key(number)
    }

    pub fn len(&self) -> usize {
        self.book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordNote)> {
        self.book.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.book.keys()
    }

    pub fn records(&self) -> impl Iterator<Item = &RecordNote> {
        self.book.records()
    }

    pub fn save_records_to_file(&self, path: &std::path::Path) -> Result<()> {
        self.book.save_records_to_file(path)
    }

    pub fn read_records_from_file(&mut self, path: &std::path::Path) -> Result<()> {
        self.book.read_records_from_file(path)?;
        // Merged entries may collide with or extend the local numbering.
        self.re_numbering();
        Ok(())
    }

    /// Returns a new book with every note whose text, title or creation
    /// timestamp matches the criteria. No birthday-window analog exists for
    /// notes. Empty or unmatched criteria yields an empty book.
    pub fn search(&self, criteria: &str) -> NotesBook {
        let mut search_notes = NotesBook::new();
        let Some(first) = criteria.chars().next() else {
            return search_notes;
        };
        if first.is_ascii_punctuation() {
            return search_notes;
        }

        let lowered = criteria_pattern(&criteria.to_lowercase());
        let raw = criteria_pattern(criteria);

        for record in self.book.records() {
            let matched = lowered.is_match(&record.note().note().to_lowercase())
                || record
                    .note()
                    .name_note()
                    .is_some_and(|name| lowered.is_match(&name.to_lowercase()))
                || raw.is_match(record.date_of_creation());

            if matched {
                search_notes.add_record(record.clone());
            }
        }

        search_notes
    }
}
