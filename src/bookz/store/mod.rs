//! # Storage Layer
//!
//! [`Book`] is the ordered, string-keyed mapping both books are built on.
//! It deliberately exposes only the record-store contract (get, insert,
//! delete, sort, ordered iteration, whole-file persistence), not the full
//! mutation surface of the underlying map.
//!
//! ## Ordering
//!
//! Entries keep insertion order. [`AddressBook`](address_book::AddressBook)
//! re-sorts by key after every insert; [`NotesBook`](notes_book::NotesBook)
//! never sorts (its numeric keys are assigned monotonically and renumbered
//! on delete).
//!
//! ## Persistence
//!
//! One opaque binary file per book: the ordered key→record entries as
//! gzip-compressed JSON. Saves go through a temp file and a rename so a
//! crash mid-write cannot corrupt the previous blob. Reads *merge* into the
//! current book (existing keys are overwritten), mirroring how the
//! interactive front end restores its books at startup.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::debug;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{BookzError, Result};

pub mod address_book;
pub mod notes_book;

/// An ordered mapping from string keys to records.
#[derive(Debug, Clone, PartialEq)]
pub struct Book<R> {
    pub(crate) entries: Vec<(String, R)>,
}

impl<R> Default for Book<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Book<R> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn get_record(&self, key: &str) -> Result<&R> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, record)| record)
            .ok_or_else(|| BookzError::RecordNotFound(key.to_string()))
    }

    pub fn get_record_mut(&mut self, key: &str) -> Result<&mut R> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, record)| record)
            .ok_or_else(|| BookzError::RecordNotFound(key.to_string()))
    }

    pub fn delete_record(&mut self, key: &str) -> Result<R> {
        match self.entries.iter().position(|(existing, _)| existing == key) {
            Some(index) => Ok(self.entries.remove(index).1),
            None => Err(BookzError::RecordNotFound(key.to_string())),
        }
    }

    /// Overwrites the record at `key` if present, otherwise appends.
    pub(crate) fn insert(&mut self, key: String, record: R) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = record,
            None => self.entries.push((key, record)),
        }
    }

    /// Sorts entries lexicographically by key.
    pub fn sort_book(&mut self) {
        self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    /// Entries in their current order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.entries
            .iter()
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|(_, record)| record)
    }
}

impl<R: Serialize> Book<R> {
    /// Serializes the whole mapping to `path` as one gzip-compressed JSON
    /// blob, via a temp file and an atomic rename.
    pub fn save_records_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = path.with_extension("tmp");
        let file = File::create(&tmp_path)?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        serde_json::to_writer(&mut encoder, &self.entries)?;
        encoder.finish()?;
        fs::rename(&tmp_path, path)?;

        debug!("saved {} records to {}", self.entries.len(), path.display());
        Ok(())
    }
}

impl<R: DeserializeOwned> Book<R> {
    /// Reads a blob written by [`Book::save_records_to_file`] and merges its
    /// entries into this book, overwriting records at existing keys. A
    /// missing file fails with a file-missing error naming the path;
    /// decode failures of an existing file surface unchanged.
    pub fn read_records_from_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => BookzError::FileMissing(path.to_path_buf()),
            _ => BookzError::Io(err),
        })?;

        let decoder = GzDecoder::new(file);
        let entries: Vec<(String, R)> = serde_json::from_reader(decoder)?;

        debug!("read {} records from {}", entries.len(), path.display());
        for (key, record) in entries {
            self.insert(key, record);
        }
        Ok(())
    }
}

/// Compiles a search criteria string, falling back to a literal substring
/// pattern when the criteria is not a valid regex. Search never errors.
pub(crate) fn criteria_pattern(criteria: &str) -> Regex {
    Regex::new(criteria).unwrap_or_else(|_| {
        Regex::new(&regex::escape(criteria)).expect("escaped pattern always compiles")
    })
}

/// A `-N` / `+N` birthday-window criteria, if the string has that shape.
pub(crate) fn birthday_window(criteria: &str) -> Option<(char, i64)> {
    let mut chars = criteria.chars();
    let sign = chars.next()?;
    if sign != '-' && sign != '+' {
        return None;
    }
    let rest = chars.as_str();
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((sign, rest.parse().ok()?))
}
