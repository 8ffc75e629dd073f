use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookzError {
    /// A field holds a value of the wrong shape (bad character class).
    #[error("{0}")]
    InvalidType(String),

    /// A field is the right shape but out of range or grammar.
    #[error("{0}")]
    InvalidValue(String),

    /// A lookup, delete or get referenced a key absent from the book.
    #[error("The record '{0}' was not found")]
    RecordNotFound(String),

    #[error("The phone number '{0}' was not found on the contact")]
    PhoneNotFound(String),

    #[error("The email '{0}' was not found on the contact")]
    EmailNotFound(String),

    #[error("File not found {}", .0.display())]
    FileMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BookzError {
    /// Taxonomy kind shown to interactive callers by [`report`].
    pub fn kind(&self) -> &'static str {
        match self {
            BookzError::InvalidType(_) => "TypeError",
            BookzError::InvalidValue(_) => "ValueError",
            BookzError::RecordNotFound(_)
            | BookzError::PhoneNotFound(_)
            | BookzError::EmailNotFound(_) => "KeyError",
            BookzError::FileMissing(_) => "FileError",
            BookzError::Io(_) => "IOError",
            BookzError::Serialization(_) => "SerializationError",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookzError>;

/// Boundary adapter for print-and-continue callers (the CLI).
///
/// Store and validator code returns typed errors; layers that only want a
/// line of text to show the user go through here and get
/// `"<kind>: <message>"` instead of a raised fault.
pub fn report<T>(result: Result<T>) -> std::result::Result<T, String> {
    result.map_err(|err| format!("{}: {}", err.kind(), err))
}
