//! # Bookz Architecture
//!
//! Bookz is a **UI-agnostic record-store library**: an address book and a
//! notes book with validation, search and binary persistence, plus a CLI
//! client on top. The library never writes to stdout/stderr and never
//! assumes a terminal; the binary owns all presentation.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, render.rs)                           │
//! │  - Parses arguments, renders tables, prints messages         │
//! │  - Runs the caller-side duplicate/missing pre-checks         │
//! │  - Converts typed errors to display strings via report()     │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Books (store/)                                              │
//! │  - Ordered key→record mapping, add/get/delete/search         │
//! │  - Whole-file binary persistence (gzip JSON, atomic rename)  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Records (records.rs) and Entities (entities.rs)             │
//! │  - RecordContact / RecordNote, tagged subrecords             │
//! │  - Validated single-value entities; no bypass path           │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Validators (validation.rs)                                  │
//! │  - Pure name/phone/email/date/criteria checks                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error contract
//!
//! Everything below the CLI returns typed [`error::BookzError`] values so
//! tests and programmatic callers can assert on kinds. The single boundary
//! adapter [`error::report`] turns them into `"<kind>: <message>"` strings
//! for print-and-continue callers.
//!
//! ## Module Overview
//!
//! - [`entities`]: `User`, `Phone`, `Email`, `Note` value entities
//! - [`records`]: `RecordContact`, `RecordNote` and tagged subrecords
//! - [`store`]: the generic ordered `Book` plus `AddressBook` / `NotesBook`
//! - [`validation`]: field validators and caller-side predicates
//! - [`config`]: storage location configuration
//! - [`error`]: error taxonomy and the display boundary

pub mod config;
pub mod entities;
pub mod error;
pub mod records;
pub mod store;
pub mod validation;

pub use error::{BookzError, Result};
