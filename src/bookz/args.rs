use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookz")]
#[command(about = "Contact and notes book for the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage contacts
    #[command(subcommand, alias = "c")]
    Contact(ContactCommands),

    /// Manage notes
    #[command(subcommand, alias = "n")]
    Note(NoteCommands),
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        name: String,

        /// Phone numbers (repeatable)
        #[arg(short, long)]
        phone: Vec<String>,

        /// Email addresses (repeatable)
        #[arg(short, long)]
        email: Vec<String>,

        /// Birthday as DD-MM-YYYY
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// List all contacts
    #[command(alias = "ls")]
    List,

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Search contacts; use -N/+N for birthday windows
    Search {
        /// Text criteria, or -N ("at most N days to birthday") / +N
        /// ("at least N days")
        #[arg(allow_hyphen_values = true)]
        criteria: String,
    },

    /// Add a phone number to a contact
    AddPhone {
        name: String,
        phone: String,

        /// Assignment label shown next to the number (e.g. "home")
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Replace a phone number on a contact
    ChangePhone {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone number from a contact
    DeletePhone { name: String, phone: String },

    /// Add an email to a contact
    AddEmail {
        name: String,
        email: String,

        /// Assignment label shown next to the address (e.g. "work")
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Replace an email on a contact
    ChangeEmail {
        name: String,
        old: String,
        new: String,
    },

    /// Remove an email from a contact
    DeleteEmail { name: String, email: String },

    /// Set a contact's birthday (DD-MM-YYYY)
    Birthday { name: String, date: String },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Add a new note
    Add {
        text: String,

        /// Display title for the note
        #[arg(short, long)]
        title: Option<String>,
    },

    /// List all notes
    #[command(alias = "ls")]
    List,

    /// Delete a note by its number
    #[command(alias = "rm")]
    Delete { number: String },

    /// Search notes by text, title or creation date
    Search { criteria: String },

    /// Replace the text of a note
    Edit { number: String, text: String },

    /// Set a note's display title
    Title { number: String, title: String },
}
