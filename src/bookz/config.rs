use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ADDRESS_BOOK_FILE: &str = "address_book.bin";
const DEFAULT_NOTES_BOOK_FILE: &str = "notes_book.bin";

/// Configuration for bookz, stored in the data directory as config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookzConfig {
    /// Override for the storage directory; the platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_address_book_file")]
    pub address_book_file: String,

    #[serde(default = "default_notes_book_file")]
    pub notes_book_file: String,
}

fn default_address_book_file() -> String {
    DEFAULT_ADDRESS_BOOK_FILE.to_string()
}

fn default_notes_book_file() -> String {
    DEFAULT_NOTES_BOOK_FILE.to_string()
}

impl Default for BookzConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            address_book_file: default_address_book_file(),
            notes_book_file: default_notes_book_file(),
        }
    }
}

impl BookzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: BookzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// The directory holding both book files. Resolution order: the
    /// `BOOKZ_DATA` environment variable, then the configured override,
    /// then the platform data dir.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = std::env::var_os("BOOKZ_DATA") {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        ProjectDirs::from("com", "bookz", "bookz")
            .expect("could not determine data dir")
            .data_dir()
            .to_path_buf()
    }

    pub fn address_book_path(&self) -> PathBuf {
        self.data_dir().join(&self.address_book_file)
    }

    pub fn notes_book_path(&self) -> PathBuf {
        self.data_dir().join(&self.notes_book_file)
    }
}
