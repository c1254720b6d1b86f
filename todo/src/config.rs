//! Configuration for the checklist binary.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the storage file
pub const DEFAULT_DATA_FILE: &str = "checklist.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File backing the key-value substrate (`CHECKLIST_DATA_FILE`)
    pub data_file: PathBuf,
    /// Forget persisted items before starting (`CHECKLIST_RESET`)
    pub reset: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            reset: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_file: lookup("CHECKLIST_DATA_FILE")
                .filter(|path| !path.trim().is_empty())
                .map_or(defaults.data_file, PathBuf::from),
            reset: lookup("CHECKLIST_RESET").is_some_and(|value| parse_flag(&value)),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
