//! # Configuration
//!
//! Configuration is loaded with [`confique`], layering environment variables over
//! an optional TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ENVUPDATE_DELIMITER`, `ENVUPDATE_EXCHANGE_CAPACITY`,
//!    `ENVUPDATE_MISSING_AS_EMPTY`.
//! 2. **Config file**: `<data_dir>/envupdate.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `delimiter` | `;` | The single character separating segments |
//! | `exchange_capacity` | `1024` | Max length of input strings and of the returned list |
//! | `missing_as_empty` | `false` | Treat an absent value as an empty list instead of failing |

use crate::buffer::{DEFAULT_EXCHANGE_CAPACITY, LONG_CAPACITY};
use crate::error::{EnvUpdateError, Result};
use crate::model::EditSettings;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "envupdate.toml";

/// Configuration for envupdate, stored in `envupdate.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnvUpdateConfig {
    /// Character separating segments of a list (exactly one character).
    #[config(default = ";", env = "ENVUPDATE_DELIMITER")]
    pub delimiter: String,

    /// Capacity, in characters, of the strings exchanged with the caller.
    #[config(default = 1024, env = "ENVUPDATE_EXCHANGE_CAPACITY")]
    pub exchange_capacity: usize,

    /// Read a value that does not exist as an empty list.
    #[config(default = false, env = "ENVUPDATE_MISSING_AS_EMPTY")]
    pub missing_as_empty: bool,
}

impl Default for EnvUpdateConfig {
    fn default() -> Self {
        Self {
            delimiter: ";".to_string(),
            exchange_capacity: DEFAULT_EXCHANGE_CAPACITY,
            missing_as_empty: false,
        }
    }
}

impl EnvUpdateConfig {
    /// Load from the environment and `<config_dir>/envupdate.toml`. A missing file
    /// is not an error.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::builder()
            .env()
            .file(config_dir.as_ref().join(CONFIG_FILENAME))
            .load()
            .map_err(|e| EnvUpdateError::Config(e.to_string()))
    }

    /// A commented sample `envupdate.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }

    /// The delimiter as a character.
    pub fn delimiter(&self) -> Result<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c != '\0' => Ok(c),
            _ => Err(EnvUpdateError::InvalidDelimiter(self.delimiter.clone())),
        }
    }

    pub fn edit_settings(&self) -> Result<EditSettings> {
        if self.exchange_capacity == 0 {
            return Err(EnvUpdateError::InvalidCapacity(self.exchange_capacity));
        }
        Ok(EditSettings {
            delimiter: self.delimiter()?,
            exchange_capacity: self.exchange_capacity,
            long_capacity: LONG_CAPACITY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EnvUpdateConfig::default();
        assert_eq!(config.delimiter, ";");
        assert_eq!(config.exchange_capacity, 1024);
        assert!(!config.missing_as_empty);
        assert_eq!(config.edit_settings().unwrap(), EditSettings::default());
    }

    #[test]
    fn test_delimiter_must_be_one_char() {
        let config = EnvUpdateConfig {
            delimiter: "::".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.delimiter(),
            Err(EnvUpdateError::InvalidDelimiter(_))
        ));

        let empty = EnvUpdateConfig {
            delimiter: String::new(),
            ..Default::default()
        };
        assert!(empty.delimiter().is_err());

        let colon = EnvUpdateConfig {
            delimiter: ":".to_string(),
            ..Default::default()
        };
        assert_eq!(colon.delimiter().unwrap(), ':');
    }

    #[test]
    fn test_zero_exchange_capacity_is_rejected() {
        let config = EnvUpdateConfig {
            exchange_capacity: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.edit_settings(),
            Err(EnvUpdateError::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "delimiter = \":\"\nexchange_capacity = 8192\nmissing_as_empty = true\n",
        )
        .unwrap();

        let config = EnvUpdateConfig::load(dir.path()).unwrap();
        assert_eq!(config.delimiter, ":");
        assert_eq!(config.exchange_capacity, 8192);
        assert!(config.missing_as_empty);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "exchange_capacity = 4096\n").unwrap();

        let config = EnvUpdateConfig::load(dir.path()).unwrap();
        assert_eq!(config.exchange_capacity, 4096);
        assert_eq!(config.delimiter().unwrap(), ';');
    }

    #[test]
    fn test_template_mentions_every_key() {
        let template = EnvUpdateConfig::template();
        assert!(template.contains("delimiter"));
        assert!(template.contains("exchange_capacity"));
        assert!(template.contains("missing_as_empty"));
    }
}
