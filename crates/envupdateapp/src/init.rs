//! # Data Directory and Context Setup
//!
//! Every UI starts by calling [`initialize`], which wires configuration and storage
//! into an [`EnvUpdateApi`].
//!
//! ## Data Directory Resolution
//!
//! The directory holding both the value files and `envupdate.toml` is, in order:
//!
//! 1. the explicit override (the CLI's `--data` flag),
//! 2. the `ENVUPDATE_DATA` environment variable (primarily for testing),
//! 3. the OS-appropriate data directory (via the `directories` crate).
//!
//! The directory does not need to exist: reads of a missing scope file see no
//! values, and the first write creates it.

use crate::api::EnvUpdateApi;
use crate::config::EnvUpdateConfig;
use crate::error::{EnvUpdateError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "ENVUPDATE_DATA";

pub struct EnvUpdateContext {
    pub api: EnvUpdateApi<FileStore>,
    pub config: EnvUpdateConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "envupdate", "envupdate")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            EnvUpdateError::Config("Could not determine a data directory".to_string())
        })
}

/// Loads configuration and builds the file-backed API.
///
/// # Examples
///
/// ```ignore
/// // OS data directory (or ENVUPDATE_DATA when set)
/// let ctx = initialize(None)?;
///
/// // Explicit data directory
/// let ctx = initialize(Some(PathBuf::from("/tmp/envupdate")))?;
/// ```
pub fn initialize(data_override: Option<PathBuf>) -> Result<EnvUpdateContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = EnvUpdateConfig::load(&data_dir)?;
    let settings = config.edit_settings()?;

    debug!(
        data_dir = %data_dir.display(),
        delimiter = %settings.delimiter,
        exchange_capacity = settings.exchange_capacity,
        missing_as_empty = config.missing_as_empty,
        "initialized"
    );

    let store = FileStore::new(data_dir.clone()).with_missing_as_empty(config.missing_as_empty);
    let api = EnvUpdateApi::new(store, settings);

    Ok(EnvUpdateContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scope;
    use crate::store::ValueStore;
    use tempfile::tempdir;

    #[test]
    fn override_wins() {
        let dir = tempdir().unwrap();
        let resolved = resolve_data_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn initialize_uses_data_dir_and_config_file() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("envupdate.toml"),
            "delimiter = \":\"\nmissing_as_empty = true\n",
        )
        .unwrap();

        let mut ctx = initialize(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(ctx.data_dir, dir.path());
        assert_eq!(ctx.api.settings().delimiter, ':');
        assert!(ctx.api.store().missing_as_empty());

        let result = ctx.api.invoke("PATH", "A", "HKCU", "/bin").unwrap();
        assert!(result.success);
        let result = ctx.api.invoke("PATH", "P", "HKCU", "/opt/bin").unwrap();
        assert_eq!(result.content_string(), "/opt/bin:/bin");
        assert_eq!(
            ctx.api.store().get("path", Scope::User),
            Some("/opt/bin:/bin".to_string())
        );
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("envupdate.toml"), "delimiter = \"::\"\n").unwrap();
        assert!(initialize(Some(dir.path().to_path_buf())).is_err());
    }
}
