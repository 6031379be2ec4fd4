use super::backend::{find_name, upsert, StorageBackend};
use crate::error::{EnvUpdateError, Result};
use crate::model::Scope;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Filesystem backend: one JSON map of name to content per scope.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document holding a scope's values.
    pub fn scope_file(&self, scope: Scope) -> Result<PathBuf> {
        let file_name = match scope {
            Scope::User => "user.json",
            Scope::Machine => "machine.json",
            Scope::Null => {
                return Err(EnvUpdateError::ScopeUnavailable(
                    "unrecognized scope has no storage".to_string(),
                ))
            }
        };
        Ok(self.root.join(file_name))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(EnvUpdateError::Io)?;
        }
        Ok(())
    }

    fn load_scope(&self, scope: Scope) -> Result<BTreeMap<String, String>> {
        let path = self.scope_file(scope)?;
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(EnvUpdateError::Io)?;
        let values: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(EnvUpdateError::Serialization)?;
        Ok(values)
    }

    fn save_scope(&self, scope: Scope, values: &BTreeMap<String, String>) -> Result<()> {
        let path = self.scope_file(scope)?;
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(values).map_err(EnvUpdateError::Serialization)?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", scope, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(EnvUpdateError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(EnvUpdateError::Io(e));
        }

        debug!(path = %path.display(), "saved scope");
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_value(&self, scope: Scope, name: &str) -> Result<Option<String>> {
        let values = self.load_scope(scope)?;
        Ok(find_name(&values, name).and_then(|key| values.get(key).cloned()))
    }

    fn write_value(&self, scope: Scope, name: &str, content: &str) -> Result<()> {
        let mut values = self.load_scope(scope)?;
        upsert(&mut values, name, content);
        self.save_scope(scope, &values)
    }

    fn list_names(&self, scope: Scope) -> Result<Vec<String>> {
        Ok(self.load_scope(scope)?.into_keys().collect())
    }

    fn scope_available(&self, scope: Scope) -> bool {
        self.scope_file(scope).is_ok()
    }
}
