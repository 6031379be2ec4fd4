use super::backend::StorageBackend;
use super::ValueStore;
use crate::model::Scope;
use tracing::{debug, warn};

/// [`ValueStore`] over any [`StorageBackend`].
///
/// Backend errors stop here: they are logged and reported as `None` / `false`.
pub struct EnvStore<B: StorageBackend> {
    backend: B,
    missing_as_empty: bool,
}

impl<B: StorageBackend> EnvStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            missing_as_empty: false,
        }
    }

    /// When enabled, a name that is absent from a readable scope reads as an
    /// existing empty list instead of `None`.
    pub fn with_missing_as_empty(mut self, enabled: bool) -> Self {
        self.missing_as_empty = enabled;
        self
    }

    pub fn missing_as_empty(&self) -> bool {
        self.missing_as_empty
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Names stored in a scope; empty when the scope cannot be read.
    pub fn names(&self, scope: Scope) -> Vec<String> {
        self.backend.list_names(scope).unwrap_or_else(|e| {
            warn!(%scope, "cannot list values: {}", e);
            Vec::new()
        })
    }
}

impl<B: StorageBackend> ValueStore for EnvStore<B> {
    fn get(&self, name: &str, scope: Scope) -> Option<String> {
        if !self.backend.scope_available(scope) {
            debug!(%scope, name, "read refused: scope unavailable");
            return None;
        }
        match self.backend.read_value(scope, name) {
            Ok(Some(value)) => Some(value),
            Ok(None) if self.missing_as_empty => {
                debug!(%scope, name, "value absent, reading as empty");
                Some(String::new())
            }
            Ok(None) => {
                debug!(%scope, name, "value absent");
                None
            }
            Err(e) => {
                warn!(%scope, name, "cannot read value: {}", e);
                None
            }
        }
    }

    fn set(&self, name: &str, scope: Scope, content: &str) -> bool {
        if !self.backend.scope_available(scope) {
            debug!(%scope, name, "write refused: scope unavailable");
            return false;
        }
        match self.backend.write_value(scope, name, content) {
            Ok(()) => true,
            Err(e) => {
                warn!(%scope, name, "cannot write value: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn get_returns_stored_value() {
        let store = InMemoryStore::new();
        assert!(store.set("Path", Scope::User, "C:\\A;C:\\B"));
        assert_eq!(store.get("Path", Scope::User), Some("C:\\A;C:\\B".to_string()));
        assert_eq!(store.get("PATH", Scope::User), Some("C:\\A;C:\\B".to_string()));
    }

    #[test]
    fn scopes_are_separate() {
        let store = InMemoryStore::new();
        assert!(store.set("Path", Scope::User, "user"));
        assert!(store.set("Path", Scope::Machine, "machine"));
        assert_eq!(store.get("Path", Scope::User), Some("user".to_string()));
        assert_eq!(store.get("Path", Scope::Machine), Some("machine".to_string()));
    }

    #[test]
    fn empty_value_is_distinct_from_missing() {
        let store = InMemoryStore::new();
        assert!(store.set("Empty", Scope::User, ""));
        assert_eq!(store.get("Empty", Scope::User), Some(String::new()));
        assert_eq!(store.get("Missing", Scope::User), None);
    }

    #[test]
    fn missing_as_empty_reads_absent_value_as_empty() {
        let store = InMemoryStore::new().with_missing_as_empty(true);
        assert!(store.missing_as_empty());
        assert_eq!(store.get("Missing", Scope::User), Some(String::new()));
        // The null scope stays unreadable.
        assert_eq!(store.get("Missing", Scope::Null), None);
    }

    #[test]
    fn null_scope_never_reaches_backend() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("Path", Scope::Null), None);
        assert!(!store.set("Path", Scope::Null, "x"));
        assert_eq!(store.backend().reads(), 0);
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn backend_errors_collapse_to_none_and_false() {
        let store = InMemoryStore::new();
        assert!(store.set("Path", Scope::User, "a"));

        store.backend().set_simulate_read_error(true);
        assert_eq!(store.get("Path", Scope::User), None);

        store.backend().set_simulate_write_error(true);
        assert!(!store.set("Path", Scope::User, "b"));

        store.backend().set_simulate_read_error(false);
        assert_eq!(store.get("Path", Scope::User), Some("a".to_string()));
    }

    #[test]
    fn names_lists_stored_values() {
        let store = InMemoryStore::new();
        assert!(store.set("Path", Scope::User, "a"));
        assert!(store.set("Include", Scope::User, "b"));
        assert_eq!(store.names(Scope::User), vec!["Include", "Path"]);
        assert!(store.names(Scope::Null).is_empty());
    }
}
