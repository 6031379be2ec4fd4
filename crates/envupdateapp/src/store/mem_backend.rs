use super::backend::{find_name, upsert, StorageBackend};
use crate::error::{EnvUpdateError, Result};
use crate::model::Scope;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since edits are single-threaded.
/// This lets the `StorageBackend` trait use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<Scope, BTreeMap<String, String>>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of `read_value` calls that reached this backend.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of `write_value` calls that reached this backend.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn reset_counters(&self) {
        self.reads.set(0);
        self.writes.set(0);
    }

    fn check_scope(scope: Scope) -> Result<()> {
        if scope.is_null() {
            return Err(EnvUpdateError::ScopeUnavailable(
                "unrecognized scope has no storage".to_string(),
            ));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn read_value(&self, scope: Scope, name: &str) -> Result<Option<String>> {
        self.reads.set(self.reads.get() + 1);
        Self::check_scope(scope)?;
        if self.simulate_read_error.get() {
            return Err(EnvUpdateError::Store("Simulated read error".to_string()));
        }
        let values = self.values.borrow();
        Ok(values
            .get(&scope)
            .and_then(|scoped| find_name(scoped, name).and_then(|key| scoped.get(key)))
            .cloned())
    }

    fn write_value(&self, scope: Scope, name: &str, content: &str) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        Self::check_scope(scope)?;
        if self.simulate_write_error.get() {
            return Err(EnvUpdateError::Store("Simulated write error".to_string()));
        }
        let mut values = self.values.borrow_mut();
        upsert(values.entry(scope).or_default(), name, content);
        Ok(())
    }

    fn list_names(&self, scope: Scope) -> Result<Vec<String>> {
        Self::check_scope(scope)?;
        let values = self.values.borrow();
        Ok(values
            .get(&scope)
            .map(|scoped| scoped.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn scope_available(&self, scope: Scope) -> bool {
        !scope.is_null()
    }
}
