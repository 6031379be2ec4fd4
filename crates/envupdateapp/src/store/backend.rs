use crate::buffer::eq_ignore_case;
use crate::error::Result;
use crate::model::Scope;
use std::collections::BTreeMap;

/// Abstract interface for raw value I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `EnvStore` handles the policy at the `ValueStore` boundary.
pub trait StorageBackend {
    /// Read a value.
    /// Returns Ok(None) if the scope holds no value with this name.
    /// Returns Err if the scope is unavailable or the read itself failed.
    fn read_value(&self, scope: Scope, name: &str) -> Result<Option<String>>;

    /// Write a value, creating the scope's storage if it does not exist yet.
    /// MUST be atomic: a failed write leaves the previous content in place.
    fn write_value(&self, scope: Scope, name: &str, content: &str) -> Result<()>;

    /// Names of all values stored in a scope.
    fn list_names(&self, scope: Scope) -> Result<Vec<String>>;

    /// Check if a scope can be read and written at all.
    fn scope_available(&self, scope: Scope) -> bool;
}

/// Finds the stored spelling of `name`, ignoring case.
pub fn find_name<'a, V>(values: &'a BTreeMap<String, V>, name: &str) -> Option<&'a str> {
    values
        .keys()
        .find(|key| eq_ignore_case(key, name))
        .map(String::as_str)
}

/// Inserts or overwrites `name`, keeping the stored spelling of an existing entry.
pub fn upsert(values: &mut BTreeMap<String, String>, name: &str, content: &str) {
    let key = find_name(values, name).unwrap_or(name).to_string();
    values.insert(key, content.to_string());
}
