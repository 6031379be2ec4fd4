use crate::buffer::BoundedBuffer;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{EnvUpdateError, Result};
use crate::model::{EditSettings, Scope};
use crate::store::ValueStore;

/// Stores `content` under `name`, creating the value if it does not exist.
///
/// Values are limited to the long capacity so that every stored list can be
/// edited later.
pub fn run<S: ValueStore>(
    store: &S,
    name: &str,
    scope: Scope,
    content: &str,
    settings: &EditSettings,
) -> Result<CmdResult> {
    if scope.is_null() {
        return Err(EnvUpdateError::ScopeUnavailable(
            "unrecognized scope has no storage".to_string(),
        ));
    }

    let mut checked = BoundedBuffer::new(settings.long_capacity)?;
    if !checked.assign(content) {
        return Err(EnvUpdateError::Api(format!(
            "Value is longer than {} characters",
            settings.long_capacity
        )));
    }

    let value = checked.to_string();
    if !store.set(name, scope, &value) {
        return Err(EnvUpdateError::Store(format!(
            "Could not write {} in the {} scope",
            name, scope
        )));
    }

    let mut result = CmdResult::default().with_value(value);
    result.add_message(CmdMessage::success(format!("{} set ({})", name, scope)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_value() {
        let store = InMemoryStore::new();
        let result = run(&store, "Path", Scope::User, "C:\\A", &EditSettings::default()).unwrap();
        assert_eq!(result.value.as_deref(), Some("C:\\A"));
        assert_eq!(store.get("Path", Scope::User), Some("C:\\A".to_string()));
    }

    #[test]
    fn overwrites_existing_value_case_insensitively() {
        let store = InMemoryStore::new();
        run(&store, "Path", Scope::User, "old", &EditSettings::default()).unwrap();
        run(&store, "PATH", Scope::User, "new", &EditSettings::default()).unwrap();
        assert_eq!(store.names(Scope::User), vec!["Path"]);
        assert_eq!(store.get("path", Scope::User), Some("new".to_string()));
    }

    #[test]
    fn rejects_values_over_long_capacity() {
        let store = InMemoryStore::new();
        let settings = EditSettings {
            long_capacity: 4,
            ..Default::default()
        };
        assert!(run(&store, "Path", Scope::User, "too long", &settings).is_err());
        assert_eq!(store.get("Path", Scope::User), None);
    }

    #[test]
    fn null_scope_is_rejected() {
        let store = InMemoryStore::new();
        let result = run(&store, "Path", Scope::Null, "x", &EditSettings::default());
        assert!(matches!(result, Err(EnvUpdateError::ScopeUnavailable(_))));
    }

    #[test]
    fn write_failure_is_a_store_error() {
        let store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);
        let result = run(&store, "Path", Scope::User, "x", &EditSettings::default());
        assert!(matches!(result, Err(EnvUpdateError::Store(_))));
    }
}
