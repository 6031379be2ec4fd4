use super::env_store::EnvStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = EnvStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        EnvStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Scope;
    use crate::store::ValueStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_value(self, name: &str, scope: Scope, content: &str) -> Self {
            assert!(self.store.set(name, scope, content), "fixture write failed");
            self
        }

        /// A user-scope `Path` of `C:\A;C:\B;C:\C`.
        pub fn with_sample_path(self) -> Self {
            self.with_value("Path", Scope::User, "C:\\A;C:\\B;C:\\C")
        }

        /// Counters start from zero after fixture setup.
        pub fn reset_counters(self) -> Self {
            self.store.backend().reset_counters();
            self
        }
    }
}
