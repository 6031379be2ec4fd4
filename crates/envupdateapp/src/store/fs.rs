use super::env_store::EnvStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

/// Production store: scope documents under a data directory.
pub type FileStore = EnvStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        EnvStore::with_backend(FsBackend::new(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scope;
    use crate::store::ValueStore;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.set("Path", Scope::Machine, "C:\\Windows"));

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(
            reopened.get("path", Scope::Machine),
            Some("C:\\Windows".to_string())
        );
        assert_eq!(reopened.get("Path", Scope::User), None);
    }

    #[test]
    fn unreadable_document_reads_as_none() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("user.json"), "not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("Path", Scope::User), None);
        assert!(!store.set("Path", Scope::User, "x"));
    }
}
