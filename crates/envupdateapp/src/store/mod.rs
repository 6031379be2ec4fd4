//! # Storage Layer
//!
//! The list being edited lives outside the editor, in a store partitioned by
//! [`Scope`]. The core only ever talks to that store through [`ValueStore`]:
//!
//! - `get(name, scope)` returns `None` when the value does not exist, the scope is
//!   unavailable, or the read failed. `Some("")` means "exists but empty".
//! - `set(name, scope, content)` creates the location when absent and returns
//!   `true` only once the write is committed.
//!
//! Neither call returns an error. Everything that can go wrong collapses to
//! `None` / `false` at this boundary.
//!
//! ## Two Layers
//!
//! 1. [`backend::StorageBackend`] does raw I/O and reports real errors
//!    (`Result<Option<String>>`), so backends can be tested precisely.
//! 2. [`env_store::EnvStore`] wraps a backend, applies the `missing_as_empty`
//!    policy, logs failures, and implements [`ValueStore`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON documents on disk, one per scope.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── envupdate.toml   # Optional configuration
//! ├── user.json        # HKCU values: { "Path": "C:\\A;C:\\B", ... }
//! └── machine.json     # HKLM values
//! ```
//!
//! Names are matched case-insensitively, as environment variable names are on the
//! platforms this models. Overwriting `PATH` when `Path` is stored keeps `Path`.
//!
//! ## Concurrency
//!
//! Edits are read-modify-write without a lock. Two concurrent edits of the same
//! value may race; the last writer wins.

use crate::model::Scope;

pub mod backend;
pub mod env_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

/// The contract between the list editor and wherever lists are kept.
pub trait ValueStore {
    /// Current content of `name` in `scope`, or `None` if it cannot be read.
    fn get(&self, name: &str, scope: Scope) -> Option<String>;

    /// Writes `content`, creating the value if needed. `true` iff committed.
    fn set(&self, name: &str, scope: Scope, content: &str) -> bool;
}
