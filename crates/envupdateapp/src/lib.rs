//! # EnvUpdate Architecture
//!
//! EnvUpdate edits delimiter-separated list values (the `Path` variable is the
//! classic case) by appending, prepending or removing one segment, keeping every
//! segment unique under case-insensitive comparison. It is a library first: the
//! `envupdate` CLI is one client of it, and installers driving the four-string
//! protocol through [`api::EnvUpdateApi::invoke`] are another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (envupdate crate)                                │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses protocol codes, counts failed invocations         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Read, edit, write back                                   │
//! │  - Edit core: buffer.rs, tokenizer.rs, editor.rs            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ValueStore trait over a StorageBackend                   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Bounded Buffers
//!
//! Every string the edit core touches lives in a [`buffer::BoundedBuffer`] whose
//! capacity is fixed at creation. Writes that do not fit are refused and leave the
//! buffer as it was. Exceeding a capacity is therefore an ordinary, reported
//! failure, never a panic or a silent truncation.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. Failures
//! surface as `Result` errors, as [`model::EditResult::success`], and as
//! `tracing` events for whoever installs a subscriber.
//!
//! ## Testing Strategy
//!
//! - **Edit core**: unit tests on buffers, the tokenizer and the editor.
//! - **Commands and API**: run against `InMemoryStore`, whose backend can simulate
//!   read and write failures and counts every access.
//! - **Storage**: `FileStore` tests in temp directories.
//! - **CLI**: end-to-end tests in the `envupdate` crate.

pub mod api;
pub mod buffer;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod tokenizer;
