//! # EnvUpdate CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/envupdateapp/`: core library with the edit logic, storage and config
//! - `crates/envupdate/`: this CLI tool, depends on the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/envupdate/src/cli/)                      │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging, context wiring, dispatch (commands.rs)          │
//! │  - Terminal rendering via console styles (render.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/envupdateapp/src/api.rs)                 │
//! │  - Four-string invocation protocol, error counter           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/envupdateapp/src/commands/*)         │
//! │  - Read, edit, write back; no terminal I/O                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Status
//!
//! `0` on success. `1` when an operation failed or could not run; edit commands
//! still print whatever result string the failed edit produced.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
