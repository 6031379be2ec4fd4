//! # CLI Behavior
//!
//! This is **one possible UI client** for envupdate. The CLI is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Editing
//!
//! ```text
//! envupdate append  Path 'C:\Tools\bin'            # HKCU by default
//! envupdate prepend Path 'C:\Tools\bin' --scope HKLM
//! envupdate remove  Path 'C:\Tools\bin'
//! envupdate invoke  Path A HKCU 'C:\Tools\bin'     # raw four-string protocol
//! ```
//!
//! Every edit prints the resulting list on stdout, even when it failed, and exits
//! with status 1 on failure. `invoke` passes its codes through unparsed, so an
//! unknown action or scope code fails exactly as it would for an installer.
//!
//! ## Inspecting and Seeding
//!
//! - `envupdate show Path [--segments] [--json]`
//! - `envupdate set Path 'C:\A;C:\B'`
//! - `envupdate config [--template]`
//!
//! ## Module Structure
//!
//! - `commands`: logging setup, context wiring, per-command handlers
//! - `render`: output formatting (messages, segments)
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
