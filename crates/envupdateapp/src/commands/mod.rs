//! # Command Layer
//!
//! Each operation lives in its own submodule as a plain function over a
//! [`crate::store::ValueStore`]. Commands hold the business logic; they do no
//! terminal I/O, parse no arguments and never exit the process.
//!
//! ## Structured Returns
//!
//! - [`update`] returns an [`crate::model::EditResult`]: the result string plus the
//!   success flag. Edit failures are data, not errors.
//! - [`show`] and [`set`] return a [`CmdResult`] carrying the value, its segments and
//!   messages for the UI to render.
//!
//! `Err` is reserved for problems that prevent an operation from running at all,
//! such as a buffer that cannot be allocated or a value that is not there to show.
//!
//! ## Command Modules
//!
//! - [`update`]: Append / prepend / remove a segment (read, edit, write back)
//! - [`show`]: Read a value and split it into segments
//! - [`set`]: Seed or overwrite a value

use serde::Serialize;

pub mod set;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub value: Option<String>,
    pub segments: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_value(mut self, value: String) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_segments(mut self, segments: Vec<String>) -> Self {
        self.segments = segments;
        self
    }
}
