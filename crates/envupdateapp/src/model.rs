//! # Domain Model
//!
//! Callers describe an edit with four strings: a variable name, an action code, a
//! scope code and the target segment. This module turns the codes into closed enums
//! and defines what an edit returns.
//!
//! ## Codes
//!
//! | Input | Parses to |
//! |-------|-----------|
//! | `A` / `P` / `R` (any case) | [`Action::Append`] / [`Action::Prepend`] / [`Action::Remove`] |
//! | anything else | [`Action::NoOp`] |
//! | `HKCU` (any case) | [`Scope::User`] |
//! | `HKLM` (any case) | [`Scope::Machine`] |
//! | anything else | [`Scope::Null`] |
//!
//! Unrecognized input is not an error at parse time. `NoOp` and `Null` are real
//! variants whose behaviour is to fail: a `NoOp` edit never reads or writes the
//! store, and the store refuses every read and write in the `Null` scope.

use crate::buffer::{eq_ignore_case, BoundedBuffer, DEFAULT_EXCHANGE_CAPACITY, LONG_CAPACITY};
use crate::error::EditFailure;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Append,
    Prepend,
    Remove,
    NoOp,
}

impl Action {
    pub fn parse(code: &str) -> Self {
        if eq_ignore_case(code, "A") {
            Action::Append
        } else if eq_ignore_case(code, "P") {
            Action::Prepend
        } else if eq_ignore_case(code, "R") {
            Action::Remove
        } else {
            Action::NoOp
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Action::Append => "A",
            Action::Prepend => "P",
            Action::Remove => "R",
            Action::NoOp => "",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Append => "append",
            Action::Prepend => "prepend",
            Action::Remove => "remove",
            Action::NoOp => "no-op",
        };
        f.write_str(name)
    }
}

/// The storage partition a list value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Scope {
    /// Per-user values (`HKCU`).
    User,
    /// Machine-wide values (`HKLM`).
    Machine,
    /// Stands in for an unrecognized scope code; never readable or writable.
    Null,
}

impl Scope {
    pub fn parse(code: &str) -> Self {
        if eq_ignore_case(code, "HKCU") {
            Scope::User
        } else if eq_ignore_case(code, "HKLM") {
            Scope::Machine
        } else {
            Scope::Null
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Scope::User => "HKCU",
            Scope::Machine => "HKLM",
            Scope::Null => "",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scope::Null)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::User => "user",
            Scope::Machine => "machine",
            Scope::Null => "null",
        };
        f.write_str(name)
    }
}

/// A parsed edit: which variable, where, what to do and with which segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub name: String,
    pub action: Action,
    pub scope: Scope,
    pub segment: String,
}

impl EditRequest {
    pub fn new(
        name: impl Into<String>,
        action: Action,
        scope: Scope,
        segment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            action,
            scope,
            segment: segment.into(),
        }
    }

    /// Builds a request from the four raw protocol strings.
    pub fn from_codes(name: &str, action: &str, scope: &str, segment: &str) -> Self {
        Self::new(name, Action::parse(action), Scope::parse(scope), segment)
    }
}

/// Buffer sizes and delimiter used by an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSettings {
    pub delimiter: char,
    /// Capacity of caller-facing strings (inputs and the result).
    pub exchange_capacity: usize,
    /// Capacity of the stored list and of the edit output.
    pub long_capacity: usize,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            delimiter: ';',
            exchange_capacity: DEFAULT_EXCHANGE_CAPACITY,
            long_capacity: LONG_CAPACITY,
        }
    }
}

/// Outcome of an edit.
///
/// `content` always holds whatever the operation produced: the edited list on
/// success, and on failure possibly nothing or a partially built list. Decide on
/// `success`, never on the content.
#[derive(Debug)]
pub struct EditResult {
    pub content: BoundedBuffer,
    pub success: bool,
    /// First failure observed, when `success` is false.
    pub failure: Option<EditFailure>,
}

impl EditResult {
    pub fn succeeded(content: BoundedBuffer) -> Self {
        Self {
            content,
            success: true,
            failure: None,
        }
    }

    pub fn failed(content: BoundedBuffer, failure: EditFailure) -> Self {
        Self {
            content,
            success: false,
            failure: Some(failure),
        }
    }

    pub fn content_string(&self) -> String {
        self.content.to_string()
    }
}
