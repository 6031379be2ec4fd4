//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every UI.
//!
//! ## The Invocation Protocol
//!
//! Installers call the editor with four ordered strings and get one string back:
//!
//! 1. variable name (e.g. `Path`)
//! 2. action code: `A` append, `P` prepend, `R` remove (any case; anything else fails)
//! 3. scope code: `HKCU` or `HKLM` (any case; anything else fails)
//! 4. the segment to add or remove
//!
//! [`EnvUpdateApi::invoke`] implements exactly that. The returned string is the
//! edited list on success, and whatever the failed edit produced otherwise.
//!
//! ## Error Counter
//!
//! Callers of the protocol learn about failure through an error counter rather
//! than an error value: every failed invocation (or update) increments
//! [`EnvUpdateApi::error_count`] exactly once.
//!
//! ## Generic Over ValueStore
//!
//! - Production: `EnvUpdateApi<FileStore>`
//! - Testing: `EnvUpdateApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::{Action, EditRequest, EditResult, EditSettings, Scope};
use crate::store::ValueStore;
use tracing::debug;

pub struct EnvUpdateApi<S: ValueStore> {
    store: S,
    settings: EditSettings,
    error_count: u32,
}

impl<S: ValueStore> EnvUpdateApi<S> {
    pub fn new(store: S, settings: EditSettings) -> Self {
        Self {
            store,
            settings,
            error_count: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &EditSettings {
        &self.settings
    }

    /// Number of failed operations since this API was created.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Runs the four-string protocol.
    pub fn invoke(
        &mut self,
        name: &str,
        action: &str,
        scope: &str,
        segment: &str,
    ) -> Result<EditResult> {
        let request = EditRequest::from_codes(name, action, scope, segment);
        debug!(
            name,
            action_code = action,
            scope_code = scope,
            parsed_action = %request.action,
            parsed_scope = %request.scope,
            "invoke"
        );
        self.update(&request)
    }

    pub fn update(&mut self, request: &EditRequest) -> Result<EditResult> {
        let outcome = commands::update::run(&self.store, request, &self.settings);
        if !matches!(&outcome, Ok(result) if result.success) {
            self.error_count += 1;
        }
        outcome
    }

    pub fn append(&mut self, name: &str, scope: Scope, segment: &str) -> Result<EditResult> {
        self.update(&EditRequest::new(name, Action::Append, scope, segment))
    }

    pub fn prepend(&mut self, name: &str, scope: Scope, segment: &str) -> Result<EditResult> {
        self.update(&EditRequest::new(name, Action::Prepend, scope, segment))
    }

    pub fn remove(&mut self, name: &str, scope: Scope, segment: &str) -> Result<EditResult> {
        self.update(&EditRequest::new(name, Action::Remove, scope, segment))
    }

    pub fn show(&self, name: &str, scope: Scope) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, name, scope, &self.settings)
    }

    pub fn set_value(
        &self,
        name: &str,
        scope: Scope,
        content: &str,
    ) -> Result<commands::CmdResult> {
        commands::set::run(&self.store, name, scope, content, &self.settings)
    }
}
