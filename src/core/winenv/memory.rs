// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory scope provider.
//!
//! Backs the test suites; holds one independent map per scope and never
//! touches OS state.

use std::collections::BTreeMap;

use super::{EnvScopeProvider, Scope};
use crate::error::EnvError;

/// An in-memory stand-in for the persisted environment.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnv {
    user: BTreeMap<String, String>,
    system: BTreeMap<String, String>,
}

impl MemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider pre-seeded with per-scope variables.
    #[must_use]
    pub fn with_vars(
        user: BTreeMap<String, String>,
        system: BTreeMap<String, String>,
    ) -> Self {
        Self { user, system }
    }

    /// Direct view of a scope's current contents.
    #[must_use]
    pub const fn scope_vars(&self, scope: Scope) -> &BTreeMap<String, String> {
        match scope {
            Scope::User => &self.user,
            Scope::System => &self.system,
        }
    }

    const fn scope_vars_mut(&mut self, scope: Scope) -> &mut BTreeMap<String, String> {
        match scope {
            Scope::User => &mut self.user,
            Scope::System => &mut self.system,
        }
    }
}

impl EnvScopeProvider for MemoryEnv {
    fn read_all(&self, scope: Scope) -> Result<BTreeMap<String, String>, EnvError> {
        Ok(self.scope_vars(scope).clone())
    }

    fn write(&mut self, name: &str, value: &str, scope: Scope) -> Result<(), EnvError> {
        self.scope_vars_mut(scope)
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn unset(&mut self, name: &str, scope: Scope) -> Result<(), EnvError> {
        self.scope_vars_mut(scope).remove(name);
        Ok(())
    }
}
