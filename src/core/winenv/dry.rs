// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dry-run provider wrapper.
//!
//! Delegates reads to the wrapped provider; logs writes and unsets without
//! performing them. Backs the `--dry` global flag.

use std::collections::BTreeMap;

use tracing::info;

use super::{EnvScopeProvider, Scope};
use crate::error::EnvError;

/// Wraps a provider so mutations are logged instead of applied.
#[derive(Debug)]
pub struct DryEnv<P> {
    inner: P,
}

impl<P: EnvScopeProvider> DryEnv<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Consumes the wrapper, returning the untouched provider.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: EnvScopeProvider> EnvScopeProvider for DryEnv<P> {
    fn read_all(&self, scope: Scope) -> Result<BTreeMap<String, String>, EnvError> {
        self.inner.read_all(scope)
    }

    fn write(&mut self, name: &str, value: &str, scope: Scope) -> Result<(), EnvError> {
        info!(%name, %value, %scope, "dry: would set");
        Ok(())
    }

    fn unset(&mut self, name: &str, scope: Scope) -> Result<(), EnvError> {
        info!(%name, %scope, "dry: would unset");
        Ok(())
    }
}
