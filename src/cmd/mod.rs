// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! main dispatch
//!   list / show / set / delete / path / export / options / inis
//!        |
//!        v
//!   make_provider(dry) --> RegistryEnv | DryEnv<RegistryEnv>
//!   load_store(provider) --> EnvStore (both snapshots)
//! ```
//!
//! Handlers print; the store and editors never do.

pub mod config;
pub mod delete;
pub mod export;
pub mod list;
pub mod path;
pub mod set;
pub mod show;


use crate::core::store::EnvStore;
use crate::core::winenv::EnvScopeProvider;
use crate::error::Result;

/// Builds the provider commands use for persisted scope access.
///
/// # Errors
///
/// Fails off Windows; the persisted scopes only exist there.
#[cfg(windows)]
pub fn make_provider(dry: bool) -> Result<Box<dyn EnvScopeProvider>> {
    use crate::core::winenv::dry::DryEnv;
    use crate::core::winenv::registry::RegistryEnv;

    let registry = RegistryEnv::new();
    if dry {
        Ok(Box::new(DryEnv::new(registry)))
    } else {
        Ok(Box::new(registry))
    }
}

/// Builds the provider commands use for persisted scope access.
///
/// # Errors
///
/// Fails off Windows; the persisted scopes only exist there.
#[cfg(not(windows))]
pub fn make_provider(dry: bool) -> Result<Box<dyn EnvScopeProvider>> {
    let _ = dry;
    anyhow::bail!("persisted environment scopes are only available on Windows")
}

/// Loads a store with fresh snapshots of both scopes.
///
/// # Errors
///
/// Returns an error if either scope cannot be read.
pub fn load_store(provider: &dyn EnvScopeProvider) -> Result<EnvStore> {
    let mut store = EnvStore::new();
    store.load(provider)?;
    Ok(store)
}
