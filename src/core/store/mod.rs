// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scope Overlay Store: the state-reconciliation and commit engine.
//!
//! # Architecture
//!
//! ```text
//! EnvStore
//!   user/system: BTreeMap<name, value>   (snapshots, replaced by load)
//!   overlay:     BTreeMap<name, value>   (committed edits not yet in a snapshot)
//!   tombstones:  BTreeSet<name>          (deleted this session)
//!
//! resolve(name): tombstone > overlay > both-snapshots > single-snapshot
//! upsert/delete: provider write first, overlay/tombstones second
//! ```
//!
//! Invariants:
//! - a name is never in both overlay and tombstones
//! - tombstoned names are excluded from every query
//! - any provider failure leaves the store unchanged

pub mod types;


use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info};

use crate::core::winenv::{EnvScopeProvider, Scope};
use crate::error::{EnvError, StoreError};

pub use types::{ChangeKind, Resolved};

/// Snapshots of both persisted scopes plus the pending-edit overlay.
///
/// Exclusively owned by one caller; all mutation goes through the methods
/// below. Single-threaded by construction, no locking.
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    user: BTreeMap<String, String>,
    system: BTreeMap<String, String>,
    overlay: BTreeMap<String, String>,
    tombstones: BTreeSet<String>,
}

impl EnvStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from pre-read snapshots.
    #[must_use]
    pub fn from_snapshots(
        user: BTreeMap<String, String>,
        system: BTreeMap<String, String>,
    ) -> Self {
        Self {
            user,
            system,
            overlay: BTreeMap::new(),
            tombstones: BTreeSet::new(),
        }
    }

    /// Replaces both scope snapshots with fresh reads from the provider.
    ///
    /// Pending edits and tombstones survive a reload, matching the original
    /// viewer; call [`clear_pending`](Self::clear_pending) first for a
    /// load-and-discard refresh. Neither snapshot is replaced if either
    /// read fails.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ReadFailed`] if a scope cannot be enumerated.
    pub fn load(&mut self, provider: &dyn EnvScopeProvider) -> Result<(), EnvError> {
        let user = provider.read_all(Scope::User)?;
        let system = provider.read_all(Scope::System)?;
        self.user = user;
        self.system = system;
        debug!(
            user = self.user.len(),
            system = self.system.len(),
            "loaded scope snapshots"
        );
        Ok(())
    }

    /// Discards the overlay and tombstone set.
    pub fn clear_pending(&mut self) {
        self.overlay.clear();
        self.tombstones.clear();
    }

    /// All visible names, sorted ascending, minus tombstones, optionally
    /// narrowed by a case-insensitive substring filter.
    #[must_use]
    pub fn list_names(&self, filter: Option<&str>) -> Vec<String> {
        let needle = filter.map(str::to_lowercase);
        self.user
            .keys()
            .chain(self.system.keys())
            .chain(self.overlay.keys())
            .filter(|name| !self.tombstones.contains(*name))
            .filter(|name| {
                needle
                    .as_ref()
                    .is_none_or(|n| name.to_lowercase().contains(n))
            })
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Merges snapshots, overlay, and tombstones into one answer for `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Resolved {
        if self.tombstones.contains(name) {
            return Resolved::NotFound;
        }
        if let Some(value) = self.overlay.get(name) {
            return Resolved::Pending(value.clone());
        }
        match (self.user.get(name), self.system.get(name)) {
            (Some(user), Some(system)) => Resolved::Both {
                user: user.clone(),
                system: system.clone(),
            },
            (Some(value), None) => Resolved::Single {
                scope: Scope::User,
                value: value.clone(),
            },
            (None, Some(value)) => Resolved::Single {
                scope: Scope::System,
                value: value.clone(),
            },
            (None, None) => Resolved::NotFound,
        }
    }

    /// The scope an edit to `name` should target when the caller has no
    /// preference: the scope the variable currently lives in, or user for
    /// new variables.
    #[must_use]
    pub fn default_scope_for(&self, name: &str) -> Scope {
        if !self.user.contains_key(name) && self.system.contains_key(name) {
            Scope::System
        } else {
            Scope::User
        }
    }

    /// Adds or modifies a variable: persists it through the provider, then
    /// records the new value in the overlay and clears any tombstone.
    ///
    /// A rename (`previous` differs from `name`) clears the old name in
    /// `scope` before the new one is written, drops the old name from the
    /// overlay, and reconciles the stale snapshot so the old name does not
    /// linger until the next load. An entry for the old name in the *other*
    /// scope stays visible; the rename never touched it.
    ///
    /// # Errors
    ///
    /// `EmptyName`/`EmptyValue` on validation, or the provider's
    /// `PermissionDenied`/`Os` failure. No state changes on error.
    pub fn upsert(
        &mut self,
        provider: &mut dyn EnvScopeProvider,
        name: &str,
        value: &str,
        scope: Scope,
        previous: Option<&str>,
    ) -> Result<ChangeKind, StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if value.is_empty() {
            return Err(StoreError::EmptyValue);
        }

        let renamed_from = previous.filter(|prev| *prev != name);
        if let Some(prev) = renamed_from {
            provider.unset(prev, scope)?;
        }
        provider.write(name, value, scope)?;

        if let Some(prev) = renamed_from {
            self.overlay.remove(prev);
            match scope {
                Scope::User => self.user.remove(prev),
                Scope::System => self.system.remove(prev),
            };
        }
        let kind = if self.resolve(name).is_found() {
            ChangeKind::Modified
        } else {
            ChangeKind::Added
        };
        self.overlay.insert(name.to_owned(), value.to_owned());
        self.tombstones.remove(name);

        info!(%name, %scope, %kind, "committed environment variable");
        Ok(kind)
    }

    /// Deletes a variable: unsets it in *both* scopes, then drops it from the
    /// overlay and tombstones it so stale snapshots cannot resurrect it.
    ///
    /// The unconditional both-scope unset mirrors the original viewer, even
    /// when the name exists in only one scope.
    ///
    /// # Errors
    ///
    /// `NotFound` if the name does not resolve, or the provider's
    /// `PermissionDenied`/`Os` failure. No state changes on error.
    pub fn delete(
        &mut self,
        provider: &mut dyn EnvScopeProvider,
        name: &str,
    ) -> Result<(), StoreError> {
        if !self.resolve(name).is_found() {
            return Err(StoreError::NotFound(name.to_owned()));
        }

        provider.unset(name, Scope::User)?;
        provider.unset(name, Scope::System)?;

        self.overlay.remove(name);
        self.tombstones.insert(name.to_owned());

        info!(%name, "deleted environment variable");
        Ok(())
    }

    /// Export lines, one per snapshot entry: all `User:` lines, then all
    /// `System:` lines, in snapshot iteration order. Not deduplicated across
    /// scopes; overlay and tombstones are not consulted.
    #[must_use]
    pub fn export_lines(&self) -> Vec<String> {
        self.user
            .iter()
            .map(|(name, value)| format!("User: {name}={value}"))
            .chain(
                self.system
                    .iter()
                    .map(|(name, value)| format!("System: {name}={value}")),
            )
            .collect()
    }

    /// Number of visible names in the merged view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list_names(None).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
