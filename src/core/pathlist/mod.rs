// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delimited list editor for `PATH`-shaped variables.
//!
//! ```text
//! parse("a;;b;a") -> [a, b, a]     (empty segments dropped, order kept,
//! add / remove                      existing duplicates kept)
//! serialize([a, b, a]) -> "a;b;a"
//! commit -> EnvStore::upsert("PATH", ...)
//! ```
//!
//! A pure transform over one value; the store stays the single commit path.

#[cfg(test)]
mod tests;

use crate::core::store::{ChangeKind, EnvStore};
use crate::core::winenv::{EnvScopeProvider, Scope};
use crate::error::StoreError;

/// The variable this editor exists for.
pub const PATH_VAR: &str = "PATH";

/// Segment separator in persisted `PATH` values.
pub const SEPARATOR: &str = ";";

/// An ordered list of path segments under edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
}

impl PathList {
    /// Splits a raw `;`-joined value. Empty segments are dropped; order and
    /// existing duplicates are preserved.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            entries: raw
                .split(SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Appends a trimmed candidate. No-op when the candidate is empty or
    /// already present (exact match); the editor only prevents *adding*
    /// duplicates, it does not dedupe what `parse` found.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        if candidate.is_empty() || self.entries.iter().any(|entry| entry == candidate) {
            return false;
        }
        self.entries.push(candidate.to_owned());
        true
    }

    /// Removes the first exact match. Returns whether the list changed.
    pub fn remove(&mut self, exact: &str) -> bool {
        self.entries
            .iter()
            .position(|entry| entry == exact)
            .is_some_and(|index| {
                self.entries.remove(index);
                true
            })
    }

    /// Joins the segments back into a persisted value.
    #[must_use]
    pub fn serialize(&self) -> String {
        self.entries.join(SEPARATOR)
    }

    /// Commits the serialized list as `PATH` in the chosen scope through the
    /// overlay store. The caller picks the scope; the editor carries no
    /// scope-selection logic.
    ///
    /// # Errors
    ///
    /// Whatever [`EnvStore::upsert`] returns; an empty list fails validation
    /// rather than silently unsetting `PATH`.
    pub fn commit(
        &self,
        store: &mut EnvStore,
        provider: &mut dyn EnvScopeProvider,
        scope: Scope,
    ) -> Result<ChangeKind, StoreError> {
        store.upsert(provider, PATH_VAR, &self.serialize(), scope, None)
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
