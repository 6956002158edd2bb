// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for the Scope Overlay Store.
//!
//! ```text
//! Resolved: NotFound | Pending(v) | Both{user,system} | Single{scope,v}
//! ChangeKind: Added | Modified (replaces the original's add/modify events)
//! ```

use crate::core::winenv::Scope;

/// The merged answer for a single variable name.
///
/// Overlay entries win over both snapshots; a name present in both snapshots
/// with no pending edit surfaces both values, never just one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// Absent from every view, or tombstoned.
    NotFound,
    /// A pending edit committed to the OS but not yet visible in a snapshot.
    Pending(String),
    /// Present in both scope snapshots.
    Both { user: String, system: String },
    /// Present in exactly one scope snapshot.
    Single { scope: Scope, value: String },
}

impl Resolved {
    /// Whether the name resolves to anything at all.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Whether an upsert created a variable or changed an existing one.
///
/// Computed against the merged view, so re-adding a deleted name counts as
/// an add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Modified => write!(f, "modified"),
        }
    }
}
