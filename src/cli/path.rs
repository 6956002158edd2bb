// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Argument types for the path command.
//!
//! ```text
//! path show -s SCOPE
//! path add ENTRY -s SCOPE
//! path remove ENTRY -s SCOPE
//! ```

use clap::{Args, Subcommand};

use crate::core::winenv::Scope;

/// Arguments for the path command.
#[derive(Debug, Clone, Args)]
pub struct PathArgs {
    /// Path operation to perform.
    #[command(subcommand)]
    pub action: PathAction,
}

/// Operations on the `PATH` entry list.
#[derive(Debug, Clone, Subcommand)]
pub enum PathAction {
    /// Lists the entries of PATH in a scope, one per line.
    Show {
        /// Scope whose PATH to edit (user or system).
        #[arg(short, long)]
        scope: Scope,
    },

    /// Appends an entry to PATH; no-op if already present.
    Add {
        /// Entry to append (trimmed).
        entry: String,

        /// Scope whose PATH to edit (user or system).
        #[arg(short, long)]
        scope: Scope,
    },

    /// Removes the first exact match of an entry from PATH.
    Remove {
        /// Entry to remove (exact match).
        entry: String,

        /// Scope whose PATH to edit (user or system).
        #[arg(short, long)]
        scope: Scope,
    },
}
