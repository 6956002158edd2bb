// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Argument types for the variable commands.
//!
//! ```text
//! list [PATTERN]
//! show NAME [--split]
//! set NAME VALUE [-s SCOPE] [--rename-from OLD]
//! delete NAME [-y]
//! export [FILE]
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::core::winenv::Scope;

/// Arguments for the list command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only list names containing this substring (case-insensitive).
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,
}

/// Arguments for the show command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Variable name (exact match).
    pub name: String,

    /// Render `;`-delimited values one segment per line.
    #[arg(long)]
    pub split: bool,
}

/// Arguments for the set command.
#[derive(Debug, Clone, Args)]
pub struct SetArgs {
    /// Variable name.
    pub name: String,

    /// Variable value.
    pub value: String,

    /// Target scope (user or system). Defaults to the scope the variable
    /// currently lives in, or user for new variables.
    #[arg(short, long)]
    pub scope: Option<Scope>,

    /// Rename: previous name to clear in the target scope before NAME is
    /// written.
    #[arg(long = "rename-from", value_name = "OLD")]
    pub rename_from: Option<String>,
}

/// Arguments for the delete command.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Variable name.
    pub name: String,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the export command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Output file. Defaults to the configured export file.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}
