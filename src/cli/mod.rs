// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envv-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envv [global options] <command>
//! list [pattern]
//! show <name>
//! set <name> <value>
//! delete <name>
//! path {show|add|remove}
//! export [file]
//! options
//! inis
//! ```

pub mod global;
pub mod path;
pub mod vars;


use crate::cli::global::GlobalOptions;
use crate::cli::path::PathArgs;
use crate::cli::vars::{DeleteArgs, ExportArgs, ListArgs, SetArgs, ShowArgs};
use clap::{Parser, Subcommand};

/// Persisted Environment Variable Viewer - Rust Port
///
/// Inspects and edits the environment variables Windows persists per user
/// and machine-wide.
#[derive(Debug, Parser)]
#[command(
    name = "envv",
    author,
    version,
    about = "Persisted Environment Variable Viewer",
    long_about = "envv-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Inspects and edits the environment variables Windows persists\n\
                  in the per-user and machine-wide scopes. Edits are staged in a\n\
                  session overlay as they are committed, so listings stay\n\
                  consistent without re-reading the OS after every change.\n\
                  System-scope edits need an elevated shell.",
    after_help = "INI FILES:\n\n\
                  By default, envv will look for a master INI `envv.toml` in the\n\
                  current directory. Additional INIs can be specified with --ini,\n\
                  those will be loaded after the master. Use --no-default-inis to\n\
                  disable auto detection and only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the INIs.
    Options,

    /// Lists the INIs used by envv.
    Inis,

    /// Lists visible variable names across both scopes.
    List(ListArgs),

    /// Shows the merged value of one variable.
    Show(ShowArgs),

    /// Adds or modifies a variable.
    Set(SetArgs),

    /// Deletes a variable from both scopes.
    Delete(DeleteArgs),

    /// Edits the PATH entry list.
    Path(PathArgs),

    /// Exports both scope snapshots to a text file.
    Export(ExportArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
