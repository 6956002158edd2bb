// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Export command implementation for envv-rs.

use std::path::Path;

use crate::cli::vars::ExportArgs;
use crate::cmd::{load_store, make_provider};
use crate::config::Config;
use crate::core::store::EnvStore;
use crate::error::{ExportError, Result};

/// Renders the export file content: `User:` lines then `System:` lines in
/// snapshot iteration order, newline-delimited.
#[must_use]
pub fn render_export(store: &EnvStore) -> String {
    let lines = store.export_lines();
    if lines.is_empty() {
        String::new()
    } else {
        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

/// Writes the export file in one shot; either the whole file is written or
/// the operation fails and nothing is considered written.
///
/// # Errors
///
/// Returns [`ExportError::WriteFailed`] if the file cannot be written.
pub fn write_export(store: &EnvStore, path: &Path) -> std::result::Result<usize, ExportError> {
    std::fs::write(path, render_export(store)).map_err(|source| ExportError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;
    Ok(store.export_lines().len())
}

/// Main handler for the export command.
///
/// # Errors
///
/// Returns an error if the snapshots cannot be read or the file cannot be
/// written.
pub fn run_export_command(args: &ExportArgs, config: &Config, dry: bool) -> Result<()> {
    let provider = make_provider(dry)?;
    let store = load_store(provider.as_ref())?;

    let path = args.file.as_deref().unwrap_or(&config.export.file);
    let count = write_export(&store, path)?;
    println!("Exported {count} variables to {}", path.display());
    Ok(())
}
