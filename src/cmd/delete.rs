// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Delete command implementation for envv-rs.

use std::io::Write as _;

use tracing::warn;

use crate::cli::vars::DeleteArgs;
use crate::cmd::{load_store, make_provider};
use crate::config::Config;
use crate::core::winenv::is_elevated;
use crate::error::Result;

/// Main handler for the delete command.
///
/// Deletion always unsets the name in both scopes, so it needs elevation
/// even for user-only variables.
///
/// # Errors
///
/// Returns an error if the snapshots cannot be read, the name does not
/// resolve, or an unset is rejected.
pub fn run_delete_command(args: &DeleteArgs, config: &Config, dry: bool) -> Result<()> {
    if !is_elevated() {
        warn!("deleting unsets both scopes and usually requires an elevated shell");
    }

    let mut provider = make_provider(dry)?;
    let mut store = load_store(provider.as_ref())?;

    if !args.yes && config.global.confirm_delete && !confirm(&args.name)? {
        println!("Aborted");
        return Ok(());
    }

    store.delete(provider.as_mut(), &args.name)?;
    println!("Deleted {}", args.name);
    Ok(())
}

fn confirm(name: &str) -> Result<bool> {
    print!("Delete environment variable '{name}' from both scopes? [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
