// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for envv-rs.

use crate::cli::vars::ListArgs;
use crate::cmd::{load_store, make_provider};
use crate::config::Config;
use crate::error::Result;

/// Main handler for the list command.
///
/// # Errors
///
/// Returns an error if the scope snapshots cannot be read.
pub fn run_list_command(args: &ListArgs, _config: &Config, dry: bool) -> Result<()> {
    let provider = make_provider(dry)?;
    let store = load_store(provider.as_ref())?;

    let names = store.list_names(args.pattern.as_deref());
    if names.is_empty() {
        println!("No variables found");
    } else {
        for name in &names {
            println!("{name}");
        }
    }
    Ok(())
}
