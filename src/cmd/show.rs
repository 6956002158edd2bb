// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation for envv-rs.

use crate::cli::vars::ShowArgs;
use crate::cmd::{load_store, make_provider};
use crate::config::Config;
use crate::core::store::Resolved;
use crate::error::{Result, StoreError};

/// Renders a value for display, optionally one `;`-segment per line.
#[must_use]
pub fn format_value(value: &str, split: bool) -> String {
    if split {
        value.split(';').collect::<Vec<_>>().join(";\n")
    } else {
        value.to_owned()
    }
}

/// Renders a merged answer the way the original viewer labeled it, or `None`
/// for a name that does not resolve.
#[must_use]
pub fn render_resolved(resolved: &Resolved, split: bool) -> Option<String> {
    use crate::core::winenv::Scope;

    match resolved {
        Resolved::NotFound => None,
        Resolved::Pending(value) => Some(format!("Modified:\n{}", format_value(value, split))),
        Resolved::Both { user, system } => Some(format!(
            "User:\n{}\n\nSystem:\n{}",
            format_value(user, split),
            format_value(system, split)
        )),
        Resolved::Single { scope, value } => {
            let label = match scope {
                Scope::User => "User",
                Scope::System => "System",
            };
            Some(format!("{label}:\n{}", format_value(value, split)))
        }
    }
}

/// Main handler for the show command.
///
/// # Errors
///
/// Returns an error if the snapshots cannot be read or the name does not
/// resolve.
pub fn run_show_command(args: &ShowArgs, _config: &Config, dry: bool) -> Result<()> {
    let provider = make_provider(dry)?;
    let store = load_store(provider.as_ref())?;

    match render_resolved(&store.resolve(&args.name), args.split) {
        Some(rendered) => {
            println!("{rendered}");
            Ok(())
        }
        None => Err(StoreError::NotFound(args.name.clone()).into()),
    }
}
