// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path command implementation for envv-rs.

use tracing::warn;

use crate::cli::path::{PathAction, PathArgs};
use crate::cmd::{load_store, make_provider};
use crate::config::Config;
use crate::core::pathlist::{PATH_VAR, PathList};
use crate::core::store::{EnvStore, Resolved};
use crate::core::winenv::{EnvScopeProvider, Scope, is_elevated};
use crate::error::Result;

/// The `PATH` value edits should start from for a scope: the pending edit if
/// one exists, otherwise the scope's snapshot value, otherwise empty.
#[must_use]
pub fn path_value_for(store: &EnvStore, scope: Scope) -> String {
    match store.resolve(PATH_VAR) {
        Resolved::Pending(value) => value,
        Resolved::Both { user, system } => match scope {
            Scope::User => user,
            Scope::System => system,
        },
        Resolved::Single { scope: found, value } if found == scope => value,
        _ => String::new(),
    }
}

/// Applies one path action, committing through the store when the list
/// changed. Returns the lines to print.
///
/// # Errors
///
/// Whatever the commit returns; a list emptied by `remove` fails validation
/// instead of unsetting `PATH`.
pub fn apply_path_action(
    store: &mut EnvStore,
    provider: &mut dyn EnvScopeProvider,
    action: &PathAction,
) -> Result<Vec<String>> {
    match action {
        PathAction::Show { scope } => {
            let list = PathList::parse(&path_value_for(store, *scope));
            if list.is_empty() {
                Ok(vec![format!("PATH is empty in {scope} scope")])
            } else {
                Ok(list.entries().to_vec())
            }
        }
        PathAction::Add { entry, scope } => {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                return Ok(vec!["Nothing to add".to_string()]);
            }
            let mut list = PathList::parse(&path_value_for(store, *scope));
            if list.add(trimmed) {
                list.commit(store, provider, *scope)?;
                Ok(vec![format!("Added '{trimmed}' to {scope} PATH")])
            } else {
                Ok(vec![format!("'{trimmed}' is already in {scope} PATH")])
            }
        }
        PathAction::Remove { entry, scope } => {
            let mut list = PathList::parse(&path_value_for(store, *scope));
            if list.remove(entry) {
                list.commit(store, provider, *scope)?;
                Ok(vec![format!("Removed '{entry}' from {scope} PATH")])
            } else {
                Ok(vec![format!("'{entry}' is not in {scope} PATH")])
            }
        }
    }
}

/// Main handler for the path command.
///
/// # Errors
///
/// Returns an error if the snapshots cannot be read or a commit fails.
pub fn run_path_command(args: &PathArgs, _config: &Config, dry: bool) -> Result<()> {
    let scope = match &args.action {
        PathAction::Show { scope }
        | PathAction::Add { scope, .. }
        | PathAction::Remove { scope, .. } => *scope,
    };
    if scope == Scope::System
        && !matches!(args.action, PathAction::Show { .. })
        && !is_elevated()
    {
        warn!("system-scope writes usually require an elevated shell");
    }

    let mut provider = make_provider(dry)?;
    let mut store = load_store(provider.as_ref())?;

    for line in apply_path_action(&mut store, provider.as_mut(), &args.action)? {
        println!("{line}");
    }
    Ok(())
}
