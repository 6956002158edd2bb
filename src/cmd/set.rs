// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Set command implementation for envv-rs.

use tracing::warn;

use crate::cli::vars::SetArgs;
use crate::cmd::{load_store, make_provider};
use crate::config::Config;
use crate::core::store::{ChangeKind, EnvStore};
use crate::core::winenv::{EnvScopeProvider, Scope, is_elevated};
use crate::error::{Result, StoreError};

/// What an upsert did and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetOutcome {
    pub kind: ChangeKind,
    pub scope: Scope,
}

/// Resolves the target scope and commits the edit through the store.
///
/// # Errors
///
/// Whatever [`EnvStore::upsert`] returns.
pub fn apply_set(
    store: &mut EnvStore,
    provider: &mut dyn EnvScopeProvider,
    args: &SetArgs,
) -> std::result::Result<SetOutcome, StoreError> {
    let scope = args
        .scope
        .unwrap_or_else(|| store.default_scope_for(&args.name));
    let kind = store.upsert(
        provider,
        &args.name,
        &args.value,
        scope,
        args.rename_from.as_deref(),
    )?;
    Ok(SetOutcome { kind, scope })
}

/// Main handler for the set command.
///
/// # Errors
///
/// Returns an error on validation failure, snapshot read failure, or a
/// rejected write.
pub fn run_set_command(args: &SetArgs, _config: &Config, dry: bool) -> Result<()> {
    if args.scope == Some(Scope::System) && !is_elevated() {
        warn!("system-scope writes usually require an elevated shell");
    }

    let mut provider = make_provider(dry)?;
    let mut store = load_store(provider.as_ref())?;

    let outcome = apply_set(&mut store, provider.as_mut(), args)?;
    println!("{} '{}' in {} scope", outcome.kind, args.name, outcome.scope);
    Ok(())
}
