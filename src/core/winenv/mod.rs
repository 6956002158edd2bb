// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Persisted-environment access.
//!
//! # Architecture
//!
//! ```text
//! EnvScopeProvider (trait)
//!   read_all(scope) / write / unset
//!        |
//!   +----+---------+---------+
//!   v              v         v
//! RegistryEnv   MemoryEnv  DryEnv<P>
//! (Windows)     (tests)    (--dry wrapper)
//! ```
//!
//! - **Persisted scopes only**: never touches the process environment
//! - **User scope**: `HKCU\Environment`
//! - **System scope**: `HKLM\SYSTEM\...\Session Manager\Environment`

pub mod dry;
pub mod memory;
#[cfg(windows)]
pub mod registry;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::error::{ConfigError, EnvError};

/// Persistence domain for an environment variable.
///
/// Lookups within a scope are exact-match and case-sensitive; the underlying
/// Windows store is case-insensitive, a known limitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scope {
    /// Per-user environment.
    User,
    /// Machine-wide environment.
    System,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "system" | "machine" => Ok(Self::System),
            _ => Err(ConfigError::InvalidValue {
                section: "scope".to_string(),
                key: "scope".to_string(),
                message: format!("expected 'user' or 'system', got '{s}'"),
            }),
        }
    }
}

/// Access to the OS-level persisted environment, one mapping per scope.
///
/// Implementations must not read or write the process-level (non-persisted)
/// environment.
pub trait EnvScopeProvider {
    /// Reads the full snapshot of a scope.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::ReadFailed`] if the scope cannot be enumerated.
    fn read_all(&self, scope: Scope) -> Result<BTreeMap<String, String>, EnvError>;

    /// Persists `value` for `name` in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::PermissionDenied`] for insufficient privilege at
    /// `scope`, [`EnvError::Os`] for any other platform failure.
    fn write(&mut self, name: &str, value: &str, scope: Scope) -> Result<(), EnvError>;

    /// Removes `name` from `scope`. Unsetting a name that is not present is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::PermissionDenied`] for insufficient privilege at
    /// `scope`, [`EnvError::Os`] for any other platform failure.
    fn unset(&mut self, name: &str, scope: Scope) -> Result<(), EnvError>;
}

/// Whether the current process runs with an elevated token.
///
/// Callers use this to warn before system-scope writes; the write itself
/// still surfaces `PermissionDenied` when rejected.
#[cfg(windows)]
#[must_use]
pub fn is_elevated() -> bool {
    use windows::Win32::Foundation::{CloseHandle, HANDLE};
    use windows::Win32::Security::{
        GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation,
    };
    use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

    // SAFETY: GetCurrentProcess returns a pseudo-handle that needs no
    // cleanup; the token handle is closed before returning.
    unsafe {
        let mut token = HANDLE::default();
        if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token).is_err() {
            return false;
        }

        let mut elevation = TOKEN_ELEVATION::default();
        let mut len = 0u32;
        let result = GetTokenInformation(
            token,
            TokenElevation,
            Some((&raw mut elevation).cast()),
            u32::try_from(std::mem::size_of::<TOKEN_ELEVATION>()).unwrap_or(u32::MAX),
            &mut len,
        );
        let _ = CloseHandle(token);

        result.is_ok() && elevation.TokenIsElevated != 0
    }
}

/// Whether the current process runs with an elevated token.
#[cfg(not(windows))]
#[must_use]
pub const fn is_elevated() -> bool {
    false
}
