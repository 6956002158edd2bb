// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows registry scope provider.
//!
//! ```text
//! User   --> HKCU\Environment
//! System --> HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment
//! write/unset --> WM_SETTINGCHANGE "Environment" broadcast
//! ```
//!
//! Values containing `%` are written as `REG_EXPAND_SZ` so references like
//! `%SystemRoot%` keep expanding after a rewrite; everything else is `REG_SZ`.

use std::collections::BTreeMap;

use windows::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_MORE_DATA, ERROR_NO_MORE_ITEMS, LPARAM,
    WIN32_ERROR, WPARAM,
};
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_QUERY_VALUE, REG_EXPAND_SZ, REG_SZ,
    RegCloseKey, RegDeleteKeyValueW, RegEnumValueW, RegOpenKeyExW, RegSetKeyValueW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    HWND_BROADCAST, SMTO_ABORTIFHUNG, SendMessageTimeoutW, WM_SETTINGCHANGE,
};
use windows::core::{PCWSTR, PWSTR, w};

use super::{EnvScopeProvider, Scope};
use crate::error::EnvError;

/// Registry value names are limited to 16383 characters.
const MAX_VALUE_NAME: usize = 16_384;

/// Initial data buffer, in UTF-16 code units. Grown on `ERROR_MORE_DATA`.
const INITIAL_DATA_LEN: usize = 32_768;

/// Scope provider backed by the Windows registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryEnv;

impl RegistryEnv {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn scope_root(scope: Scope) -> HKEY {
    match scope {
        Scope::User => HKEY_CURRENT_USER,
        Scope::System => HKEY_LOCAL_MACHINE,
    }
}

fn scope_subkey(scope: Scope) -> PCWSTR {
    match scope {
        Scope::User => w!("Environment"),
        Scope::System => w!(r"SYSTEM\CurrentControlSet\Control\Session Manager\Environment"),
    }
}

/// Converts a Windows API error to a `std::io::Error`.
fn win32_to_io(err: WIN32_ERROR) -> std::io::Error {
    std::io::Error::from_raw_os_error(err.0.cast_signed())
}

fn mutation_error(err: WIN32_ERROR, name: &str, scope: Scope) -> EnvError {
    if err == ERROR_ACCESS_DENIED {
        EnvError::PermissionDenied {
            name: name.to_owned(),
            scope: scope.to_string(),
        }
    } else {
        EnvError::Os {
            name: name.to_owned(),
            source: win32_to_io(err),
        }
    }
}

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Notifies running applications that the persisted environment changed.
///
/// Best-effort: a hung top-level window must not fail the commit.
fn broadcast_change() {
    // SAFETY: HWND_BROADCAST with SMTO_ABORTIFHUNG and a bounded timeout is
    // safe; the "Environment" string outlives the call.
    unsafe {
        let _ = SendMessageTimeoutW(
            HWND_BROADCAST,
            WM_SETTINGCHANGE,
            WPARAM(0),
            LPARAM(w!("Environment").as_ptr() as isize),
            SMTO_ABORTIFHUNG,
            5000,
            None,
        );
    }
}

fn enumerate_values(hkey: HKEY) -> Result<BTreeMap<String, String>, std::io::Error> {
    let mut vars = BTreeMap::new();
    let mut name_buf = vec![0u16; MAX_VALUE_NAME];
    let mut data_buf = vec![0u16; INITIAL_DATA_LEN];
    let mut index = 0u32;

    loop {
        let mut name_len = u32::try_from(name_buf.len()).unwrap_or(u32::MAX);
        let mut data_len = u32::try_from(data_buf.len() * 2).unwrap_or(u32::MAX);
        let mut value_type = 0u32;

        // SAFETY: all out-pointers reference live buffers of the advertised
        // sizes; the key handle is open for KEY_QUERY_VALUE.
        let result = unsafe {
            RegEnumValueW(
                hkey,
                index,
                PWSTR::from_raw(name_buf.as_mut_ptr()),
                &mut name_len,
                None,
                Some(&mut value_type),
                Some(data_buf.as_mut_ptr().cast()),
                Some(&mut data_len),
            )
        };

        if result == ERROR_NO_MORE_ITEMS {
            break;
        }
        if result == ERROR_MORE_DATA {
            data_buf.resize(data_buf.len() * 2, 0);
            continue;
        }
        if result.is_err() {
            return Err(win32_to_io(result));
        }

        // Only string-typed values are environment variables.
        if value_type == REG_SZ.0 || value_type == REG_EXPAND_SZ.0 {
            let name = String::from_utf16_lossy(&name_buf[..name_len as usize]);
            let mut units = &data_buf[..data_len as usize / 2];
            while units.last() == Some(&0) {
                units = &units[..units.len() - 1];
            }
            vars.insert(name, String::from_utf16_lossy(units));
        }

        index += 1;
    }

    Ok(vars)
}

impl EnvScopeProvider for RegistryEnv {
    fn read_all(&self, scope: Scope) -> Result<BTreeMap<String, String>, EnvError> {
        let mut hkey = HKEY::default();

        // SAFETY: the root keys are predefined handles; hkey receives the
        // opened key and is closed below.
        let open = unsafe {
            RegOpenKeyExW(
                scope_root(scope),
                scope_subkey(scope),
                Default::default(),
                KEY_QUERY_VALUE,
                &raw mut hkey,
            )
        };
        if open.is_err() {
            return Err(EnvError::ReadFailed {
                scope: scope.to_string(),
                source: win32_to_io(open),
            });
        }

        let result = enumerate_values(hkey);

        // SAFETY: hkey was opened above and is closed exactly once.
        unsafe {
            let _ = RegCloseKey(hkey);
        }

        result.map_err(|source| EnvError::ReadFailed {
            scope: scope.to_string(),
            source,
        })
    }

    fn write(&mut self, name: &str, value: &str, scope: Scope) -> Result<(), EnvError> {
        let wide_name = to_wide(name);
        let wide_value = to_wide(value);
        let kind = if value.contains('%') { REG_EXPAND_SZ } else { REG_SZ };
        let data_bytes = u32::try_from(wide_value.len() * 2).unwrap_or(u32::MAX);

        // SAFETY: the wide buffers are NUL-terminated and outlive the call;
        // cbData covers the terminator.
        let result = unsafe {
            RegSetKeyValueW(
                scope_root(scope),
                scope_subkey(scope),
                PCWSTR::from_raw(wide_name.as_ptr()),
                kind.0,
                Some(wide_value.as_ptr().cast()),
                data_bytes,
            )
        };
        if result.is_err() {
            return Err(mutation_error(result, name, scope));
        }

        broadcast_change();
        Ok(())
    }

    fn unset(&mut self, name: &str, scope: Scope) -> Result<(), EnvError> {
        let wide_name = to_wide(name);

        // SAFETY: the wide buffer is NUL-terminated and outlives the call.
        let result = unsafe {
            RegDeleteKeyValueW(
                scope_root(scope),
                scope_subkey(scope),
                PCWSTR::from_raw(wide_name.as_ptr()),
            )
        };

        // A missing value is already unset.
        if result.is_err() && result != ERROR_FILE_NOT_FOUND {
            return Err(mutation_error(result, name, scope));
        }

        broadcast_change();
        Ok(())
    }
}
