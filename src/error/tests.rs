// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError, EnvvError, EnvvResult, StoreError};

#[test]
fn test_store_error_display() {
    insta::assert_snapshot!(
        StoreError::NotFound("JAVA_HOME".to_string()).to_string(),
        @"environment variable 'JAVA_HOME' not found"
    );
}

#[test]
fn test_env_error_display() {
    let err = EnvError::PermissionDenied {
        name: "PATH".to_string(),
        scope: "system".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"permission denied: 'PATH' at system scope");
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "output_log_level".to_string(),
        message: "log level must be 0-5, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'output_log_level' in section '[global]': log level must be 0-5, got 9"
    );
}

#[test]
fn test_validation_errors_display() {
    assert_eq!(
        StoreError::EmptyName.to_string(),
        "variable name cannot be empty"
    );
    assert_eq!(
        StoreError::EmptyValue.to_string(),
        "variable value cannot be empty"
    );
}

#[test]
fn test_store_error_wraps_env_error() {
    let err = StoreError::from(EnvError::PermissionDenied {
        name: "TEMP".to_string(),
        scope: "user".to_string(),
    });
    // transparent: the inner message passes through unchanged
    assert_eq!(err.to_string(), "permission denied: 'TEMP' at user scope");
}

#[test]
fn test_envv_error_size() {
    // EnvvError should be reasonably small
    // Box<str> variants (Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<EnvvError>();
    assert!(size <= 24, "EnvvError is {size} bytes, expected <= 24");
}

#[test]
fn test_envv_result_size() {
    // Result<(), EnvvError> should be reasonably small
    let size = std::mem::size_of::<EnvvResult<()>>();
    assert!(size <= 24, "EnvvResult<()> is {size} bytes, expected <= 24");
}
