// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              EnvvError (~24 bytes)
//!                     |
//!   +---------+-------+-------+---------+
//!   |         |       |       |         |
//!   v         v       v       v         v
//! Store      Env     Cfg    Export   Io/Other
//!  Box       Box     Box     Box     Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Store   EmptyName, EmptyValue, NotFound
//!   Env     PermissionDenied, Os, ReadFailed
//!   Config  ParseError, InvalidValue, NotFound
//!   Export  WriteFailed
//!
//! All variants boxed => EnvvError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvvError`].
pub type EnvvResult<T> = std::result::Result<T, EnvvError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvvError {
    /// Overlay store operation failed.
    #[error("store error: {0}")]
    Store(#[from] Box<StoreError>),

    /// Persisted environment access failed.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Export error.
    #[error("export error: {0}")]
    Export(#[from] Box<ExportError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvvError {
                fn from(err: $error) -> Self {
                    EnvvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    StoreError => Store,
    EnvError => Env,
    ConfigError => Config,
    ExportError => Export,
    std::io::Error => Io,
}

// --- Store Errors ---

/// Scope Overlay Store errors.
///
/// `EmptyName`/`EmptyValue` are recoverable validation failures; `NotFound`
/// means the target name is absent from the merged view and the caller should
/// refresh its listing. Every failure leaves the store state unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Variable name was empty.
    #[error("variable name cannot be empty")]
    EmptyName,

    /// Variable value was empty.
    #[error("variable value cannot be empty")]
    EmptyValue,

    /// Name does not resolve in the merged view.
    #[error("environment variable '{0}' not found")]
    NotFound(String),

    /// Underlying persisted-environment failure.
    #[error(transparent)]
    Env(#[from] EnvError),
}

// --- Environment Errors ---

/// Persisted-environment access errors.
#[derive(Debug, Error)]
pub enum EnvError {
    /// Write or unset rejected for insufficient privilege at a scope.
    /// Recoverable by re-running elevated; never silently retried.
    #[error("permission denied: '{name}' at {scope} scope")]
    PermissionDenied { name: String, scope: String },

    /// Any other platform failure, surfaced verbatim.
    #[error("os error on '{name}': {source}")]
    Os {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot read failed for a scope.
    #[error("failed to read {scope} environment: {source}")]
    ReadFailed {
        scope: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Export Errors ---

/// Export-to-file errors. Either the whole file is written or nothing is.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write the export file.
    #[error("failed to write export file '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
