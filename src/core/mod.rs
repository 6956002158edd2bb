// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for persisted-environment management.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!   store    pathlist   winenv
//!     |         |         |
//! EnvStore   PathList  EnvScopeProvider
//! Resolved   PATH_VAR  RegistryEnv (Windows only)
//! ChangeKind           MemoryEnv / DryEnv
//! ```

pub mod pathlist;
pub mod store;
pub mod winenv;
