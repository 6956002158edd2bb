// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the persisted-environment providers.

use super::dry::DryEnv;
use super::memory::MemoryEnv;
use super::{EnvScopeProvider, Scope};
use std::collections::BTreeMap;

#[test]
fn test_scope_display() {
    assert_eq!(Scope::User.to_string(), "user");
    assert_eq!(Scope::System.to_string(), "system");
}

#[test]
fn test_scope_from_str() {
    assert_eq!("user".parse::<Scope>().unwrap(), Scope::User);
    assert_eq!("System".parse::<Scope>().unwrap(), Scope::System);
    // the machine-wide scope goes by both names
    assert_eq!("machine".parse::<Scope>().unwrap(), Scope::System);
    assert!("global".parse::<Scope>().is_err());
}

#[test]
fn test_memory_scopes_are_independent() {
    let mut env = MemoryEnv::new();
    env.write("FOO", "user-value", Scope::User).unwrap();
    env.write("FOO", "system-value", Scope::System).unwrap();

    assert_eq!(
        env.read_all(Scope::User).unwrap().get("FOO"),
        Some(&"user-value".to_string())
    );
    assert_eq!(
        env.read_all(Scope::System).unwrap().get("FOO"),
        Some(&"system-value".to_string())
    );

    env.unset("FOO", Scope::User).unwrap();
    assert!(!env.read_all(Scope::User).unwrap().contains_key("FOO"));
    assert!(env.read_all(Scope::System).unwrap().contains_key("FOO"));
}

#[test]
fn test_memory_unset_missing_is_ok() {
    let mut env = MemoryEnv::new();
    assert!(env.unset("NOTEXIST", Scope::User).is_ok());
    assert!(env.unset("NOTEXIST", Scope::System).is_ok());
}

#[test]
fn test_memory_with_vars() {
    let user = BTreeMap::from([("A".to_string(), "1".to_string())]);
    let system = BTreeMap::from([("B".to_string(), "2".to_string())]);
    let env = MemoryEnv::with_vars(user, system);

    assert_eq!(env.scope_vars(Scope::User).len(), 1);
    assert_eq!(env.scope_vars(Scope::System).len(), 1);
    assert_eq!(
        env.read_all(Scope::System).unwrap().get("B"),
        Some(&"2".to_string())
    );
}

#[test]
fn test_dry_env_delegates_reads() {
    let mut inner = MemoryEnv::new();
    inner.write("EDITOR", "hx", Scope::User).unwrap();

    let dry = DryEnv::new(inner);
    assert_eq!(
        dry.read_all(Scope::User).unwrap().get("EDITOR"),
        Some(&"hx".to_string())
    );
}

#[test]
fn test_dry_env_skips_mutations() {
    let mut inner = MemoryEnv::new();
    inner.write("KEEP", "original", Scope::User).unwrap();

    let mut dry = DryEnv::new(inner);
    dry.write("KEEP", "clobbered", Scope::User).unwrap();
    dry.write("NEW", "value", Scope::User).unwrap();
    dry.unset("KEEP", Scope::User).unwrap();

    let inner = dry.into_inner();
    let vars = inner.read_all(Scope::User).unwrap();
    assert_eq!(vars.get("KEEP"), Some(&"original".to_string()));
    assert!(!vars.contains_key("NEW"));
}

#[cfg(not(windows))]
#[test]
fn test_is_elevated_off_windows() {
    assert!(!super::is_elevated());
}
