// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the delimited list editor.

use super::PathList;
use crate::core::store::{EnvStore, Resolved};
use crate::core::winenv::memory::MemoryEnv;
use crate::core::winenv::{EnvScopeProvider, Scope};
use crate::error::StoreError;

#[test]
fn test_parse_drops_empty_segments_keeps_order_and_duplicates() {
    let list = PathList::parse("a;;b;a");
    assert_eq!(list.entries(), ["a", "b", "a"]);
    insta::assert_snapshot!(list.serialize(), @"a;b;a");
}

#[test]
fn test_parse_empty_value() {
    let list = PathList::parse("");
    assert!(list.is_empty());
    assert_eq!(list.serialize(), "");
}

#[test]
fn test_parse_only_separators() {
    let list = PathList::parse(";;;");
    assert!(list.is_empty());
}

#[test]
fn test_roundtrip_is_idempotent_without_empty_segments() {
    let raw = r"C:\Windows;C:\Windows\System32;C:\tools";
    let once = PathList::parse(raw).serialize();
    let twice = PathList::parse(&once).serialize();
    assert_eq!(once, raw);
    assert_eq!(twice, once);
}

#[test]
fn test_add_trims_and_appends_at_end() {
    let mut list = PathList::parse("a;b");
    assert!(list.add("  /usr/bin  "));
    assert_eq!(list.entries(), ["a", "b", "/usr/bin"]);
}

#[test]
fn test_add_is_idempotent() {
    let mut list = PathList::parse("a");
    assert!(list.add("/usr/bin"));
    assert!(!list.add("/usr/bin"));
    let occurrences = list
        .entries()
        .iter()
        .filter(|entry| *entry == "/usr/bin")
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn test_add_empty_or_whitespace_is_noop() {
    let mut list = PathList::parse("a");
    assert!(!list.add(""));
    assert!(!list.add("   "));
    assert_eq!(list.entries(), ["a"]);
}

#[test]
fn test_add_duplicate_check_is_exact_match() {
    let mut list = PathList::parse(r"C:\Tools");
    // differs by case, so it is a distinct entry
    assert!(list.add(r"c:\tools"));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_first_match_only() {
    let mut list = PathList::parse("a;b;a");
    assert!(list.remove("a"));
    assert_eq!(list.entries(), ["b", "a"]);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut list = PathList::parse("a;b");
    assert!(!list.remove("c"));
    assert_eq!(list.entries(), ["a", "b"]);
}

#[test]
fn test_commit_writes_serialized_path_through_store() {
    let mut provider = MemoryEnv::new();
    provider
        .write("PATH", r"C:\Windows;C:\tools", Scope::User)
        .unwrap();
    let mut store = EnvStore::new();
    store.load(&provider).unwrap();

    let mut list = PathList::parse(r"C:\Windows;C:\tools");
    list.add(r"C:\bin");
    list.remove(r"C:\tools");
    list.commit(&mut store, &mut provider, Scope::User).unwrap();

    let expected = r"C:\Windows;C:\bin";
    assert_eq!(
        provider.scope_vars(Scope::User).get("PATH"),
        Some(&expected.to_string())
    );
    assert_eq!(
        store.resolve("PATH"),
        Resolved::Pending(expected.to_string())
    );
}

#[test]
fn test_commit_empty_list_fails_validation() {
    let mut provider = MemoryEnv::new();
    let mut store = EnvStore::new();

    let list = PathList::parse("");
    assert!(matches!(
        list.commit(&mut store, &mut provider, Scope::User),
        Err(StoreError::EmptyValue)
    ));
}
