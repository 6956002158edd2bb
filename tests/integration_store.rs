// envv-rs: Environment Variable Viewer - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the overlay store and PATH editor.
//!
//! Drives the public API end-to-end against the in-memory provider, the way
//! a front end would.

use std::collections::BTreeMap;

use envv_rs::core::pathlist::PathList;
use envv_rs::core::store::{ChangeKind, EnvStore, Resolved};
use envv_rs::core::winenv::memory::MemoryEnv;
use envv_rs::core::winenv::{EnvScopeProvider, Scope};

fn provider_with(user: &[(&str, &str)], system: &[(&str, &str)]) -> MemoryEnv {
    let to_map = |pairs: &[(&str, &str)]| {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<BTreeMap<_, _>>()
    };
    MemoryEnv::with_vars(to_map(user), to_map(system))
}

// =============================================================================
// Edit session lifecycle
// =============================================================================

#[test]
fn session_edit_delete_readd() {
    let mut provider = provider_with(&[("FOO", "1")], &[("FOO", "2"), ("TMP", "/t")]);
    let mut store = EnvStore::new();
    store.load(&provider).unwrap();

    // both values surface until an edit masks them
    assert_eq!(
        store.resolve("FOO"),
        Resolved::Both {
            user: "1".to_string(),
            system: "2".to_string(),
        }
    );

    let kind = store
        .upsert(&mut provider, "FOO", "3", Scope::User, None)
        .unwrap();
    assert_eq!(kind, ChangeKind::Modified);
    assert_eq!(store.resolve("FOO"), Resolved::Pending("3".to_string()));

    store.delete(&mut provider, "FOO").unwrap();
    assert_eq!(store.resolve("FOO"), Resolved::NotFound);
    assert_eq!(store.list_names(None), vec!["TMP"]);

    // the tombstone clears when the name comes back
    let kind = store
        .upsert(&mut provider, "FOO", "4", Scope::System, None)
        .unwrap();
    assert_eq!(kind, ChangeKind::Added);
    assert_eq!(store.resolve("FOO"), Resolved::Pending("4".to_string()));
}

#[test]
fn session_rename_flow() {
    let mut provider = provider_with(&[("OLD", "v")], &[]);
    let mut store = EnvStore::new();
    store.load(&provider).unwrap();

    store
        .upsert(&mut provider, "NEW", "v", Scope::User, Some("OLD"))
        .unwrap();

    assert_eq!(store.resolve("NEW"), Resolved::Pending("v".to_string()));
    // OLD is gone from the provider; once reloaded it is gone from the view
    store.load(&provider).unwrap();
    assert_eq!(store.resolve("OLD"), Resolved::NotFound);
    assert_eq!(store.list_names(None), vec!["NEW"]);
}

#[test]
fn session_survives_reload_with_stale_provider() {
    // a provider whose write-back is invisible to read_all models the stale
    // snapshot problem the tombstones exist for
    #[derive(Debug)]
    struct StaleReads {
        inner: MemoryEnv,
        frozen_user: BTreeMap<String, String>,
        frozen_system: BTreeMap<String, String>,
    }

    impl EnvScopeProvider for StaleReads {
        fn read_all(
            &self,
            scope: Scope,
        ) -> Result<BTreeMap<String, String>, envv_rs::error::EnvError> {
            Ok(match scope {
                Scope::User => self.frozen_user.clone(),
                Scope::System => self.frozen_system.clone(),
            })
        }

        fn write(
            &mut self,
            name: &str,
            value: &str,
            scope: Scope,
        ) -> Result<(), envv_rs::error::EnvError> {
            self.inner.write(name, value, scope)
        }

        fn unset(&mut self, name: &str, scope: Scope) -> Result<(), envv_rs::error::EnvError> {
            self.inner.unset(name, scope)
        }
    }

    let inner = provider_with(&[("DOOMED", "x"), ("KEPT", "y")], &[]);
    let mut provider = StaleReads {
        frozen_user: inner.scope_vars(Scope::User).clone(),
        frozen_system: inner.scope_vars(Scope::System).clone(),
        inner,
    };

    let mut store = EnvStore::new();
    store.load(&provider).unwrap();
    store.delete(&mut provider, "DOOMED").unwrap();

    // reload returns the stale snapshot that still contains DOOMED
    store.load(&provider).unwrap();
    assert_eq!(store.resolve("DOOMED"), Resolved::NotFound);
    assert_eq!(store.list_names(None), vec!["KEPT"]);
}

// =============================================================================
// PATH editing through the store
// =============================================================================

#[test]
fn path_edit_session() {
    let mut provider = provider_with(
        &[("PATH", r"C:\a;C:\b")],
        &[("PATH", r"C:\Windows")],
    );
    let mut store = EnvStore::new();
    store.load(&provider).unwrap();

    let mut list = PathList::parse(r"C:\a;C:\b");
    assert!(list.add(r"C:\c"));
    assert!(!list.add(r"C:\c"));
    assert!(list.remove(r"C:\a"));
    list.commit(&mut store, &mut provider, Scope::User).unwrap();

    assert_eq!(
        store.resolve("PATH"),
        Resolved::Pending(r"C:\b;C:\c".to_string())
    );
    // the system-scope PATH was not touched
    assert_eq!(
        provider.scope_vars(Scope::System).get("PATH"),
        Some(&r"C:\Windows".to_string())
    );
}

#[test]
fn path_parse_normalizes_empty_segments_once() {
    let list = PathList::parse("a;;b;a;");
    assert_eq!(list.serialize(), "a;b;a");

    let again = PathList::parse(&list.serialize());
    assert_eq!(again.serialize(), "a;b;a");
}

// =============================================================================
// Listing and filtering
// =============================================================================

#[test]
fn list_names_merges_all_views_sorted() {
    let mut provider = provider_with(&[("B_USER", "1")], &[("A_SYS", "2"), ("C_SYS", "3")]);
    let mut store = EnvStore::new();
    store.load(&provider).unwrap();
    store
        .upsert(&mut provider, "D_NEW", "4", Scope::User, None)
        .unwrap();

    assert_eq!(
        store.list_names(None),
        vec!["A_SYS", "B_USER", "C_SYS", "D_NEW"]
    );
    assert_eq!(store.list_names(Some("sys")), vec!["A_SYS", "C_SYS"]);
}
