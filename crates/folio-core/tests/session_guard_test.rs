//! Integration tests: admin session gate over the content store.

use folio_core::{ContentStore, MemoryStore, SessionGuard, SledStore, SESSION_FLAG_KEY};

const PASSCODE: &str = "open-sesame";

#[test]
fn fresh_store_is_unauthenticated() {
    let guard = SessionGuard::new(MemoryStore::new(), PASSCODE);
    assert!(!guard.is_authenticated());
}

#[test]
fn login_succeeds_only_for_exact_passcode() {
    let guard = SessionGuard::new(MemoryStore::new(), PASSCODE);

    assert!(!guard.login("wrong").unwrap());
    assert!(!guard.is_authenticated());

    assert!(!guard.login("open-sesame ").unwrap(), "no trimming, exact match only");
    assert!(!guard.login("Open-Sesame").unwrap(), "comparison is case-sensitive");
    assert!(!guard.is_authenticated());

    assert!(guard.login(PASSCODE).unwrap());
    assert!(guard.is_authenticated());
}

#[test]
fn logout_clears_the_session_from_any_state() {
    let guard = SessionGuard::new(MemoryStore::new(), PASSCODE);

    // Logout while already unauthenticated is fine.
    guard.logout().unwrap();
    assert!(!guard.is_authenticated());

    assert!(guard.login(PASSCODE).unwrap());
    guard.logout().unwrap();
    assert!(!guard.is_authenticated());
}

#[test]
fn corrupt_flag_value_counts_as_unauthenticated() {
    let store = MemoryStore::new();
    store.set(SESSION_FLAG_KEY, b"yes").unwrap();
    let guard = SessionGuard::new(store, PASSCODE);
    assert!(!guard.is_authenticated());
}

#[test]
fn session_flag_survives_reopen_of_durable_store() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = SledStore::open_path(dir.path()).unwrap();
        let guard = SessionGuard::new(store, PASSCODE);
        assert!(guard.login(PASSCODE).unwrap());
    }

    let store = SledStore::open_path(dir.path()).unwrap();
    let guard = SessionGuard::new(store, PASSCODE);
    assert!(guard.is_authenticated(), "flag lives as long as the backing store");
}
