use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_round_trips_and_removes() {
    let store = MemoryStore::new();
    assert!(store.is_empty());

    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));

    store.set("token", "def");
    assert_eq!(store.get("token").as_deref(), Some("def"));
    assert_eq!(store.len(), 1);

    store.remove("token");
    assert!(store.get("token").is_none());
}

#[test]
fn memory_store_seeded_entries_are_visible() {
    let store = MemoryStore::with_entries([("role", "ANALYST")]);
    assert_eq!(store.get("role").as_deref(), Some("ANALYST"));
}

// =============================================================
// LocalStorage (non-browser build)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let store = LocalStorage;
    store.set("token", "abc");
    assert!(store.get("token").is_none());
    store.remove("token");
}

#[test]
fn storage_failures_are_reported() {
    assert!(warn_on_failure(Ok::<(), &str>(()), "remove", "token"));
    assert!(!warn_on_failure(Err("quota exceeded"), "write", "token"));
}
