use super::*;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::default();
    store.write("k", "v");
    assert_eq!(store.read("k"), Some("v".to_owned()));
    store.remove("k");
    assert_eq!(store.read("k"), None);
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::default();
    store.remove("missing");
    store.remove("missing");
    assert_eq!(store.read("missing"), None);
}

#[test]
fn browser_store_is_inert_on_the_host() {
    let store = BrowserStore;
    store.write("k", "v");
    assert_eq!(store.read("k"), None);
}
