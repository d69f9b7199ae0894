//! Integration tests for the JSON-file settings store

use chime_core::SettingsStore;
use chime_storage::JsonFileStore;

#[test]
fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store
            .set("player", &serde_json::json!({ "volume": 0.7, "shuffle": false }))
            .unwrap();
        store.set("ui.theme", &serde_json::json!("dark")).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        store.get("player").unwrap(),
        Some(serde_json::json!({ "volume": 0.7, "shuffle": false }))
    );
    assert_eq!(
        store.get("ui.theme").unwrap(),
        Some(serde_json::json!("dark"))
    );
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("nope.json")).unwrap();
    assert!(store.get("anything").unwrap().is_none());
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut store = JsonFileStore::open(&path).unwrap();
    assert!(store.get("anything").unwrap().is_none());

    // And the store is writable again afterwards
    store.set("k", &serde_json::json!(1)).unwrap();
    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("k").unwrap(), Some(serde_json::json!(1)));
}

#[test]
fn remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("k", &serde_json::json!("v")).unwrap();
    store.remove("k").unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert!(reopened.get("k").unwrap().is_none());
}

#[test]
fn overwrite_replaces_value_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.set("repeat", &serde_json::json!("all")).unwrap();
    store.set("repeat", &serde_json::json!("one")).unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("repeat").unwrap(),
        Some(serde_json::json!("one"))
    );
}
