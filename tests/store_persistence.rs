//! Store Persistence Tests
//!
//! - Records are loaded once from `{ "animals": [...] }`
//! - Every create rewrites the full list, pretty-printed
//! - Ids are the list length at insertion time
//! - A failed write never leaves memory ahead of disk

use std::fs;

use serde_json::{json, Value};
use tempfile::TempDir;

use zookeepr::animals::{
    AnimalError, AnimalQuery, AnimalStore, JsonFileBackend, Persistence, WriteMode,
};

// =============================================================================
// Test Utilities
// =============================================================================

fn candidate(name: &str, species: &str) -> Value {
    json!({
        "name": name,
        "species": species,
        "diet": "herbivore",
        "personalityTraits": ["calm"]
    })
}

fn create_store_file(temp_dir: &TempDir) -> std::path::PathBuf {
    let path = temp_dir.path().join("animals.json");
    fs::write(&path, "{\n  \"animals\": []\n}").unwrap();
    path
}

// =============================================================================
// Append-and-persist
// =============================================================================

#[test]
fn test_ids_follow_list_length() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_store_file(&temp_dir);
    let mut store = AnimalStore::open(JsonFileBackend::new(&path)).unwrap();

    for (expected, name) in ["Ada", "Bo", "Cy"].iter().enumerate() {
        let before = store.len();
        let created = store.create(&candidate(name, "okapi")).unwrap();
        assert_eq!(created.id, expected.to_string());
        assert_eq!(store.len(), before + 1);
    }
}

#[test]
fn test_reopen_sees_created_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_store_file(&temp_dir);

    {
        let mut store = AnimalStore::open(JsonFileBackend::new(&path)).unwrap();
        store.create(&candidate("Ada", "okapi")).unwrap();
        store.create(&candidate("Bo", "tapir")).unwrap();
    }

    let reopened = AnimalStore::open(JsonFileBackend::new(&path)).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.find_by_id("1").map(|a| a.species.as_str()), Some("tapir"));

    let tapirs = reopened.filter(&AnimalQuery::new().with_species("tapir"));
    assert_eq!(tapirs.len(), 1);
}

#[test]
fn test_file_layout_is_pretty_animals_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_store_file(&temp_dir);
    let mut store = AnimalStore::open(JsonFileBackend::new(&path)).unwrap();

    store.create(&candidate("Ada", "okapi")).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["animals"][0]["id"], "0");
    assert_eq!(parsed["animals"][0]["personalityTraits"], json!(["calm"]));
    assert!(content.contains("\n  \"animals\": [\n"));
}

#[test]
fn test_atomic_mode_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_store_file(&temp_dir);
    let mut store =
        AnimalStore::open(JsonFileBackend::with_mode(&path, WriteMode::Atomic)).unwrap();

    store.create(&candidate("Ada", "okapi")).unwrap();

    assert_eq!(JsonFileBackend::new(&path).load().unwrap().len(), 1);
}

// =============================================================================
// Failure handling
// =============================================================================

#[test]
fn test_failed_write_keeps_memory_consistent() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    let path = data_dir.join("animals.json");
    fs::write(&path, "{\"animals\": []}").unwrap();

    let mut store = AnimalStore::open(JsonFileBackend::new(&path)).unwrap();

    // Remove the directory so the rewrite cannot open the file
    fs::remove_dir_all(&data_dir).unwrap();

    let result = store.create(&candidate("Ada", "okapi"));
    assert!(matches!(result, Err(AnimalError::Io(_))));
    assert!(store.is_empty());
}

#[test]
fn test_open_rejects_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("animals.json");
    fs::write(&path, json!({"animals": [{"id": "0"}]}).to_string()).unwrap();

    let result = AnimalStore::open(JsonFileBackend::new(&path));
    assert!(matches!(result, Err(AnimalError::Serialization(_))));
}
