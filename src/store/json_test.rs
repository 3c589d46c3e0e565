// Tests for the JSON file store
//
// Test cases:
// - Save then load round-trips the table
// - Loading a missing file yields an empty table
// - Loading corrupt JSON yields an empty table
// - Loading a document of the wrong shape yields an empty table
// - Save creates the parent directory when missing
// - Save leaves no temp file behind
// - Saved file is a pretty-printed JSON object keyed by alias name
// - Save overwrites previous content
// - Save reports directory creation failures

use super::*;
use crate::store::AliasStoreBackend;
use tempfile::TempDir;

fn make_store() -> (JsonFileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("aliases.json"));
    (store, temp_dir)
}

fn make_table(entries: &[(&str, &[&str])]) -> AliasTable {
    let mut table = AliasTable::new();
    for (name, commands) in entries {
        table
            .define(name, commands.iter().map(|c| c.to_string()).collect())
            .unwrap();
    }
    table
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let (store, _temp_dir) = make_store();
    let table = make_table(&[("gs", &["git status"]), ("deploy", &["build", "push"])]);

    store.save(&table).await.unwrap();
    let loaded = store.load().await;

    assert_eq!(loaded, table);
}

#[tokio::test]
async fn test_save_and_load_empty_table() {
    let (store, _temp_dir) = make_store();

    store.save(&AliasTable::new()).await.unwrap();
    let loaded = store.load().await;

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_load_missing_file_yields_empty_table() {
    let (store, _temp_dir) = make_store();

    let loaded = store.load().await;

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_load_corrupt_json_yields_empty_table() {
    let (store, temp_dir) = make_store();
    std::fs::write(temp_dir.path().join("aliases.json"), "{not json").unwrap();

    let loaded = store.load().await;

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_load_array_document_yields_empty_table() {
    let (store, temp_dir) = make_store();
    std::fs::write(temp_dir.path().join("aliases.json"), r#"["gs", "gp"]"#).unwrap();

    let loaded = store.load().await;

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_load_non_array_values_yields_empty_table() {
    let (store, temp_dir) = make_store();
    std::fs::write(
        temp_dir.path().join("aliases.json"),
        r#"{"gs": "git status"}"#,
    )
    .unwrap();

    let loaded = store.load().await;

    assert!(loaded.is_empty());
}

#[tokio::test]
async fn test_save_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nested").join("dir").join("aliases.json");
    let store = JsonFileStore::new(config_path.clone());

    store.save(&make_table(&[("gs", &["git status"])])).await.unwrap();

    assert!(config_path.exists());
}

#[tokio::test]
async fn test_save_leaves_no_temp_file_behind() {
    let (store, temp_dir) = make_store();

    store.save(&make_table(&[("gs", &["git status"])])).await.unwrap();

    assert!(!temp_dir.path().join("aliases.tmp").exists());
}

#[tokio::test]
async fn test_saved_file_is_an_object_keyed_by_name() {
    let (store, temp_dir) = make_store();

    store.save(&make_table(&[("gs", &["git status"])])).await.unwrap();

    let content = std::fs::read_to_string(temp_dir.path().join("aliases.json")).unwrap();
    assert!(content.contains('\n'), "file should be pretty-printed");

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["gs"], serde_json::json!(["git status"]));
}

#[tokio::test]
async fn test_save_overwrites_previous_content() {
    let (store, _temp_dir) = make_store();

    store.save(&make_table(&[("gs", &["git status"])])).await.unwrap();
    store.save(&make_table(&[("gp", &["git push"])])).await.unwrap();

    let loaded = store.load().await;
    assert!(!loaded.is_alias("gs"));
    assert!(loaded.is_alias("gp"));
}

#[tokio::test]
async fn test_save_reports_directory_creation_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "plain file").unwrap();

    let store = JsonFileStore::new(blocker.join("aliases.json"));
    let result = store.save(&make_table(&[("gs", &["git status"])])).await;

    assert!(matches!(result, Err(StoreError::DirectoryCreation(_))));
}
