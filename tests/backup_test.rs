//! Backup export / import through files

use chrono::{TimeZone, Utc};
use portfolio_common::{
    parse_backup, seed_projects, Category, Error, ProjectRepository,
};
use portfolio_site::store::JsonFileStore;
use tempfile::tempdir;

/// Export writes the dated backup file with every project
#[test]
fn test_export_writes_dated_backup() {
    let dir = tempdir().expect("Failed to create temp dir");
    let repo = ProjectRepository::open(JsonFileStore::new(dir.path().join("projects.json")));
    let now = Utc.with_ymd_and_hms(2025, 3, 7, 18, 30, 0).unwrap();

    let document = repo.export(now);
    assert_eq!(document.file_name(), "backup-2025-03-07.json");

    let target = dir.path().join(document.file_name());
    std::fs::write(&target, document.to_json().expect("serialize should succeed"))
        .expect("write should succeed");

    let text = std::fs::read_to_string(&target).expect("read should succeed");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["projects"].as_array().map(|a| a.len()), Some(seed_projects().len()));
    assert!(value["exportDate"].as_str().expect("exportDate").starts_with("2025-03-07T18:30:00"));
}

/// Import swaps the whole store for the backup contents
#[test]
fn test_import_replaces_everything() {
    let dir = tempdir().expect("Failed to create temp dir");
    let source_path = dir.path().join("source.json");
    let target_path = dir.path().join("target.json");
    let now = Utc.with_ymd_and_hms(2025, 3, 7, 0, 0, 0).unwrap();

    // a backup holding only the website project
    let mut source = ProjectRepository::open(JsonFileStore::new(&source_path));
    let keep: Vec<_> = source
        .list()
        .iter()
        .filter(|p| p.category() == Category::Website)
        .cloned()
        .collect();
    source.replace_all(keep).expect("replace should succeed");
    let backup = source.export(now).to_json().expect("serialize should succeed");

    let mut target = ProjectRepository::open(JsonFileStore::new(&target_path));
    let count = target.import_json(&backup).expect("import should succeed");

    assert_eq!(count, 1);
    assert_eq!(target.list()[0].id, "website-feria-creativa");

    let reopened = ProjectRepository::open(JsonFileStore::new(&target_path));
    assert_eq!(reopened.len(), 1);
}

/// A backup without projects is rejected and nothing is written
#[test]
fn test_import_without_projects_leaves_store_untouched() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("projects.json");
    let mut repo = ProjectRepository::open(JsonFileStore::new(&path));

    let result = repo.import_json(r#"{"exportDate": "2025-01-01T00:00:00Z"}"#);

    assert!(matches!(result, Err(Error::MissingProjects)));
    assert_eq!(repo.len(), seed_projects().len());
    assert!(!path.exists());
}

/// Older backups that use the entries key still import
#[test]
fn test_import_accepts_entries_key() {
    let text = serde_json::json!({ "entries": seed_projects() }).to_string();
    let projects = parse_backup(&text).expect("entries should be accepted");
    assert_eq!(projects, seed_projects());
}

/// Malformed JSON is rejected
#[test]
fn test_import_rejects_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut repo = ProjectRepository::open(JsonFileStore::new(dir.path().join("projects.json")));

    assert!(matches!(repo.import_json("no es json"), Err(Error::Json(_))));
}
