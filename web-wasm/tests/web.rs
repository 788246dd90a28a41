//! Browser tests for the local-storage store

use gloo::storage::{LocalStorage, Storage};
use portfolio_common::{seed_projects, ContentStore, LoadOrigin, ProjectRepository};
use portfolio_web::storage::LocalStorageStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clean_store(key: &'static str) -> LocalStorageStore {
    LocalStorage::delete(key);
    LocalStorageStore::with_key(key)
}

/// Empty local storage reads as nothing stored
#[wasm_bindgen_test]
fn test_empty_storage_reads_none() {
    let store = clean_store("test-empty");
    assert!(store.read().expect("read should succeed").is_none());
}

/// Saved projects load back from local storage
#[wasm_bindgen_test]
fn test_save_then_load() {
    let mut store = clean_store("test-roundtrip");
    store.save(&seed_projects()).expect("save should succeed");

    let loaded = store.load().expect("load should succeed").expect("projects should exist");
    assert_eq!(loaded, seed_projects());
}

/// Deletes through the repository reach local storage
#[wasm_bindgen_test]
fn test_repository_persists_deletes() {
    let store = clean_store("test-repository");
    let mut repo = ProjectRepository::open(store);
    assert_eq!(repo.origin(), &LoadOrigin::Seed);

    assert!(repo.delete("diseno-identidad-luma").expect("delete should succeed"));

    let reopened = ProjectRepository::open(LocalStorageStore::with_key("test-repository"));
    assert_eq!(reopened.origin(), &LoadOrigin::Stored);
    assert_eq!(reopened.len(), seed_projects().len() - 1);
}

/// Unreadable local storage recovers with the bundled projects
#[wasm_bindgen_test]
fn test_garbage_recovers_with_seed() {
    let mut store = clean_store("test-garbage");
    store.write("{ no es json").expect("write should succeed");

    let repo = ProjectRepository::open(store);
    assert!(matches!(repo.origin(), LoadOrigin::Recovered(_)));
    assert_eq!(repo.len(), seed_projects().len());
}
