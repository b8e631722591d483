use std::collections::HashSet;
use std::fs;

use recipe_browse::{FavoritesLedger, FavoritesStore, JsonFileStore};
use tempfile::tempdir;

#[test]
fn toggles_survive_reopening_the_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("favorites.json");

    let mut ledger = FavoritesLedger::open(JsonFileStore::new(&path));
    ledger.toggle(5).unwrap();
    ledger.toggle(2).unwrap();
    ledger.toggle(9).unwrap();
    ledger.toggle(2).unwrap(); // un-favorite again
    drop(ledger);

    let reopened = FavoritesLedger::open(JsonFileStore::new(&path));
    assert_eq!(reopened.len(), 2);
    assert!(reopened.is_favorite(5));
    assert!(reopened.is_favorite(9));
    assert!(!reopened.is_favorite(2));
}

#[test]
fn file_holds_a_sorted_json_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("favorites.json");

    let mut ledger = FavoritesLedger::open(JsonFileStore::new(&path));
    ledger.toggle(8).unwrap();
    ledger.toggle(1).unwrap();
    ledger.toggle(3).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[1,3,8]");
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let ledger = FavoritesLedger::open(JsonFileStore::new(dir.path().join("absent.json")));
    assert!(ledger.is_empty());
}

#[test]
fn corrupt_file_starts_empty_and_is_overwritten_on_next_toggle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    fs::write(&path, "{\"oops\": true}").unwrap();

    let mut ledger = FavoritesLedger::open(JsonFileStore::new(&path));
    assert!(ledger.is_empty());

    ledger.toggle(4).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[4]");
}

#[test]
fn store_save_is_a_whole_set_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    let mut store = JsonFileStore::new(&path);

    let first: HashSet<u32> = [1, 2, 3].into_iter().collect();
    let second: HashSet<u32> = [7].into_iter().collect();
    store.save(&first).unwrap();
    store.save(&second).unwrap();

    assert_eq!(store.load().unwrap(), second);
}
