use super::*;

// =============================================================
// ThemePreferenceStore
// =============================================================

#[test]
fn read_is_none_when_never_written() {
    let store = ThemePreferenceStore::new(MemoryStorage::new());
    assert_eq!(store.read(), None);
}

#[test]
fn write_then_read_after_reload_returns_value() {
    let storage = MemoryStorage::new();
    let store = ThemePreferenceStore::new(storage.clone());
    store.write(ThemePreference::Dark).unwrap();

    let reloaded = ThemePreferenceStore::new(storage);
    assert_eq!(reloaded.read(), Some(ThemePreference::Dark));
}

#[test]
fn clearing_storage_between_write_and_read_yields_none() {
    let storage = MemoryStorage::new();
    let store = ThemePreferenceStore::new(storage.clone());
    store.write(ThemePreference::Dark).unwrap();
    storage.clear();

    assert_eq!(ThemePreferenceStore::new(storage).read(), None);
}

#[test]
fn write_overwrites_previous_value() {
    let store = ThemePreferenceStore::new(MemoryStorage::new());
    store.write(ThemePreference::Dark).unwrap();
    store.write(ThemePreference::Light).unwrap();
    assert_eq!(store.read(), Some(ThemePreference::Light));
    assert_eq!(store.storage().len(), 1);
}

#[test]
fn write_and_read_share_one_key() {
    let storage = MemoryStorage::new();
    ThemePreferenceStore::new(storage.clone()).write(ThemePreference::Dark).unwrap();
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn corrupt_value_reads_as_none() {
    let storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, "sepia").unwrap();
    assert_eq!(ThemePreferenceStore::new(storage).read(), None);
}

#[test]
fn legacy_boolean_value_reads_as_preference() {
    let storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, "true").unwrap();
    assert_eq!(ThemePreferenceStore::new(storage).read(), Some(ThemePreference::Dark));
}

#[test]
fn disabled_storage_reads_none_and_write_errors() {
    let storage = MemoryStorage::new();
    let store = ThemePreferenceStore::new(storage.clone());
    store.write(ThemePreference::Dark).unwrap();
    storage.disable();

    assert_eq!(store.read(), None);
    assert_eq!(store.write(ThemePreference::Light), Err(PersistenceError::Unavailable));

    storage.enable();
    assert_eq!(store.read(), Some(ThemePreference::Dark));
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn quota_rejects_oversized_write() {
    let storage = MemoryStorage::with_quota(4);
    assert_eq!(storage.set_item(STORAGE_KEY, "dark"), Err(PersistenceError::QuotaExceeded));
    assert!(storage.is_empty());
}

#[test]
fn quota_counts_replaced_key_once() {
    let storage = MemoryStorage::with_quota(STORAGE_KEY.len() + 5);
    storage.set_item(STORAGE_KEY, "light").unwrap();
    storage.set_item(STORAGE_KEY, "dark").unwrap();
    assert_eq!(storage.get_item(STORAGE_KEY).unwrap().as_deref(), Some("dark"));
}

#[test]
fn remove_item_deletes_key() {
    let storage = MemoryStorage::new();
    storage.set_item("a", "1").unwrap();
    storage.remove_item("a").unwrap();
    assert_eq!(storage.get_item("a").unwrap(), None);
}
