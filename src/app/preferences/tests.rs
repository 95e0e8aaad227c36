use super::*;
use tempfile::NamedTempFile;

#[test]
fn missing_dark_mode_reads_as_light() {
    let store = MemoryPreferenceStore::default();
    assert!(!read_dark_mode(&store));
}

#[test]
fn dark_mode_round_trips_through_memory_store() {
    let mut store = MemoryPreferenceStore::default();
    write_dark_mode(&mut store, true).expect("write");
    assert!(read_dark_mode(&store));
    assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
    write_dark_mode(&mut store, false).expect("write");
    assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
}

#[test]
fn file_store_persists_across_reloads() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("nested").join("preferences.json");

    let mut store = FilePreferenceStore::load(&path);
    write_dark_mode(&mut store, true).expect("save preference");

    let reloaded = FilePreferenceStore::load(&path);
    assert!(read_dark_mode(&reloaded));
    assert_eq!(reloaded.path(), path.as_path());
}

#[test]
fn corrupt_file_loads_as_empty() {
    let file = NamedTempFile::new().expect("create temp file");
    std::fs::write(file.path(), "{not json").expect("write garbage");
    let store = FilePreferenceStore::load(file.path());
    assert!(store.get(DARK_MODE_KEY).is_none());
}

#[test]
fn set_overwrites_previous_file_contents() {
    let file = NamedTempFile::new().expect("create temp file");
    let mut store = FilePreferenceStore::load(file.path());
    store.set("darkMode", "true").expect("first write");
    store.set("darkMode", "false").expect("second write");

    let content = std::fs::read_to_string(file.path()).expect("read preferences");
    let parsed: BTreeMap<String, String> = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.get("darkMode").map(String::as_str), Some("false"));
}

#[test]
#[cfg(unix)]
fn saved_file_has_owner_only_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let path = temp_dir.path().join("preferences.json");
    let mut store = FilePreferenceStore::load(&path);
    store.set("darkMode", "true").expect("save");

    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
    assert_eq!(mode, 0o600, "preferences file should have 0600 permissions");
}
