//! End-to-end behaviour of the entry store over a JSON settings file.

use filetypes_store::{
    ConfigBackend, DEFAULT_CONFIG_KEY, EntryForm, EntryStore, FileTypeError, JsonFileConfig,
    ReferenceTable, SubmitAction,
};
use std::fs;
use tempfile::TempDir;

// Dummy types that never exist among the built-in ones.
const ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("mobi8", "application/x-mobipocket-ebook", "mobi", "Kindle ebook"),
    ("daisy8", "audio/mpeg3", "daisy", "Audio book"),
    ("ggb8", "application/vnd.geogebra.file", "ggb", "GeoGebra data"),
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn open(temp_dir: &TempDir) -> EntryStore<JsonFileConfig, ReferenceTable> {
    EntryStore::new(
        JsonFileConfig::new(temp_dir.path().join("settings.json")),
        ReferenceTable::builtin(),
    )
}

fn add_all(store: &EntryStore<JsonFileConfig, ReferenceTable>) {
    for (extension, mimetype, icon, description) in ENTRIES {
        store.add(extension, mimetype, icon, description).unwrap();
    }
}

#[test]
fn test_filetypes_editing() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    add_all(&store);
    let raw = store.backend().get(DEFAULT_CONFIG_KEY).unwrap().unwrap();
    for (extension, ..) in ENTRIES {
        assert!(raw.contains(extension), "{} should be stored", extension);
    }

    store.delete("mobi8").unwrap();
    let raw = store.backend().get(DEFAULT_CONFIG_KEY).unwrap().unwrap();
    assert!(!raw.contains("mobi8"));

    store
        .update("daisy8", "war", "application/x-zip", "war", "Web application archive")
        .unwrap();
    let raw = store.backend().get(DEFAULT_CONFIG_KEY).unwrap().unwrap();
    assert!(!raw.contains("daisy8"));
    assert!(raw.contains("war"));

    let extensions: Vec<_> = store
        .list()
        .unwrap()
        .extensions()
        .map(str::to_string)
        .collect();
    assert_eq!(extensions, vec!["war", "ggb8"]);
}

#[test]
fn test_get_filetypes() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);
    add_all(&store);

    let types = store.list().unwrap();
    assert_eq!(types.len(), ENTRIES.len());

    for (extension, mimetype, icon, description) in ENTRIES {
        assert!(types.contains(extension));
        let entry = store.get(extension).unwrap();
        assert_eq!(entry.extension, *extension);
        assert_eq!(entry.mimetype, *mimetype);
        assert_eq!(entry.icon, *icon);
        assert_eq!(entry.description, *description);
    }
}

#[test]
fn test_is_filetype_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    assert!(store.is_invalid("pdf", None));
    assert!(!store.is_invalid("mobi8", None));

    store.add("mobi8", "application/x-mobipocket-ebook", "mobi", "Kindle ebook").unwrap();

    // Only the built-in table is consulted here.
    assert!(!store.is_invalid("mobi8", None));
    assert!(!store.is_invalid("mobi8", Some("mobi8")));
    // The uniqueness validator also sees custom entries.
    assert!(store.validate_unique("mobi8", None).is_err());
    assert!(store.validate_unique("mobi8", Some("mobi8")).is_ok());
}

#[test]
fn test_delete_to_empty_removes_key_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    store.add("zzz99", "x/zzz", "unknown", "Z").unwrap();
    store.delete("zzz99").unwrap();

    let content = fs::read_to_string(temp_dir.path().join("settings.json")).unwrap();
    let values: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(values.get(DEFAULT_CONFIG_KEY).is_none());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_state_is_shared_between_handles() {
    let temp_dir = TempDir::new().unwrap();
    add_all(&open(&temp_dir));

    let reopened = open(&temp_dir);
    assert_eq!(reopened.list().unwrap().len(), ENTRIES.len());
    assert_eq!(reopened.describe("audio/mpeg3"), "Audio book");
}

#[test]
fn test_submit_flow_matches_form() {
    let temp_dir = TempDir::new().unwrap();
    let store = open(&temp_dir);

    let form = EntryForm::add("mobi8", "application/x-mobipocket-ebook", "mobi", "Kindle ebook");
    assert_eq!(store.submit(&form, None).unwrap(), SubmitAction::Added);

    // Adding the same extension again is refused before anything is written.
    let err = store.submit(&form, None).unwrap_err();
    assert!(matches!(err, FileTypeError::Validation { .. }));
    assert_eq!(store.list().unwrap().len(), 1);

    let form = EntryForm::edit(
        "mobi8",
        "azw8",
        "application/vnd.amazon.ebook",
        "mobi",
        "Kindle; AZW",
    );
    assert_eq!(store.submit(&form, None).unwrap(), SubmitAction::Updated);

    let entry = store.get("azw8").unwrap();
    assert_eq!(entry.description, "Kindle; AZW");
    assert!(matches!(
        store.get("mobi8"),
        Err(FileTypeError::NotFound { .. })
    ));
}
