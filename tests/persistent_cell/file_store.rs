//! File Store Tests
//!
//! Cells over a JSON file store: values survive reopening the store and
//! re-keying is reflected on disk.

use crate::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn open(dir: &TempDir) -> FileStore {
    FileStore::open(dir.path().join("cells.json")).unwrap()
}

#[test]
fn test_value_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = open(&dir);
        let mut cell: PersistentCell<Name, _> =
            PersistentCell::create(&store, "name", Name::new("123")).unwrap();
        cell.set(Name::new("bob")).unwrap();
    }

    let store = open(&dir);
    let cell: PersistentCell<Name, _> =
        PersistentCell::create(&store, "name", Name::new("123")).unwrap();
    assert_eq!(cell.get(), &Name::new("bob"));
}

#[test]
fn test_rekey_is_reflected_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    let mut cell: PersistentCell<Name, _> =
        PersistentCell::create(&store, "draft", Name::new("x")).unwrap();
    cell.sync().unwrap();
    cell.rekey("final").unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    let on_disk: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(on_disk, json!({"final": r#"{"a":"x"}"#}));
}

#[test]
fn test_cells_share_store_through_arc() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(open(&dir));

    let mut name: PersistentCell<Name, _> =
        PersistentCell::create(Arc::clone(&store), "name", Name::new("a")).unwrap();
    let mut theme: PersistentCell<String, _> =
        PersistentCell::create(Arc::clone(&store), "theme", "light".to_string()).unwrap();

    name.sync().unwrap();
    theme.set("dark".to_string()).unwrap();

    let reopened = open(&dir);
    assert_eq!(reopened.keys(), vec!["name", "theme"]);
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("\"dark\""));
}

#[test]
fn test_strict_durability_with_msgpack() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("strict.json");
    let options = StoreOptions::new().durability(DurabilityMode::Strict);

    {
        let store = FileStore::open_with(&path, options.clone()).unwrap();
        let mut cell: PersistentCell<Vec<u32>, _, _> =
            CellBuilder::with_initial(&store, "ids", Vec::new())
                .codec(MsgpackCodec::new())
                .open()
                .unwrap();
        cell.update(|ids| {
            let mut ids = ids.clone();
            ids.extend([3, 1, 4]);
            ids
        })
        .unwrap();
    }

    let store = FileStore::open_with(&path, options).unwrap();
    let cell: PersistentCell<Vec<u32>, _, _> = CellBuilder::with_initial(&store, "ids", Vec::new())
        .codec(MsgpackCodec::new())
        .open()
        .unwrap();
    assert_eq!(cell.get(), &vec![3, 1, 4]);
}

#[test]
fn test_corrupt_store_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cells.json");
    fs::write(&path, "not json at all").unwrap();

    let err: Error = FileStore::open(&path).unwrap_err().into();
    assert!(matches!(err, Error::Storage(StorageError::Corruption(_))));
}
