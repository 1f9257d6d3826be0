//! Re-key Tests
//!
//! Moving a cell to another key removes the old entry before writing the new
//! one, so a cell leaves at most one entry behind.

use crate::*;

#[test]
fn test_rekey_removes_old_entry() {
    let store = MemoryStore::new();
    let mut cell: PersistentCell<Name, _> =
        PersistentCell::create(&store, "a", Name::new("x")).unwrap();
    cell.sync().unwrap();
    assert!(store.contains_key("a"));

    cell.rekey("b").unwrap();
    assert!(!store.contains_key("a"));
    assert_eq!(stored_json(&store, "b"), Some(json!({"a": "x"})));
}

#[test]
fn test_write_after_rekey_uses_value_at_write_time() {
    let store = MemoryStore::new();
    let mut cell: PersistentCell<Name, _> =
        PersistentCell::create(&store, "a", Name::new("x")).unwrap();
    cell.sync().unwrap();

    cell.rekey("b").unwrap();
    cell.set(Name::new("y")).unwrap();

    assert_eq!(store.keys(), vec!["b"]);
    assert_eq!(stored_json(&store, "b"), Some(json!({"a": "y"})));
}

#[test]
fn test_rekey_order_is_remove_then_set() {
    let store = RecordingStore::new();
    let mut cell: PersistentCell<Name, _> =
        PersistentCell::create(&store, "a", Name::new("x")).unwrap();
    store.clear_ops();

    cell.rekey("b").unwrap();
    assert_eq!(
        store.ops(),
        vec![
            Op::Remove("a".into()),
            Op::Set("b".into(), r#"{"a":"x"}"#.into()),
        ]
    );
}

#[test]
fn test_repeated_rekey_leaves_single_entry() {
    let store = MemoryStore::new();
    let mut cell: PersistentCell<u32, _> = PersistentCell::create(&store, "k0", 0).unwrap();
    for i in 1..10 {
        cell.rekey(format!("k{}", i)).unwrap();
        cell.update(|n| n + 1).unwrap();
    }
    assert_eq!(store.keys(), vec!["k9"]);
    assert_eq!(store.get("k9").unwrap().as_deref(), Some("9"));
}

#[test]
fn test_rekey_only_removes_own_previous_key() {
    let store = MemoryStore::new();
    store.set("other", "\"untouched\"").unwrap();
    let mut cell: PersistentCell<String, _> =
        PersistentCell::create(&store, "a", "mine".to_string()).unwrap();

    cell.rekey("b").unwrap();
    assert_eq!(store.get("other").unwrap().as_deref(), Some("\"untouched\""));
    assert_eq!(store.keys(), vec!["b", "other"]);
}

#[test]
fn test_failed_remove_keeps_old_key_for_next_sync() {
    let store = RecordingStore::new();
    let mut cell: PersistentCell<Name, _> =
        PersistentCell::create(&store, "a", Name::new("x")).unwrap();
    cell.sync().unwrap();

    store.fail_removes(true);
    let err = cell.rekey("b").unwrap_err();
    assert!(err.is_storage());
    assert_eq!(cell.key(), "b");
    assert!(store.inner().contains_key("a"));
    assert!(!store.inner().contains_key("b"));

    store.fail_removes(false);
    cell.sync().unwrap();
    assert_eq!(store.inner().keys(), vec!["b"]);
}

#[test]
fn test_failed_set_after_remove_leaves_both_keys_empty() {
    let store = RecordingStore::new();
    let mut cell: PersistentCell<Name, _> =
        PersistentCell::create(&store, "a", Name::new("x")).unwrap();
    cell.sync().unwrap();

    store.fail_sets(true);
    assert!(cell.rekey("b").unwrap_err().is_storage());
    assert!(store.inner().is_empty());

    store.fail_sets(false);
    store.clear_ops();
    cell.sync().unwrap();
    // The old key is already gone; only the new key is written
    assert_eq!(store.ops(), vec![Op::Set("b".into(), r#"{"a":"x"}"#.into())]);
}
