//! Default Value Tests
//!
//! - literal vs producer defaults
//! - producers run at most once, and never when an entry exists
//! - presence rule for empty stored strings

use crate::*;
use std::cell::Cell;
use std::rc::Rc;

fn counting_producer(calls: &Rc<Cell<u32>>, value: &'static str) -> impl FnOnce() -> Name {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        Name::new(value)
    }
}

#[test]
fn test_producer_not_called_when_entry_exists() {
    let store = MemoryStore::new();
    store.set("name", r#"{"a":"stored"}"#).unwrap();

    let first_calls = Rc::new(Cell::new(0));
    let second_calls = Rc::new(Cell::new(0));

    let first: PersistentCell<Name, _> = PersistentCell::create(
        &store,
        "name",
        Initial::lazy(counting_producer(&first_calls, "one")),
    )
    .unwrap();
    let second: PersistentCell<Name, _> = PersistentCell::create(
        &store,
        "name",
        Initial::lazy(counting_producer(&second_calls, "two")),
    )
    .unwrap();

    assert_eq!(first.get(), &Name::new("stored"));
    assert_eq!(second.get(), &Name::new("stored"));
    assert_eq!(first_calls.get(), 0);
    assert_eq!(second_calls.get(), 0);
}

#[test]
fn test_producer_called_once_per_construction() {
    let store = MemoryStore::new();
    let calls = Rc::new(Cell::new(0));

    let mut cell: PersistentCell<Name, _> = PersistentCell::builder(&store, "name")
        .default_with(counting_producer(&calls, "made"))
        .open()
        .unwrap();
    assert_eq!(calls.get(), 1);

    for _ in 0..5 {
        assert_eq!(cell.get(), &Name::new("made"));
    }
    cell.update(|prev| Name::new(&prev.a.to_uppercase())).unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(cell.get(), &Name::new("MADE"));
}

#[test]
fn test_missing_default_is_type_default() {
    let store = MemoryStore::new();
    let cell: PersistentCell<String, _> = PersistentCell::builder(&store, "name").open().unwrap();
    assert_eq!(cell.get(), "");
}

#[test]
fn test_empty_entry_with_non_empty_presence_falls_back() {
    let store = MemoryStore::new();
    store.set("name", "").unwrap();

    let calls = Rc::new(Cell::new(0));
    let cell: PersistentCell<Name, _> = PersistentCell::builder(&store, "name")
        .default_with(counting_producer(&calls, "fallback"))
        .presence(Presence::NonEmpty)
        .open()
        .unwrap();
    assert_eq!(cell.get(), &Name::new("fallback"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_empty_entry_with_exists_presence_is_decoded() {
    let store = MemoryStore::new();
    store.set("token", "").unwrap();

    let cell: PersistentCell<String, _, _> = CellBuilder::with_initial(&store, "token", "default".to_string())
        .codec(RawCodec)
        .open()
        .unwrap();
    assert_eq!(cell.get(), "");
}

#[test]
fn test_zero_string_is_present_under_both_rules() {
    let store = MemoryStore::new();
    store.set("count", "0").unwrap();

    for presence in [Presence::Exists, Presence::NonEmpty] {
        let cell: PersistentCell<u32, _> = CellBuilder::with_initial(&store, "count", 7u32)
            .presence(presence)
            .open()
            .unwrap();
        assert_eq!(*cell.get(), 0);
    }
}
