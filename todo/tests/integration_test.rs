//! Integration tests for the to-do model with real and in-memory storage
//!
//! These tests run the full flow: model → store → reducer → effect →
//! persistence adapter → key-value substrate, and back on reload.

#![allow(clippy::unwrap_used)]

use checklist_core::storage::KeyValueStore;
use checklist_runtime::FileKeyValueStore;
use checklist_testing::{InMemoryKeyValueStore, SequentialIdGenerator, test_clock};
use checklist_todo::{
    ItemId, ItemStore, STORAGE_KEY, TimestampIdGenerator, TodoEnvironment, TodoError, TodoModel,
    VisibilityFilter,
};
use std::collections::HashSet;
use std::sync::Arc;

fn in_memory_model(storage: &Arc<InMemoryKeyValueStore>) -> TodoModel {
    TodoModel::load(TodoEnvironment::new(
        Arc::new(SequentialIdGenerator::new("item")),
        Arc::new(ItemStore::new(Arc::clone(storage))),
    ))
}

fn file_model(path: &std::path::Path) -> TodoModel {
    TodoModel::load(TodoEnvironment::new(
        Arc::new(TimestampIdGenerator::new(test_clock())),
        Arc::new(ItemStore::new(FileKeyValueStore::new(path))),
    ))
}

#[test]
fn test_buy_milk_scenario() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let mut model = in_memory_model(&storage);

    model.set_pending_input("buy milk");
    model.add_item().unwrap();

    let items = model.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].content(), "buy milk");
    assert!(!items[0].is_done());
    assert_eq!(model.pending_input(), "");

    let id = items[0].id().clone();
    model.toggle_item(&id).unwrap();
    assert!(model.item(&id).unwrap().is_done());

    model.set_filter(VisibilityFilter::Done);
    let visible = model.visible_items();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id(), &id);

    model.set_filter(VisibilityFilter::Active);
    assert!(model.visible_items().is_empty());
}

#[test]
fn test_reload_restores_items_but_not_view_state() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let mut model = in_memory_model(&storage);
    model.set_pending_input("first");
    model.add_item().unwrap();
    model.set_pending_input("second");
    model.add_item().unwrap();
    let first = model.items()[0].id().clone();
    model.toggle_item(&first).unwrap();
    model.set_filter(VisibilityFilter::Done);
    model.set_pending_input("half typed");

    let reloaded = in_memory_model(&storage);

    assert_eq!(reloaded.items(), model.items());
    assert_eq!(reloaded.filter(), VisibilityFilter::All);
    assert_eq!(reloaded.pending_input(), "");
}

#[test]
fn test_corrupt_storage_starts_empty_and_recovers() {
    let storage = Arc::new(InMemoryKeyValueStore::with_entry(STORAGE_KEY, "[{oops"));
    let mut model = in_memory_model(&storage);
    assert!(model.is_empty());

    model.set_pending_input("fresh start");
    model.add_item().unwrap();

    let blob = storage.get(STORAGE_KEY).unwrap().unwrap();
    assert!(blob.contains("fresh start"));
    assert_eq!(in_memory_model(&storage).len(), 1);
}

#[test]
fn test_corrupt_file_is_replaced_on_next_change() {
    for garbage in ["not json", r#"{"todo-list":[1,2]}"#] {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checklist.json");
        std::fs::write(&path, garbage).unwrap();

        let mut model = file_model(&path);
        assert!(model.is_empty());
        model.set_pending_input("buy milk");
        model.add_item().unwrap();

        let reloaded = file_model(&path);
        assert_eq!(reloaded.items(), model.items());
        assert_eq!(reloaded.items()[0].content(), "buy milk");
    }
}

#[test]
fn test_file_storage_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checklist.json");

    let mut model = file_model(&path);
    for text in ["Buy milk", "Write documentation", "Deploy to production"] {
        model.set_pending_input(text);
        model.add_item().unwrap();
    }
    let second = model.items()[1].id().clone();
    model.toggle_item(&second).unwrap();

    let restarted = file_model(&path);

    assert_eq!(restarted.items(), model.items());
    assert_eq!(restarted.done_count(), 1);
    let ids: HashSet<ItemId> = restarted.items().iter().map(|i| i.id().clone()).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_file_storage_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checklist.json");
    let mut model = file_model(&path);
    model.set_pending_input("buy milk");
    model.add_item().unwrap();

    let blob = FileKeyValueStore::new(&path).get(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["content"], "buy milk");
    assert_eq!(entries[0]["isDone"], false);
    assert!(entries[0]["id"].as_str().unwrap().ends_with("_1735689600000"));
}

#[test]
fn test_errors_are_typed_and_non_fatal() {
    let storage = Arc::new(InMemoryKeyValueStore::new());
    let mut model = in_memory_model(&storage);

    assert_eq!(model.add_item(), Err(TodoError::EmptyInput));
    assert_eq!(
        model.toggle_item(&ItemId::new("ghost")),
        Err(TodoError::NotFound(ItemId::new("ghost")))
    );

    model.set_pending_input("still works");
    assert!(model.add_item().is_ok());
    assert_eq!(model.len(), 1);
}
