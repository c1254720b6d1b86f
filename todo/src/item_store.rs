//! Persistence of the item list.
//!
//! The whole list is stored as one JSON array under [`STORAGE_KEY`] and is
//! rewritten in full on every save. Reading never fails: a missing, unreadable
//! or unparsable blob yields an empty list.

use crate::error::PersistenceError;
use crate::types::Item;
use checklist_core::storage::KeyValueStore;
use std::collections::HashSet;

/// Key the item list is stored under
pub const STORAGE_KEY: &str = "todo-list";

/// Capability to load and save the item list
pub trait PersistenceAdapter {
    /// Read the persisted items, empty if there are none or they are unusable
    fn load(&self) -> Vec<Item>;

    /// Replace the persisted items with `items`
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if encoding or the write fails.
    fn save(&self, items: &[Item]) -> Result<(), PersistenceError>;

    /// Forget all persisted items
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the substrate rejects the removal.
    fn clear(&self) -> Result<(), PersistenceError>;
}

/// [`PersistenceAdapter`] over any key-value substrate
#[derive(Debug, Clone)]
pub struct ItemStore<K: KeyValueStore> {
    storage: K,
}

impl<K: KeyValueStore> ItemStore<K> {
    /// Creates an item store writing to `storage`
    #[must_use]
    pub const fn new(storage: K) -> Self {
        Self { storage }
    }

    /// The underlying substrate
    #[must_use]
    pub const fn storage(&self) -> &K {
        &self.storage
    }
}

impl<K: KeyValueStore> PersistenceAdapter for ItemStore<K> {
    fn load(&self) -> Vec<Item> {
        let blob = match self.storage.get(STORAGE_KEY) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!("No persisted items, starting empty");
                return Vec::new();
            },
            Err(error) => {
                tracing::warn!(error = %error, "Could not read persisted items, starting empty");
                return Vec::new();
            },
        };

        match serde_json::from_str::<Vec<Item>>(&blob) {
            Ok(items) => {
                let items = drop_duplicate_ids(items);
                tracing::debug!(count = items.len(), "Loaded persisted items");
                items
            },
            Err(error) => {
                tracing::warn!(error = %error, "Persisted items are unparsable, starting empty");
                Vec::new()
            },
        }
    }

    fn save(&self, items: &[Item]) -> Result<(), PersistenceError> {
        let blob = serde_json::to_string(items)?;
        self.storage.set(STORAGE_KEY, &blob)?;
        tracing::trace!(count = items.len(), "Saved items");
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        self.storage.remove(STORAGE_KEY)?;
        tracing::debug!("Cleared persisted items");
        Ok(())
    }
}

// First occurrence wins; ids must stay unique for toggling by id to be unambiguous.
fn drop_duplicate_ids(items: Vec<Item>) -> Vec<Item> {
    let mut seen = HashSet::with_capacity(items.len());
    let before = items.len();
    let items: Vec<Item> = items
        .into_iter()
        .filter(|item| seen.insert(item.id().clone()))
        .collect();

    if items.len() != before {
        tracing::warn!(
            dropped = before - items.len(),
            "Persisted items contained duplicate ids"
        );
    }
    items
}
