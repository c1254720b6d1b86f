//! Key-value substrate trait and related types.
//!
//! A key-value store is the durable record behind a persistence adapter: a
//! flat map from string keys to string values with get/set/remove. Nothing
//! above this trait knows whether values live in a file, a browser, or memory.
//!
//! # Implementations
//!
//! - `FileKeyValueStore` (in `checklist-runtime`): JSON file on disk
//! - `InMemoryKeyValueStore` (in `checklist-testing`): fast, deterministic testing
//!
//! # Example
//!
//! ```
//! use checklist_core::storage::{KeyValueStore, StorageError};
//!
//! fn remember<K: KeyValueStore>(store: &K) -> Result<Option<String>, StorageError> {
//!     store.set("greeting", "hello")?;
//!     store.get("greeting")
//! }
//! ```

use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur during key-value operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing medium exists but its contents are not a valid key-value map.
    ///
    /// Distinct from a corrupt *value*: values are opaque strings at this layer.
    #[error("Storage is corrupt: {0}")]
    Corrupt(String),
}

/// A flat, string-keyed durable map.
///
/// Each call is complete when it returns; a `set` is atomic only to the extent
/// the implementation's medium guarantees.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Arc<K> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
