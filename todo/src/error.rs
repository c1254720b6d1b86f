//! Errors reported by to-do operations.

use crate::types::ItemId;
use checklist_core::storage::StorageError;
use thiserror::Error;

/// Rejection of a to-do action
///
/// None of these change state; the caller decides how to surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// The pending input is empty or whitespace only
    #[error("Enter some text before adding an item")]
    EmptyInput,

    /// No item has this id
    #[error("Item {0} not found")]
    NotFound(ItemId),

    /// The id generator kept returning ids that are already taken
    #[error("Could not mint a fresh id, last attempt was {0}")]
    DuplicateId(ItemId),
}

/// Failure to write the item list
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The items could not be encoded
    #[error("Failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The substrate rejected the write
    #[error(transparent)]
    Storage(#[from] StorageError),
}
