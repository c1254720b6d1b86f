//! Single-list to-do model with durable key-value persistence.
//!
//! This crate holds an ordered list of items, a visibility filter and the
//! text being typed. Every change to the items is mirrored synchronously into
//! a [`PersistenceAdapter`], and the list is reloaded from it on startup.
//!
//! - Domain model (add, toggle, filter)
//! - Intent validation with typed errors
//! - Persistence through an injected adapter over any key-value substrate
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```
//! use checklist_testing::{InMemoryKeyValueStore, SequentialIdGenerator};
//! use checklist_todo::{ItemStore, TodoEnvironment, TodoModel, VisibilityFilter};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(
//!     Arc::new(SequentialIdGenerator::new("item")),
//!     Arc::new(ItemStore::new(InMemoryKeyValueStore::new())),
//! );
//! let mut model = TodoModel::load(env);
//!
//! model.set_pending_input("Buy milk");
//! model.add_item()?;
//!
//! let id = model.items()[0].id().clone();
//! model.toggle_item(&id)?;
//!
//! model.set_filter(VisibilityFilter::Active);
//! assert!(model.visible_items().is_empty());
//! # Ok(())
//! # }
//! # assert!(example().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod item_store;
pub mod model;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{PersistenceError, TodoError};
pub use id::TimestampIdGenerator;
pub use item_store::{ItemStore, PersistenceAdapter, STORAGE_KEY};
pub use model::TodoModel;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{
    EMPTY_VIEW_LABEL, Item, ItemId, TodoAction, TodoState, VisibilityFilter, VisibleRow,
};
