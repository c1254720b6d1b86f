//! The to-do model: the surface a view talks to.
//!
//! `TodoModel` owns a [`Store`] running [`TodoReducer`] and exposes one method
//! per user intent plus read accessors. Reads hand out owned copies, so a view
//! never holds a reference into the backing list; every change goes through
//! an intent method.

use crate::error::TodoError;
use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{Item, ItemId, TodoAction, TodoState, VisibilityFilter, VisibleRow};
use checklist_runtime::Store;

type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// In-memory to-do list mirrored into its persistence adapter
pub struct TodoModel {
    store: TodoStore,
}

impl TodoModel {
    /// Bootstraps the model from whatever the persistence adapter holds
    ///
    /// Loading never mints ids and never fails; unusable data starts an empty list.
    #[must_use]
    pub fn load(env: TodoEnvironment) -> Self {
        let items = env.persistence.load();
        tracing::info!(count = items.len(), "Todo model loaded");
        Self {
            store: Store::new(TodoState::with_items(items), TodoReducer::new(), env),
        }
    }

    /// Replaces the pending input text
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.send_infallible(TodoAction::SetPendingInput { text: text.into() });
    }

    /// Adds the pending input as a new item and clears the input
    ///
    /// # Errors
    ///
    /// - [`TodoError::EmptyInput`] if the pending input is blank; nothing changes.
    /// - [`TodoError::DuplicateId`] if no fresh id could be minted.
    pub fn add_item(&mut self) -> Result<(), TodoError> {
        self.store.send(TodoAction::AddItem)
    }

    /// Flips the done flag of the item with `id`
    ///
    /// Works regardless of whether the item is currently visible.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::NotFound`] if no item has `id`.
    pub fn toggle_item(&mut self, id: &ItemId) -> Result<(), TodoError> {
        self.store.send(TodoAction::ToggleItem { id: id.clone() })
    }

    /// Changes which items are visible
    pub fn set_filter(&mut self, filter: VisibilityFilter) {
        self.send_infallible(TodoAction::SetFilter { filter });
    }

    /// Items passing the current filter, in list order
    #[must_use]
    pub fn visible_items(&self) -> Vec<Item> {
        self.store.state(TodoState::visible_items)
    }

    /// Numbered rows of the visible list
    #[must_use]
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        self.store.state(TodoState::visible_rows)
    }

    /// All items, in insertion order
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.store.state(|s| s.items.clone())
    }

    /// Item with `id`, if any
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<Item> {
        self.store.state(|s| s.get(id).cloned())
    }

    /// Text typed but not yet added
    #[must_use]
    pub fn pending_input(&self) -> String {
        self.store.state(|s| s.pending_input.clone())
    }

    /// Active filter
    #[must_use]
    pub fn filter(&self) -> VisibilityFilter {
        self.store.state(|s| s.filter)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.state(TodoState::count)
    }

    /// True when there are no items at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of items not yet done
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.store.state(TodoState::active_count)
    }

    /// Number of done items
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.store.state(TodoState::done_count)
    }

    /// Copy of the whole state
    #[must_use]
    pub fn snapshot(&self) -> TodoState {
        self.store.state(Clone::clone)
    }

    fn send_infallible(&mut self, action: TodoAction) {
        if let Err(error) = self.store.send(action) {
            tracing::warn!(error = %error, "View-state action was rejected");
        }
    }
}

impl std::fmt::Debug for TodoModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoModel")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}
