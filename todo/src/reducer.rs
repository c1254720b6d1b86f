//! Reducer logic for the to-do list.
//!
//! Validates intents, updates state, and describes the save that must follow
//! every change to the item list.

use crate::error::TodoError;
use crate::item_store::PersistenceAdapter;
use crate::types::{Item, ItemId, TodoAction, TodoState};
use checklist_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};
use std::sync::Arc;

/// How many times a colliding id is re-minted before giving up
const MAX_ID_ATTEMPTS: usize = 8;

/// Environment dependencies for the to-do reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Mints ids for new items
    pub ids: Arc<dyn IdGenerator>,
    /// Durable record of the item list
    pub persistence: Arc<dyn PersistenceAdapter>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>, persistence: Arc<dyn PersistenceAdapter>) -> Self {
        Self { ids, persistence }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the to-do list
#[derive(Clone, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Mints an id not yet used by any item
    fn mint_id(state: &TodoState, env: &TodoEnvironment) -> Result<ItemId, TodoError> {
        let mut id = ItemId::new(env.ids.next_id());
        for _ in 1..MAX_ID_ATTEMPTS {
            if !state.exists(&id) {
                return Ok(id);
            }
            tracing::warn!(id = %id, "Minted id is already taken, retrying");
            id = ItemId::new(env.ids.next_id());
        }

        if state.exists(&id) {
            return Err(TodoError::DuplicateId(id));
        }
        Ok(id)
    }

    /// Effect saving a copy of the current items
    fn persist(state: &TodoState, env: &TodoEnvironment) -> Effect<TodoAction> {
        let persistence = Arc::clone(&env.persistence);
        let snapshot = state.items.clone();

        Effect::run(move || {
            if let Err(error) = persistence.save(&snapshot) {
                tracing::error!(error = %error, count = snapshot.len(), "Failed to persist items");
            }
            None
        })
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error> {
        match action {
            TodoAction::SetPendingInput { text } => {
                state.pending_input = text;
                Ok(SmallVec::new())
            },

            TodoAction::AddItem => {
                if state.pending_input.trim().is_empty() {
                    return Err(TodoError::EmptyInput);
                }

                let id = Self::mint_id(state, env)?;
                let content = std::mem::take(&mut state.pending_input);
                tracing::debug!(id = %id, "Adding item");
                state.items.push(Item::new(id, content));

                Ok(smallvec![Self::persist(state, env)])
            },

            TodoAction::ToggleItem { id } => {
                let Some(item) = state.items.iter_mut().find(|item| *item.id() == id) else {
                    return Err(TodoError::NotFound(id));
                };
                item.toggle();
                tracing::debug!(id = %id, done = item.is_done(), "Toggled item");

                Ok(smallvec![Self::persist(state, env)])
            },

            TodoAction::SetFilter { filter } => {
                state.filter = filter;
                Ok(SmallVec::new())
            },
        }
    }
}
