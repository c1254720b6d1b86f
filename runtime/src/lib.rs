//! # Checklist Runtime
//!
//! Runtime implementation for the Checklist architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling, plus a file-backed key-value substrate.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, runs the reducer, executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back to the reducer
//! - **`FileKeyValueStore`**: Durable string map kept in one JSON file
//!
//! Everything here is synchronous. `send` runs the reducer and every effect it
//! returns to completion before returning, so effects are never observed
//! half-applied between two calls.
//!
//! ## Example
//!
//! ```ignore
//! use checklist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

/// File-backed key-value substrate
pub mod file_store;

pub use file_store::FileKeyValueStore;
pub use store::Store;

/// Store module - The runtime for reducers
pub mod store {
    use checklist_core::{effect::Effect, reducer::Reducer};
    use std::fmt::Display;

    /// The Store - runtime coordinator for a reducer
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        R::Error: Display,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub const fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
            }
        }

        /// Send an action to the store
        ///
        /// Runs the reducer, then executes every returned effect in order.
        /// Actions produced by effects are fed back through `send` before this
        /// call returns.
        ///
        /// # Errors
        ///
        /// Returns the reducer's error if it rejected `action`. Rejections of
        /// follow-up actions produced by effects are logged, not returned.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), R::Error> {
            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let effects = {
                let span = tracing::debug_span!("reducer_execution");
                let _enter = span.enter();

                match self
                    .reducer
                    .reduce(&mut self.state, action, &self.environment)
                {
                    Ok(effects) => effects,
                    Err(error) => {
                        tracing::debug!(error = %error, "Reducer rejected action");
                        metrics::counter!("store.actions.rejected").increment(1);
                        return Err(error);
                    },
                }
            };

            tracing::trace!("Reducer completed, returned {} effects", effects.len());
            for effect in effects {
                self.execute_effect(effect);
            }
            tracing::debug!("Action processing completed");

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let item_count = store.state(|s| s.items.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        fn execute_effect(&mut self, effect: Effect<A>) {
            match effect {
                Effect::None => {
                    tracing::trace!("Executing Effect::None (no-op)");
                    metrics::counter!("store.effects.executed", "type" => "none").increment(1);
                },
                Effect::Run(work) => {
                    tracing::trace!("Executing Effect::Run");
                    metrics::counter!("store.effects.executed", "type" => "run").increment(1);

                    if let Some(action) = work() {
                        tracing::trace!("Effect::Run produced an action, sending to store");
                        if let Err(error) = self.send(action) {
                            tracing::warn!(error = %error, "Follow-up action was rejected");
                        }
                    } else {
                        tracing::trace!("Effect::Run completed with no action");
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checklist_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    struct TestState {
        value: i32,
    }

    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
        ProduceEffect,
        ProduceRejectedFollowUp,
        Record(Rc<Cell<i32>>),
    }

    #[derive(Debug, thiserror::Error)]
    enum TestError {
        #[error("value cannot go below zero")]
        BelowZero,
    }

    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();
        type Error = TestError;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    Ok(smallvec![Effect::None])
                },
                TestAction::Decrement => {
                    if state.value == 0 {
                        return Err(TestError::BelowZero);
                    }
                    state.value -= 1;
                    Ok(smallvec![Effect::None])
                },
                TestAction::NoOp => Ok(SmallVec::new()),
                TestAction::ProduceEffect => {
                    Ok(smallvec![Effect::run(|| Some(TestAction::Increment))])
                },
                TestAction::ProduceRejectedFollowUp => {
                    Ok(smallvec![Effect::run(|| Some(TestAction::Decrement))])
                },
                TestAction::Record(cell) => {
                    let observed = state.value;
                    Ok(smallvec![Effect::run(move || {
                        cell.set(observed);
                        None
                    })])
                },
            }
        }
    }

    #[test]
    fn test_store_send_updates_state() {
        let mut store = Store::new(TestState::default(), TestReducer, ());

        assert!(store.send(TestAction::Increment).is_ok());
        assert!(store.send(TestAction::Increment).is_ok());
        assert!(store.send(TestAction::NoOp).is_ok());

        assert_eq!(store.state(|s| s.value), 2);
    }

    #[test]
    fn test_rejected_action_is_returned_and_state_kept() {
        let mut store = Store::new(TestState::default(), TestReducer, ());

        let result = store.send(TestAction::Decrement);

        assert!(matches!(result, Err(TestError::BelowZero)));
        assert_eq!(store.state(|s| s.value), 0);
    }

    #[test]
    fn test_effect_feedback_runs_before_send_returns() {
        let mut store = Store::new(TestState::default(), TestReducer, ());

        assert!(store.send(TestAction::ProduceEffect).is_ok());

        assert_eq!(store.state(|s| s.value), 1);
    }

    #[test]
    fn test_rejected_follow_up_does_not_fail_original_send() {
        let mut store = Store::new(TestState::default(), TestReducer, ());

        assert!(store.send(TestAction::ProduceRejectedFollowUp).is_ok());
        assert_eq!(store.state(|s| s.value), 0);
    }

    #[test]
    fn test_effect_runs_after_state_mutation() {
        let mut store = Store::new(TestState { value: 41 }, TestReducer, ());
        let seen = Rc::new(Cell::new(0));

        assert!(store.send(TestAction::Increment).is_ok());
        assert!(store.send(TestAction::Record(Rc::clone(&seen))).is_ok());

        assert_eq!(seen.get(), 42);
    }
}
