//! # Checklist Core
//!
//! Core traits and types for the Checklist reducer architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Function `(State, Action, Environment) → Result<Effects, Error>`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O in reducers)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use checklist_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: u32,
//! }
//!
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!     type Error = std::convert::Infallible;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> Result<SmallVec<[Effect<CounterAction>; 4]>, Self::Error> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         Ok(SmallVec::new())
//!     }
//! }
//! ```

pub use smallvec::{SmallVec, smallvec};

/// Key-value substrate abstraction and its errors
pub mod storage;

/// Reducer module - The core trait for business logic
///
/// Reducers are functions: `(State, Action, Environment) → Result<Effects, Error>`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::SmallVec;
    use super::effect::Effect;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Rejection reported back to the caller of `send`
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Typed rejection of an action
        type Error;

        /// Reduce an action into state changes and effects
        ///
        /// This function:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// A rejected action must leave `state` untouched.
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is invalid for the current state.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution), returned from reducers and executed by the Store.
pub mod effect {
    /// Deferred synchronous computation, optionally producing a follow-up action
    pub type Work<Action> = Box<dyn FnOnce() -> Option<Action>>;

    /// Effect type - describes a side effect to be executed
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Arbitrary synchronous computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into the reducer
        Run(Work<Action>),
    }

    // Manual Debug implementation since closures don't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Run(_) => write!(f, "Effect::Run(<closure>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Wrap a closure as an `Effect::Run`
        #[must_use]
        pub fn run<F>(work: F) -> Self
        where
            F: FnOnce() -> Option<Action> + 'static,
        {
            Effect::Run(Box::new(work))
        }

        /// Returns true for `Effect::None`
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall-clock time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Mints opaque identifiers for new entities
    ///
    /// Identifiers only need to be unique within one session; callers that
    /// hold a set of live ids are expected to re-mint on collision.
    pub trait IdGenerator: Send + Sync {
        /// Produce a fresh identifier
        fn next_id(&self) -> String;
    }
}

#[cfg(test)]
mod tests {
    use super::effect::Effect;
    use super::environment::{Clock, SystemClock};

    #[test]
    fn effect_debug_hides_closure() {
        let effect: Effect<u8> = Effect::run(|| Some(1));
        assert_eq!(format!("{effect:?}"), "Effect::Run(<closure>)");
        assert_eq!(format!("{:?}", Effect::<u8>::None), "Effect::None");
    }

    #[test]
    fn effect_run_yields_follow_up() {
        let Effect::Run(work) = Effect::run(|| Some(7_u8)) else {
            unreachable!("Effect::run always builds Effect::Run");
        };
        assert_eq!(work(), Some(7));
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
