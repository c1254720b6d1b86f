//! # Checklist Testing
//!
//! Testing utilities and helpers for the Checklist architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - An in-memory key-value substrate
//! - A Given-When-Then harness for reducers
//!
//! ## Example
//!
//! ```
//! use checklist_core::environment::IdGenerator;
//! use checklist_core::storage::KeyValueStore;
//! use checklist_testing::{InMemoryKeyValueStore, SequentialIdGenerator};
//!
//! let ids = SequentialIdGenerator::new("item");
//! assert_eq!(ids.next_id(), "item-1");
//!
//! let storage = InMemoryKeyValueStore::new();
//! storage.set("key", "value").ok();
//! assert_eq!(storage.write_count(), 1);
//! ```

use checklist_core::environment::{Clock, IdGenerator};
use checklist_core::storage::{KeyValueStore, StorageError};
use chrono::{DateTime, Utc};


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, KeyValueStore, StorageError, Utc};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
    use std::sync::{Mutex, PoisonError};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use checklist_testing::mocks::FixedClock;
    /// use checklist_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::from_timestamp(1_735_689_600, 0).unwrap_or_default())
    }

    /// Predictable ids: `<prefix>-1`, `<prefix>-2`, ...
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        prefix: String,
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Start a sequence at 1
        #[must_use]
        pub fn new(prefix: impl Into<String>) -> Self {
            Self {
                prefix: prefix.into(),
                next: AtomicU64::new(1),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> String {
            let n = self.next.fetch_add(1, Ordering::Relaxed);
            format!("{}-{n}", self.prefix)
        }
    }

    /// Generator that always returns the same id, for collision tests
    #[derive(Debug, Clone)]
    pub struct ConstantIdGenerator(pub String);

    impl IdGenerator for ConstantIdGenerator {
        fn next_id(&self) -> String {
            self.0.clone()
        }
    }

    /// In-memory key-value substrate
    ///
    /// Counts successful writes and can be switched into a failing mode to
    /// exercise error paths.
    #[derive(Debug, Default)]
    pub struct InMemoryKeyValueStore {
        entries: Mutex<HashMap<String, String>>,
        writes: AtomicUsize,
        fail_writes: AtomicBool,
    }

    impl InMemoryKeyValueStore {
        /// Empty store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Store pre-seeded with one entry (not counted as a write)
        #[must_use]
        pub fn with_entry(key: &str, value: &str) -> Self {
            let store = Self::new();
            store.lock().insert(key.to_string(), value.to_string());
            store
        }

        /// Number of successful `set`/`remove` calls
        #[must_use]
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        /// Make subsequent writes fail with an I/O error
        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
            self.entries.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn check_writable(&self) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Io(std::io::Error::other(
                    "simulated write failure",
                )));
            }
            Ok(())
        }
    }

    impl KeyValueStore for InMemoryKeyValueStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.lock().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.check_writable()?;
            self.lock().insert(key.to_string(), value.to_string());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.check_writable()?;
            self.lock().remove(key);
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}

// Re-export commonly used items
pub use mocks::{
    ConstantIdGenerator, FixedClock, InMemoryKeyValueStore, SequentialIdGenerator, test_clock,
};
pub use reducer_test::{ReducerTest, assertions};
