//! Identifier generation for new items.

use checklist_core::environment::{Clock, IdGenerator};

/// Scale applied to the random fraction before formatting
const RANDOM_SCALE: f64 = 9_999_999_999_999.0;

/// Ids of the form `<random fraction × scale>_<milliseconds since epoch>`
///
/// Practically unique within a session, not cryptographically so.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator<C: Clock> {
    clock: C,
}

impl<C: Clock> TimestampIdGenerator<C> {
    /// Creates a generator reading time from `clock`
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for TimestampIdGenerator<C> {
    fn next_id(&self) -> String {
        let fraction: f64 = rand::random();
        format!(
            "{}_{}",
            fraction * RANDOM_SCALE,
            self.clock.now().timestamp_millis()
        )
    }
}
