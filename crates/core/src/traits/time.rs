//! Time abstraction traits for tick-driven timing.
//!
//! Timers never read a global clock. They hold a `TimeSource` so the same task
//! tree can run against a monotonic host clock, a simulation clock, or a
//! controllable mock in tests.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

/// Monotonic time source for timers and control loops.
///
/// Implementations:
/// - `StdTime` (in the `talon_tasks` crate) backed by `std::time::Instant`
/// - `MockTime` for host testing with controllable time
///
/// # Example
///
/// ```
/// use talon_tasks_core::traits::{MockTime, TimeSource};
///
/// fn control_loop<T: TimeSource>(time: &T, last_update: &mut u64) {
///     let now = time.now_us();
///     if time.elapsed_since(*last_update) >= 20_000 { // 50Hz
///         *last_update = now;
///     }
/// }
///
/// let time = MockTime::new();
/// let mut last = 0;
/// control_loop(&time, &mut last);
/// ```
pub trait TimeSource: Clone + Send + Sync {
    /// Returns current time in milliseconds since the source's origin.
    fn now_ms(&self) -> u64;

    /// Returns current time in microseconds since the source's origin.
    fn now_us(&self) -> u64;

    /// Returns elapsed time in microseconds since a reference point.
    ///
    /// Uses saturating subtraction to handle potential overflow.
    fn elapsed_since(&self, reference_us: u64) -> u64 {
        self.now_us().saturating_sub(reference_us)
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock time source with controllable time advancement.
///
/// Clones share the same counter, so a `Timer` built from a clone sees every
/// `advance` made by the test that owns the original.
///
/// # Example
///
/// ```
/// use talon_tasks_core::traits::{MockTime, TimeSource};
///
/// let time = MockTime::new();
/// let observer = time.clone();
///
/// time.advance(1000); // Advance 1ms
/// assert_eq!(observer.now_us(), 1000);
/// assert_eq!(observer.now_ms(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MockTime {
    current_us: Arc<AtomicU64>,
}

impl MockTime {
    /// Creates a new `MockTime` starting at time 0.
    pub fn new() -> Self {
        Self::with_initial(0)
    }

    /// Creates a new `MockTime` starting at the specified time.
    pub fn with_initial(us: u64) -> Self {
        Self {
            current_us: Arc::new(AtomicU64::new(us)),
        }
    }

    /// Sets the current time to an absolute value.
    pub fn set(&self, us: u64) {
        self.current_us.store(us, Ordering::Relaxed);
    }

    /// Advances the current time by the specified amount, saturating at
    /// `u64::MAX`.
    pub fn advance(&self, us: u64) {
        let _ = self
            .current_us
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |now| {
                Some(now.saturating_add(us))
            });
    }

    /// Advances the current time by the specified number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(ms.saturating_mul(1000));
    }
}

impl TimeSource for MockTime {
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }

    fn now_us(&self) -> u64 {
        self.current_us.load(Ordering::Relaxed)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_time_initial_value() {
        let time = MockTime::new();
        assert_eq!(time.now_us(), 0);
        assert_eq!(time.now_ms(), 0);
    }

    #[test]
    fn mock_time_with_initial() {
        let time = MockTime::with_initial(5_000_000);
        assert_eq!(time.now_us(), 5_000_000);
        assert_eq!(time.now_ms(), 5000);
    }

    #[test]
    fn mock_time_advance() {
        let time = MockTime::new();
        time.advance(500_000);
        assert_eq!(time.now_us(), 500_000);

        time.advance_ms(500);
        assert_eq!(time.now_us(), 1_000_000);
        assert_eq!(time.now_ms(), 1000);
    }

    #[test]
    fn mock_time_clones_share_counter() {
        let time = MockTime::new();
        let clone = time.clone();

        time.set(42_000);
        assert_eq!(clone.now_us(), 42_000);

        clone.advance(8_000);
        assert_eq!(time.now_ms(), 50);
    }

    #[test]
    fn mock_time_elapsed_since_saturates() {
        let time = MockTime::new();
        time.set(1_000);

        // Reference is in the "future" - should saturate to 0
        assert_eq!(time.elapsed_since(5_000), 0);
        assert_eq!(time.elapsed_since(400), 600);
    }

    #[test]
    fn mock_time_advance_saturates() {
        let time = MockTime::with_initial(u64::MAX - 5);
        time.advance(10);
        assert_eq!(time.now_us(), u64::MAX);

        let time = MockTime::new();
        time.advance_ms(u64::MAX / 10);
        assert_eq!(time.now_us(), u64::MAX);
    }
}
