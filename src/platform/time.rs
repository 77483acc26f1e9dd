//! Monotonic time source for host targets.
//!
//! This module provides the `StdTime` implementation of the `TimeSource`
//! trait using `std::time::Instant`.

use std::time::Instant;

use talon_tasks_core::traits::TimeSource;

/// Host time source measuring from the instant it was created.
///
/// Clones share the same origin, so timers built from clones of one source
/// agree on "now".
///
/// # Example
///
/// ```
/// use talon_tasks::platform::StdTime;
/// use talon_tasks::traits::TimeSource;
///
/// let time = StdTime::new();
/// let now = time.now_us();
/// assert!(time.now_us() >= now);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StdTime {
    origin: Instant,
}

impl StdTime {
    /// Create a time source whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Create a time source measuring from `origin`.
    pub fn with_origin(origin: Instant) -> Self {
        Self { origin }
    }
}

impl Default for StdTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for StdTime {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn now_us(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}
