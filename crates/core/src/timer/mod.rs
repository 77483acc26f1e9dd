//! Countdown Timer
//!
//! Monotonic countdown with start, pause, resume and stop. All operations are
//! total: they report "did nothing" through `bool` returns and "not running"
//! through `None`, never through panics.
//!
//! # Lifecycle
//!
//! ```text
//!            start()              pause()
//! Disabled ----------> Enabled ----------> Paused
//!    ^                  |   ^                 |
//!    |      stop()      |   |     start()     |
//!    +------------------+   +-----------------+
//!    +---------------------------------------+
//!                      stop()
//! ```

mod slot;

pub use slot::{SharedTimer, TimerSlot};

use crate::traits::TimeSource;

/// Timer status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimerStatus {
    /// Not counting down (never started, or stopped)
    #[default]
    Disabled,
    /// Counting down
    Enabled,
    /// Countdown frozen at the pause instant
    Paused,
}

/// Countdown timer driven by a [`TimeSource`].
///
/// Times are microseconds on the source's monotonic scale. Remaining time is
/// signed: once the countdown runs out it keeps going negative, which is how
/// timer-bounded tasks detect expiry.
///
/// # Example
///
/// ```
/// use talon_tasks_core::timer::{Timer, TimerStatus};
/// use talon_tasks_core::traits::MockTime;
///
/// let time = MockTime::new();
/// let mut timer = Timer::from_millis(time.clone(), 100);
/// assert_eq!(timer.remaining_us(), None);
///
/// assert!(timer.start());
/// time.advance_ms(40);
/// assert_eq!(timer.remaining_us(), Some(60_000));
/// assert_eq!(timer.status(), TimerStatus::Enabled);
/// ```
#[derive(Clone, Debug)]
pub struct Timer<C: TimeSource> {
    clock: C,
    status: TimerStatus,
    length_us: u64,
    /// Start of the current run (None until the first `start()`)
    start_us: Option<u64>,
    pause_us: u64,
}

impl<C: TimeSource> Timer<C> {
    /// Create a disabled timer that will run for `length_us` once started.
    pub fn new(clock: C, length_us: u64) -> Self {
        Self {
            clock,
            status: TimerStatus::Disabled,
            length_us,
            start_us: None,
            pause_us: 0,
        }
    }

    /// Create a disabled timer with a length in milliseconds.
    pub fn from_millis(clock: C, length_ms: u64) -> Self {
        Self::new(clock, length_ms.saturating_mul(1000))
    }

    /// Start or resume the countdown.
    ///
    /// - Disabled: begins a fresh run from now
    /// - Paused: resumes, excluding the paused duration from the countdown
    /// - Enabled: no-op, returns `false`
    pub fn start(&mut self) -> bool {
        let now = self.clock.now_us();
        match self.status {
            TimerStatus::Disabled => {
                self.start_us = Some(now);
                self.status = TimerStatus::Enabled;
                true
            }
            TimerStatus::Paused => {
                let start = self.start_us.unwrap_or(self.pause_us);
                let elapsed = self.pause_us.saturating_sub(start);
                self.start_us = Some(now.saturating_sub(elapsed));
                self.status = TimerStatus::Enabled;
                true
            }
            TimerStatus::Enabled => false,
        }
    }

    /// Stop the countdown.
    ///
    /// The current run cannot be resumed; a later `start()` begins a fresh
    /// run using the stored length.
    pub fn stop(&mut self) {
        self.status = TimerStatus::Disabled;
    }

    /// Pause a running countdown.
    ///
    /// Only an enabled timer can be paused. Pausing a disabled or already
    /// paused timer is a no-op and returns `false`.
    pub fn pause(&mut self) -> bool {
        if self.status != TimerStatus::Enabled {
            return false;
        }
        self.pause_us = self.clock.now_us();
        self.status = TimerStatus::Paused;
        true
    }

    /// Current status.
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// Countdown length in microseconds.
    pub fn length_us(&self) -> u64 {
        self.length_us
    }

    /// Replace the countdown length. The start instant is kept, so a running
    /// timer immediately reflects the new length.
    pub fn set_length_us(&mut self, length_us: u64) {
        self.length_us = length_us;
    }

    /// Whether the timer has been started at least once.
    pub fn has_started(&self) -> bool {
        self.start_us.is_some()
    }

    /// Remaining time in microseconds.
    ///
    /// Returns `None` while the timer is disabled (never started, or stopped).
    /// A paused timer reports the remaining time frozen at the pause instant.
    pub fn remaining_us(&self) -> Option<i64> {
        let start = self.start_us?;
        let reference = match self.status {
            TimerStatus::Disabled => return None,
            TimerStatus::Enabled => self.clock.now_us(),
            TimerStatus::Paused => self.pause_us,
        };
        let elapsed = reference.saturating_sub(start);
        Some(to_signed(self.length_us).saturating_sub(to_signed(elapsed)))
    }

    /// Remaining time in milliseconds.
    pub fn remaining_ms(&self) -> Option<f64> {
        self.remaining_us().map(|us| us as f64 / 1e3)
    }

    /// Remaining time in seconds.
    pub fn remaining_secs(&self) -> Option<f64> {
        self.remaining_us().map(|us| us as f64 / 1e6)
    }

    /// Whether the countdown of the current run has run past zero.
    pub fn is_expired(&self) -> bool {
        matches!(self.remaining_us(), Some(remaining) if remaining < 0)
    }

    /// Whether the current run is over: expired, or stopped after a start.
    ///
    /// A timer that was never started is not done.
    pub fn is_done(&self) -> bool {
        match self.remaining_us() {
            Some(remaining) => remaining < 0,
            None => self.has_started(),
        }
    }
}

fn to_signed(us: u64) -> i64 {
    i64::try_from(us).unwrap_or(i64::MAX)
}
