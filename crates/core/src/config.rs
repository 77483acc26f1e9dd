//! Task Configuration Blocks
//!
//! Construction-time options for each task variant. Every block has a
//! `Default` matching the constants below and `const` builder setters so
//! configurations can live in `const` items next to the control loop.
//!
//! # Options
//!
//! - `allow_force_call` - One-shot body may be re-run through `force_step()`
//! - `lock_force_call` - Freeze the force-call permission after construction
//! - `call_initialize_on_step` - Run the initialization hook lazily on the first step
//! - `safe_stop` - Suppress the loop body once the timer is done
//! - `start_on_step` - Start a never-started timer on the first step
//! - `iterate_on_failed_step` - Cascade to the next child within the same tick

/// Default force-call permission
pub const DEFAULT_ALLOW_FORCE_CALL: bool = false;

/// Default force-call lock
pub const DEFAULT_LOCK_FORCE_CALL: bool = true;

/// Default lazy initialization policy
pub const DEFAULT_CALL_INITIALIZE_ON_STEP: bool = true;

/// Default safe stop policy
pub const DEFAULT_SAFE_STOP: bool = true;

/// Default timer auto-start policy
pub const DEFAULT_START_ON_STEP: bool = true;

/// Default same-tick cascade policy
pub const DEFAULT_ITERATE_ON_FAILED_STEP: bool = false;

/// One-shot task options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShotConfig {
    /// Allow `force_step()` to re-run the body
    pub allow_force_call: bool,
    /// Reject later changes to `allow_force_call`
    pub lock_force_call: bool,
}

impl Default for OneShotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl OneShotConfig {
    /// Default configuration (force calls disabled and locked)
    pub const fn new() -> Self {
        Self {
            allow_force_call: DEFAULT_ALLOW_FORCE_CALL,
            lock_force_call: DEFAULT_LOCK_FORCE_CALL,
        }
    }

    pub const fn allow_force_call(mut self, allow: bool) -> Self {
        self.allow_force_call = allow;
        self
    }

    pub const fn lock_force_call(mut self, lock: bool) -> Self {
        self.lock_force_call = lock;
        self
    }
}

/// Timer-bounded task options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerBoundedConfig {
    /// Run `LoopAction::initialize` once before the first update
    pub call_initialize_on_step: bool,
    /// Stop running the body once the timer is done
    ///
    /// With `safe_stop` disabled the body keeps running every step; the task
    /// still reports finished so a parent sequence moves on.
    pub safe_stop: bool,
    /// Start the timer on the first step if it was never started
    pub start_on_step: bool,
}

impl Default for TimerBoundedConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerBoundedConfig {
    pub const fn new() -> Self {
        Self {
            call_initialize_on_step: DEFAULT_CALL_INITIALIZE_ON_STEP,
            safe_stop: DEFAULT_SAFE_STOP,
            start_on_step: DEFAULT_START_ON_STEP,
        }
    }

    pub const fn call_initialize_on_step(mut self, call: bool) -> Self {
        self.call_initialize_on_step = call;
        self
    }

    pub const fn safe_stop(mut self, safe_stop: bool) -> Self {
        self.safe_stop = safe_stop;
        self
    }

    pub const fn start_on_step(mut self, start: bool) -> Self {
        self.start_on_step = start;
        self
    }
}

/// Sequential task options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequentialConfig {
    /// When the active child fails to step because it just finished, move on
    /// and step the next child within the same call
    pub iterate_on_failed_step: bool,
}

impl Default for SequentialConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SequentialConfig {
    pub const fn new() -> Self {
        Self {
            iterate_on_failed_step: DEFAULT_ITERATE_ON_FAILED_STEP,
        }
    }

    pub const fn iterate_on_failed_step(mut self, iterate: bool) -> Self {
        self.iterate_on_failed_step = iterate;
        self
    }
}

/// Timed sequential task options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedSequentialConfig {
    /// Options for the inner sequence
    pub sequence: SequentialConfig,
    /// Start the timer on the first step if it was never started
    pub start_on_step: bool,
}

impl Default for TimedSequentialConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TimedSequentialConfig {
    pub const fn new() -> Self {
        Self {
            sequence: SequentialConfig::new(),
            start_on_step: DEFAULT_START_ON_STEP,
        }
    }

    pub const fn sequence(mut self, sequence: SequentialConfig) -> Self {
        self.sequence = sequence;
        self
    }

    pub const fn start_on_step(mut self, start: bool) -> Self {
        self.start_on_step = start;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let one_shot = OneShotConfig::default();
        assert!(!one_shot.allow_force_call);
        assert!(one_shot.lock_force_call);

        let bounded = TimerBoundedConfig::default();
        assert!(bounded.call_initialize_on_step);
        assert!(bounded.safe_stop);
        assert!(bounded.start_on_step);

        assert!(!SequentialConfig::default().iterate_on_failed_step);
        assert_eq!(
            TimedSequentialConfig::default().sequence,
            SequentialConfig::default()
        );
    }

    #[test]
    fn test_builders_in_const_context() {
        const FORCEABLE: OneShotConfig = OneShotConfig::new()
            .allow_force_call(true)
            .lock_force_call(false);
        assert!(FORCEABLE.allow_force_call);
        assert!(!FORCEABLE.lock_force_call);

        const CASCADE: TimedSequentialConfig = TimedSequentialConfig::new()
            .sequence(SequentialConfig::new().iterate_on_failed_step(true))
            .start_on_step(false);
        assert!(CASCADE.sequence.iterate_on_failed_step);
        assert!(!CASCADE.start_on_step);
    }
}
