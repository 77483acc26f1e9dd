//! Timer-bounded task
//!
//! Repeats its loop body every tick until its attached timer is done.
//!
//! # State Machine
//!
//! ```text
//! NotStarted --step/start--> Running --timer done--> Expired
//!                               ^                       |
//!                               +------- start() -------+ (after reset)
//! ```
//!
//! With `safe_stop` disabled the body keeps running after expiry; the task
//! still reports finished so enclosing sequences move on.

use super::{LoopAction, Task, TaskError};
use crate::config::TimerBoundedConfig;
use crate::timer::{SharedTimer, Timer, TimerSlot};
use crate::traits::TimeSource;

/// Task that repeats its body until its timer runs out.
///
/// The timer is either owned by the task or injected by the caller as a
/// [`SharedTimer`]. Stepping or querying a task without a timer fails with
/// [`TaskError::MissingTimer`].
pub struct TimerBoundedTask<C: TimeSource, A> {
    name: &'static str,
    action: A,
    timer: Option<TimerSlot<C>>,
    initialized: bool,
    config: TimerBoundedConfig,
}

impl<C: TimeSource, A: LoopAction> TimerBoundedTask<C, A> {
    /// Create a task that owns `timer`.
    pub fn new(timer: Timer<C>, action: A) -> Self {
        Self::from_slot(Some(TimerSlot::Owned(timer)), action)
    }

    /// Create a task owning a new timer of `length_us` on `clock`.
    pub fn with_length(clock: C, length_us: u64, action: A) -> Self {
        Self::new(Timer::new(clock, length_us), action)
    }

    /// Create a task bounded by a caller-owned timer.
    pub fn with_shared_timer(timer: SharedTimer<C>, action: A) -> Self {
        Self::from_slot(Some(TimerSlot::Shared(timer)), action)
    }

    /// Create a task with no timer. A timer must be attached with
    /// [`set_timer`](Self::set_timer) or
    /// [`set_shared_timer`](Self::set_shared_timer) before it is stepped.
    pub fn without_timer(action: A) -> Self {
        Self::from_slot(None, action)
    }

    fn from_slot(timer: Option<TimerSlot<C>>, action: A) -> Self {
        Self {
            name: "timer_bounded",
            action,
            timer,
            initialized: false,
            config: TimerBoundedConfig::default(),
        }
    }

    /// Set the name used in log messages and errors.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Replace the default step behavior (lazy initialization, safe stop,
    /// auto-start).
    pub fn with_config(mut self, config: TimerBoundedConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach an owned timer, replacing any previous one.
    pub fn set_timer(&mut self, timer: Timer<C>) {
        self.timer = Some(TimerSlot::Owned(timer));
    }

    /// Attach a caller-owned timer, replacing any previous one.
    pub fn set_shared_timer(&mut self, timer: SharedTimer<C>) {
        self.timer = Some(TimerSlot::Shared(timer));
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Start (or resume) the timer.
    ///
    /// Returns `false` when no timer is attached, otherwise the result of
    /// [`Timer::start`]. With `start_on_step` set (the default) the first
    /// [`step`](Task::step) already starts a never-started timer, so calling
    /// this afterwards returns `false` while the run is in progress.
    pub fn start(&mut self) -> bool {
        match self.timer.as_mut() {
            Some(slot) => slot.with_mut(|timer| timer.start()),
            None => {
                log::warn!("{}: start requested without a timer", self.name);
                false
            }
        }
    }

    /// Stop the timer and clear the initialization latch.
    ///
    /// Effects already produced by the body are untouched. The task reports
    /// finished until [`start`](Self::start) begins a new run.
    pub fn reset(&mut self) {
        if let Some(slot) = self.timer.as_mut() {
            slot.with_mut(|timer| timer.stop());
        }
        self.initialized = false;
    }

    /// Run the initialization hook now and latch it.
    pub fn initialize(&mut self) {
        self.action.initialize();
        self.initialized = true;
        log::debug!("{}: initialized", self.name);
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Remaining time of the attached timer (`None` while it is disabled).
    pub fn remaining_us(&self) -> Result<Option<i64>, TaskError> {
        Ok(self.slot()?.with(|timer| timer.remaining_us()))
    }

    pub fn config(&self) -> TimerBoundedConfig {
        self.config
    }

    pub fn set_call_initialize_on_step(&mut self, call: bool) {
        self.config.call_initialize_on_step = call;
    }

    pub fn set_safe_stop(&mut self, safe_stop: bool) {
        self.config.safe_stop = safe_stop;
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }

    fn slot(&self) -> Result<&TimerSlot<C>, TaskError> {
        self.timer
            .as_ref()
            .ok_or(TaskError::MissingTimer { task: self.name })
    }

    fn slot_mut(&mut self) -> Result<&mut TimerSlot<C>, TaskError> {
        let name = self.name;
        self.timer
            .as_mut()
            .ok_or(TaskError::MissingTimer { task: name })
    }
}

impl<C: TimeSource, A: LoopAction> Task for TimerBoundedTask<C, A> {
    fn step(&mut self) -> Result<bool, TaskError> {
        if self.config.start_on_step {
            let started = self.slot_mut()?.with_mut(|timer| {
                if timer.has_started() {
                    false
                } else {
                    timer.start()
                }
            });
            if started {
                log::debug!("{}: timer started", self.name);
            }
        }

        if self.is_finished()? && self.config.safe_stop {
            return Ok(false);
        }

        if !self.initialized && self.config.call_initialize_on_step {
            self.initialize();
        }
        self.action.update();
        Ok(true)
    }

    fn is_finished(&self) -> Result<bool, TaskError> {
        Ok(self.slot()?.with(|timer| timer.is_done()))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
