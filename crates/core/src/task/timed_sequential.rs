//! Timed sequential task
//!
//! A [`SequentialTask`] with a minimum duration: it is only finished once the
//! children have run out *and* its timer is done. Useful for routines that
//! must occupy a fixed slot of a match or mission phase even when the steps
//! complete early.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::{SequentialTask, Task, TaskError};
use crate::config::TimedSequentialConfig;
use crate::timer::{SharedTimer, Timer, TimerSlot};
use crate::traits::TimeSource;

/// Sequence that cannot finish before its timer is done.
pub struct TimedSequentialTask<C: TimeSource> {
    sequence: SequentialTask,
    timer: Option<TimerSlot<C>>,
    start_on_step: bool,
}

impl<C: TimeSource> TimedSequentialTask<C> {
    pub fn new(timer: Timer<C>, tasks: Vec<Box<dyn Task>>) -> Self {
        Self::with_config(timer, tasks, TimedSequentialConfig::default())
    }

    pub fn with_config(
        timer: Timer<C>,
        tasks: Vec<Box<dyn Task>>,
        config: TimedSequentialConfig,
    ) -> Self {
        Self::from_parts(Some(TimerSlot::Owned(timer)), tasks, config)
    }

    /// Bound the sequence by a caller-owned timer.
    pub fn with_shared_timer(
        timer: SharedTimer<C>,
        tasks: Vec<Box<dyn Task>>,
        config: TimedSequentialConfig,
    ) -> Self {
        Self::from_parts(Some(TimerSlot::Shared(timer)), tasks, config)
    }

    /// Create a timed sequence with no timer attached yet.
    pub fn without_timer(tasks: Vec<Box<dyn Task>>, config: TimedSequentialConfig) -> Self {
        Self::from_parts(None, tasks, config)
    }

    fn from_parts(
        timer: Option<TimerSlot<C>>,
        tasks: Vec<Box<dyn Task>>,
        config: TimedSequentialConfig,
    ) -> Self {
        Self {
            sequence: SequentialTask::with_config(tasks, config.sequence).with_name("timed_sequence"),
            timer,
            start_on_step: config.start_on_step,
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.sequence = self.sequence.with_name(name);
        self
    }

    pub fn set_timer(&mut self, timer: Timer<C>) {
        self.timer = Some(TimerSlot::Owned(timer));
    }

    pub fn set_shared_timer(&mut self, timer: SharedTimer<C>) {
        self.timer = Some(TimerSlot::Shared(timer));
    }

    /// Start (or resume) the timer. Returns `false` without a timer.
    ///
    /// With `start_on_step` set (the default) the first step already starts
    /// the timer, after which this returns `false` while it runs.
    pub fn start(&mut self) -> bool {
        match self.timer.as_mut() {
            Some(slot) => slot.with_mut(|timer| timer.start()),
            None => {
                log::warn!("{}: start requested without a timer", self.sequence.name());
                false
            }
        }
    }

    /// Rewind the sequence and stop the timer. Children are not reset.
    pub fn reset(&mut self) {
        self.sequence.reset();
        if let Some(slot) = self.timer.as_mut() {
            slot.with_mut(|timer| timer.stop());
        }
    }

    pub fn remaining_us(&self) -> Result<Option<i64>, TaskError> {
        Ok(self.slot()?.with(|timer| timer.remaining_us()))
    }

    pub fn sequence(&self) -> &SequentialTask {
        &self.sequence
    }

    pub fn sequence_mut(&mut self) -> &mut SequentialTask {
        &mut self.sequence
    }

    fn slot(&self) -> Result<&TimerSlot<C>, TaskError> {
        self.timer.as_ref().ok_or(TaskError::MissingTimer {
            task: self.sequence.name(),
        })
    }
}

impl<C: TimeSource> Task for TimedSequentialTask<C> {
    fn step(&mut self) -> Result<bool, TaskError> {
        if self.start_on_step {
            let name = self.sequence.name();
            let slot = self
                .timer
                .as_mut()
                .ok_or(TaskError::MissingTimer { task: name })?;
            if slot.with_mut(|timer| !timer.has_started() && timer.start()) {
                log::debug!("{}: timer started", name);
            }
        }
        self.sequence.step()
    }

    fn is_finished(&self) -> Result<bool, TaskError> {
        let timer_done = self.slot()?.with(|timer| timer.is_done());
        Ok(timer_done && self.sequence.is_finished()?)
    }

    fn name(&self) -> &'static str {
        self.sequence.name()
    }
}
