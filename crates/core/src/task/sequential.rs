//! Sequential task
//!
//! Composite task that steps exactly one child per call, in order. The cursor
//! moves past a child once it reports finished. Children may be any task
//! variant, including other sequences.
//!
//! # Same-tick cascade
//!
//! A child can decline to step on the call that reaches it: a timed task whose
//! timer ran out between ticks, or a nested sequence that only just settled
//! past its own finished children. With `iterate_on_failed_step` the sequence
//! retries in the same call instead of wasting the tick, moving on to the next
//! child once the current one reports finished. Retries are capped at the
//! number of children left (plus one pass to settle past the end), so a child
//! that keeps declining without finishing cannot stall the caller's loop.

use alloc::boxed::Box;
use alloc::vec::Vec;

use super::{Task, TaskError};
use crate::config::SequentialConfig;

/// Runs child tasks one at a time, in order.
///
/// Children are owned exclusively and dropped with the sequence.
pub struct SequentialTask {
    name: &'static str,
    tasks: Vec<Box<dyn Task>>,
    /// Index of the active child; only moves forward except on reset
    cursor: usize,
    config: SequentialConfig,
}

impl SequentialTask {
    pub fn new(tasks: Vec<Box<dyn Task>>) -> Self {
        Self::with_config(tasks, SequentialConfig::default())
    }

    pub fn with_config(tasks: Vec<Box<dyn Task>>, config: SequentialConfig) -> Self {
        Self {
            name: "sequence",
            tasks,
            cursor: 0,
            config,
        }
    }

    /// Set the name used in log messages.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Enable or disable same-tick cascading (builder form).
    pub fn iterate_on_failed_step(mut self, iterate: bool) -> Self {
        self.config.iterate_on_failed_step = iterate;
        self
    }

    /// Append a child to the end of the sequence.
    pub fn push<T: Task + 'static>(&mut self, task: T) {
        self.tasks.push(Box::new(task));
    }

    /// Index of the active child.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor.
    ///
    /// Setting it at or past [`len`](Self::len) cancels the rest of the
    /// sequence.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Rewind the cursor to the first child.
    ///
    /// Children are not reset. Some cannot be (a finished one-shot stays
    /// finished), so a second pass skips them; reset children individually
    /// before rewinding if they must run again.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Active child, if the sequence has not run out.
    pub fn current(&self) -> Option<&dyn Task> {
        self.tasks.get(self.cursor).map(|task| task.as_ref())
    }

    pub fn tasks(&self) -> &[Box<dyn Task>] {
        &self.tasks
    }

    pub fn config(&self) -> SequentialConfig {
        self.config
    }

    pub fn set_iterate_on_failed_step(&mut self, iterate: bool) {
        self.config.iterate_on_failed_step = iterate;
    }

    /// Move past the active child if it has finished.
    ///
    /// Returns `false` when the sequence has run out.
    fn settle_cursor(&mut self) -> Result<bool, TaskError> {
        let Some(task) = self.tasks.get(self.cursor) else {
            return Ok(false);
        };
        if task.is_finished()? {
            self.cursor += 1;
            if self.cursor >= self.tasks.len() {
                log::debug!("{}: completed", self.name);
                return Ok(false);
            }
            log::debug!(
                "{}: advanced to {} ({}/{})",
                self.name,
                self.tasks[self.cursor].name(),
                self.cursor + 1,
                self.tasks.len()
            );
        }
        Ok(true)
    }
}

impl Task for SequentialTask {
    fn step(&mut self) -> Result<bool, TaskError> {
        // One pass per remaining child, plus one to settle past the end
        let attempts = self.tasks.len().saturating_sub(self.cursor) + 1;
        for _ in 0..attempts {
            if !self.settle_cursor()? {
                return Ok(false);
            }

            let task = &mut self.tasks[self.cursor];
            let stepped = task.step()?;
            if stepped || !self.config.iterate_on_failed_step {
                return Ok(stepped);
            }
            log::trace!("{}: {} declined to step, cascading", self.name, task.name());
        }
        Ok(false)
    }

    fn is_finished(&self) -> Result<bool, TaskError> {
        Ok(self.cursor >= self.tasks.len())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl FromIterator<Box<dyn Task>> for SequentialTask {
    fn from_iter<I: IntoIterator<Item = Box<dyn Task>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl core::fmt::Debug for SequentialTask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SequentialTask")
            .field("name", &self.name)
            .field("len", &self.tasks.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .finish()
    }
}
