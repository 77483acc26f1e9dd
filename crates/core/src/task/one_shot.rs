//! One-shot task
//!
//! Runs its body exactly once across the lifetime of the task. The finished
//! latch is one-way: there is no reset. A forced re-execution path exists for
//! bodies that must occasionally be replayed, gated by a permission that can
//! be frozen at construction.

use super::{Action, Task, TaskError};
use crate::config::OneShotConfig;

/// Task whose body runs at most once under normal stepping.
///
/// # Example
///
/// ```
/// use talon_tasks_core::task::{OneShotTask, Task};
///
/// let mut fired = 0;
/// let mut task = OneShotTask::new(|| fired += 1);
///
/// assert_eq!(task.step(), Ok(true));
/// assert_eq!(task.step(), Ok(false));
/// assert_eq!(task.is_finished(), Ok(true));
/// drop(task);
/// assert_eq!(fired, 1);
/// ```
pub struct OneShotTask<A> {
    name: &'static str,
    action: A,
    finished: bool,
    allow_force_call: bool,
    /// Fixed at construction
    force_call_locked: bool,
}

impl<A: Action> OneShotTask<A> {
    /// Create a one-shot task with force calls disabled and locked.
    pub fn new(action: A) -> Self {
        Self::with_config(action, OneShotConfig::default())
    }

    /// Create a one-shot task whose force-call permission comes from `config`.
    pub fn with_config(action: A, config: OneShotConfig) -> Self {
        Self {
            name: "one_shot",
            action,
            finished: false,
            allow_force_call: config.allow_force_call,
            force_call_locked: config.lock_force_call,
        }
    }

    /// Set the name used in log messages.
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Run the body again regardless of the finished latch.
    ///
    /// Returns `false` without running the body when force calls are not
    /// allowed. Never changes the finished latch.
    pub fn force_step(&mut self) -> bool {
        if !self.allow_force_call {
            return false;
        }
        log::debug!("{}: forced execution", self.name);
        self.action.run();
        true
    }

    /// Enable or disable force calls.
    ///
    /// Returns `true` when the permission was updated and `false` when it is
    /// locked (the permission is left unchanged).
    pub fn set_force_call_allowed(&mut self, allow: bool) -> bool {
        if self.force_call_locked {
            log::warn!("{}: force-call permission is locked", self.name);
            return false;
        }
        self.allow_force_call = allow;
        true
    }

    pub fn is_force_call_allowed(&self) -> bool {
        self.allow_force_call
    }

    pub fn is_force_call_locked(&self) -> bool {
        self.force_call_locked
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }
}

impl<A: Action> Task for OneShotTask<A> {
    fn step(&mut self) -> Result<bool, TaskError> {
        if self.finished {
            return Ok(false);
        }
        self.action.run();
        self.finished = true;
        log::debug!("{}: executed", self.name);
        Ok(true)
    }

    fn is_finished(&self) -> Result<bool, TaskError> {
        Ok(self.finished)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut()) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_first_step_runs_body_once() {
        let (count, body) = counter();
        let mut task = OneShotTask::new(body);

        assert_eq!(task.is_finished(), Ok(false));
        assert_eq!(task.step(), Ok(true));
        assert_eq!(task.is_finished(), Ok(true));
        assert_eq!(count.get(), 1);

        for _ in 0..5 {
            assert_eq!(task.step(), Ok(false));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_force_step_disabled_by_default() {
        let (count, body) = counter();
        let mut task = OneShotTask::new(body);

        assert!(!task.is_force_call_allowed());
        assert!(task.is_force_call_locked());
        assert!(!task.force_step());
        assert_eq!(count.get(), 0);
        assert_eq!(task.is_finished(), Ok(false));
    }

    #[test]
    fn test_force_step_runs_regardless_of_finished() {
        let (count, body) = counter();
        let config = OneShotConfig::new().allow_force_call(true);
        let mut task = OneShotTask::with_config(body, config);

        // Before the normal step: runs, but does not latch finished
        assert!(task.force_step());
        assert_eq!(task.is_finished(), Ok(false));

        assert_eq!(task.step(), Ok(true));
        for _ in 0..3 {
            assert!(task.force_step());
        }
        assert_eq!(count.get(), 5);
        assert_eq!(task.is_finished(), Ok(true));
    }

    #[test]
    fn test_locked_permission_never_changes() {
        let (_count, body) = counter();
        let config = OneShotConfig::new()
            .allow_force_call(true)
            .lock_force_call(true);
        let mut task = OneShotTask::with_config(body, config);

        assert!(!task.set_force_call_allowed(false));
        assert!(task.is_force_call_allowed());
        assert!(!task.set_force_call_allowed(true));
        assert!(task.is_force_call_allowed());
    }

    #[test]
    fn test_unlocked_permission_returns_true_on_change() {
        let (count, body) = counter();
        let config = OneShotConfig::new().lock_force_call(false);
        let mut task = OneShotTask::with_config(body, config);

        assert!(!task.force_step());
        assert!(task.set_force_call_allowed(true));
        assert!(task.force_step());
        assert!(task.set_force_call_allowed(false));
        assert!(!task.force_step());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_name() {
        let task = OneShotTask::new(|| {}).with_name("deploy_intake");
        assert_eq!(Task::name(&task), "deploy_intake");
        assert_eq!(Task::name(&OneShotTask::new(|| {})), "one_shot");
    }
}
