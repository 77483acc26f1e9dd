//! Task abstraction and composition strategies
//!
//! A task is a unit of work invoked once per external tick. The driver calls
//! [`Task::step`] on the root task every cycle and treats `Ok(false)` as
//! "nothing advanced this tick", not as a failure.
//!
//! # Variants
//!
//! - [`OneShotTask`]: body runs at most once under normal stepping
//! - [`TimerBoundedTask`]: body repeats every tick until its timer is done
//! - [`SequentialTask`]: runs child tasks one at a time, in order
//! - [`TimedSequentialTask`]: sequence that also waits for a minimum duration
//!
//! # Example
//!
//! ```
//! use talon_tasks_core::sequence;
//! use talon_tasks_core::task::{OneShotTask, Task, TimerBoundedTask};
//! use talon_tasks_core::traits::MockTime;
//!
//! let time = MockTime::new();
//! let mut routine = sequence![
//!     OneShotTask::new(|| {}).with_name("lower_arm"),
//!     TimerBoundedTask::with_length(time.clone(), 500_000, || {}).with_name("drive"),
//!     OneShotTask::new(|| {}).with_name("raise_arm"),
//! ];
//!
//! // 50 Hz control loop
//! while !routine.is_finished()? {
//!     routine.step()?;
//!     time.advance(20_000);
//! }
//! # Ok::<(), talon_tasks_core::task::TaskError>(())
//! ```

mod action;
mod error;
mod one_shot;
mod sequential;
mod timed_sequential;
mod timer_bounded;

pub use action::{Action, LoopAction, LoopFn};
pub use error::TaskError;
pub use one_shot::OneShotTask;
pub use sequential::SequentialTask;
pub use timed_sequential::TimedSequentialTask;
pub use timer_bounded::TimerBoundedTask;

use alloc::boxed::Box;

/// Cooperative task driven by an external tick.
///
/// # Contract
///
/// - `step()` performs at most one unit of work and returns promptly
/// - `Ok(true)` means work was executed this call, `Ok(false)` means nothing ran
/// - `is_finished()` reports completion without side effects
/// - Errors are programmer errors (e.g. a missing timer) and should be
///   propagated to the driver rather than retried
pub trait Task {
    /// Perform one unit of work.
    fn step(&mut self) -> Result<bool, TaskError>;

    /// Whether the task has completed.
    fn is_finished(&self) -> Result<bool, TaskError>;

    /// Task name for logging
    fn name(&self) -> &'static str {
        "task"
    }
}

impl<T: Task + ?Sized> Task for Box<T> {
    fn step(&mut self) -> Result<bool, TaskError> {
        (**self).step()
    }

    fn is_finished(&self) -> Result<bool, TaskError> {
        (**self).is_finished()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Build a [`SequentialTask`] from a list of tasks of any variant.
///
/// Each argument is boxed and moved into the sequence.
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::task::SequentialTask::new($crate::__alloc::vec::Vec::new())
    };
    ($($task:expr),+ $(,)?) => {
        $crate::task::SequentialTask::new($crate::__alloc::vec![
            $($crate::__alloc::boxed::Box::new($task) as $crate::__alloc::boxed::Box<dyn $crate::task::Task>),+
        ])
    };
}
