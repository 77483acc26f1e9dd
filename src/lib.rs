//! talon_tasks - Cooperative task primitives for fixed-rate control loops
//!
//! Re-exports the no_std core (`talon_tasks_core`) and adds the host
//! platform pieces: a monotonic [`platform::StdTime`] clock and the
//! [`logging`] bootstrap.
//!
//! The library owns no loop. A driver calls `step()` on the root task once per
//! tick:
//!
//! ```no_run
//! use std::thread;
//! use std::time::Duration;
//!
//! use talon_tasks::platform::StdTime;
//! use talon_tasks::sequence;
//! use talon_tasks::task::{OneShotTask, Task, TimerBoundedTask};
//!
//! talon_tasks::logging::init();
//!
//! let time = StdTime::new();
//! let mut routine = sequence![
//!     OneShotTask::new(|| println!("deploy")).with_name("deploy"),
//!     TimerBoundedTask::with_length(time, 2_000_000, || {}).with_name("drive"),
//! ];
//!
//! // 50 Hz control loop
//! while !routine.is_finished()? {
//!     routine.step()?;
//!     thread::sleep(Duration::from_millis(20));
//! }
//! # Ok::<(), talon_tasks::task::TaskError>(())
//! ```

pub mod logging;
pub mod platform;

pub use talon_tasks_core::{config, sequence, task, timer, traits};
pub use talon_tasks_core::{
    Action, LoopAction, LoopFn, MockTime, OneShotTask, SequentialTask, SharedTimer, Task,
    TaskError, TimeSource, TimedSequentialTask, Timer, TimerBoundedTask, TimerSlot, TimerStatus,
};
