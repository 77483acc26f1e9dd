//! talon_tasks_core - Pure no_std task primitives for tick-driven control loops
//!
//! This crate contains the platform-agnostic task state machines and the
//! countdown timer they depend on. The caller owns the control loop and calls
//! `step()` on the root task once per tick.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives
//! - **no_std + alloc**: Sequences own boxed children, nothing else allocates
//! - **Trait abstractions**: Time is injected through [`traits::TimeSource`]
//! - **Booleans over errors**: "nothing happened" is `Ok(false)`; errors are
//!   reserved for construction mistakes such as a missing timer
//!
//! # Modules
//!
//! - [`traits`]: Time source abstraction and mock clock
//! - [`timer`]: Countdown timer with pause/resume and shared ownership
//! - [`task`]: Task trait, one-shot, timer-bounded and sequential tasks
//! - [`config`]: Construction-time options for each task variant

#![no_std]

extern crate alloc;

#[doc(hidden)]
pub extern crate alloc as __alloc;

pub mod config;
pub mod task;
pub mod timer;
pub mod traits;

pub use task::{
    Action, LoopAction, LoopFn, OneShotTask, SequentialTask, Task, TaskError, TimedSequentialTask,
    TimerBoundedTask,
};
pub use timer::{SharedTimer, Timer, TimerSlot, TimerStatus};
pub use traits::{MockTime, TimeSource};
