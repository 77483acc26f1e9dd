//! Timer ownership for timer-bounded tasks
//!
//! A task either owns its timer outright or holds a handle to a timer the
//! caller injected. Injected timers stay owned by the caller: dropping the
//! task only releases the task's handle.

use alloc::rc::Rc;
use core::cell::RefCell;

use super::Timer;
use crate::traits::TimeSource;

/// Caller-owned timer shared with one or more tasks.
pub type SharedTimer<C> = Rc<RefCell<Timer<C>>>;

/// Timer attached to a task
#[derive(Debug)]
pub enum TimerSlot<C: TimeSource> {
    /// Timer created for and owned by the task
    Owned(Timer<C>),
    /// Timer injected by the caller
    Shared(SharedTimer<C>),
}

impl<C: TimeSource> TimerSlot<C> {
    /// Run `f` with read access to the timer.
    pub fn with<R>(&self, f: impl FnOnce(&Timer<C>) -> R) -> R {
        match self {
            TimerSlot::Owned(timer) => f(timer),
            TimerSlot::Shared(timer) => f(&timer.borrow()),
        }
    }

    /// Run `f` with write access to the timer.
    pub fn with_mut<R>(&mut self, f: impl FnOnce(&mut Timer<C>) -> R) -> R {
        match self {
            TimerSlot::Owned(timer) => f(timer),
            TimerSlot::Shared(timer) => f(&mut timer.borrow_mut()),
        }
    }

    /// Whether the timer was injected by the caller.
    pub fn is_shared(&self) -> bool {
        matches!(self, TimerSlot::Shared(_))
    }
}

impl<C: TimeSource> From<Timer<C>> for TimerSlot<C> {
    fn from(timer: Timer<C>) -> Self {
        TimerSlot::Owned(timer)
    }
}

impl<C: TimeSource> From<SharedTimer<C>> for TimerSlot<C> {
    fn from(timer: SharedTimer<C>) -> Self {
        TimerSlot::Shared(timer)
    }
}
