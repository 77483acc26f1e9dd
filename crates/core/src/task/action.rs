//! Task payloads
//!
//! The scheduler never looks inside a payload. One-shot tasks run an
//! [`Action`]; timer-bounded tasks run a [`LoopAction`]. Both are implemented
//! for plain closures so small control routines need no boilerplate.

/// Body of a one-shot task.
pub trait Action {
    /// Perform the work. Must return promptly: it runs inside the tick.
    fn run(&mut self);
}

impl<F: FnMut()> Action for F {
    fn run(&mut self) {
        self()
    }
}

/// Body of a timer-bounded task.
///
/// # Lifecycle
///
/// 1. `initialize()` - Called once before the first `update()` (unless disabled)
/// 2. `update()` - Called on every successful step until the timer is done
pub trait LoopAction {
    /// One-time setup before looping. Default does nothing.
    fn initialize(&mut self) {}

    /// Work performed on every step.
    fn update(&mut self);
}

impl<F: FnMut()> LoopAction for F {
    fn update(&mut self) {
        self()
    }
}

/// Loop body built from an initialization closure and an update closure.
///
/// # Example
///
/// ```
/// use talon_tasks_core::task::{LoopAction, LoopFn};
///
/// let mut count = 0;
/// let mut body = LoopFn::new(|| {}, || count += 1);
/// body.initialize();
/// body.update();
/// drop(body);
/// assert_eq!(count, 1);
/// ```
pub struct LoopFn<I, U> {
    init: I,
    update: U,
}

impl<I: FnMut(), U: FnMut()> LoopFn<I, U> {
    /// Pair an initialization closure with a per-tick update closure.
    pub fn new(init: I, update: U) -> Self {
        Self { init, update }
    }
}

impl<I: FnMut(), U: FnMut()> LoopAction for LoopFn<I, U> {
    fn initialize(&mut self) {
        (self.init)()
    }

    fn update(&mut self) {
        (self.update)()
    }
}
