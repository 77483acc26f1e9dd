//! Task error types

/// Errors raised by task operations.
///
/// These are construction mistakes, not runtime conditions: drivers should
/// propagate them instead of retrying. "Nothing happened this tick" is
/// reported through `Ok(false)`, never through an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// A timer-bounded task was stepped or queried with no timer attached
    #[error("task '{task}' has no timer attached")]
    MissingTimer {
        /// Name of the task missing its timer
        task: &'static str,
    },
}
