//! Core traits for platform-agnostic task timing.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Platform implementations (std monotonic clock) live in the `talon_tasks` crate

pub mod time;

pub use time::{MockTime, TimeSource};
