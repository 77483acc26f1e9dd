//! Platform services for host drivers
//!
//! The core crate only sees the `TimeSource` trait. This module provides the
//! host implementation backed by the operating system's monotonic clock.

pub mod time;

pub use time::StdTime;
