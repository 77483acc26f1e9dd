//! Logging bootstrap
//!
//! The task primitives log through the `log` facade: lifecycle transitions at
//! `debug`, same-tick cascades at `trace`, refused operations at `warn`. Host
//! drivers call [`init`] once to route those records to stderr.
//!
//! The filter comes from `RUST_LOG` (e.g. `RUST_LOG=talon_tasks_core=debug`)
//! and defaults to `info`.

use env_logger::Env;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install the host logger.
///
/// Returns `true` if this call installed the logger and `false` if a logger
/// was already set, which makes it safe to call from every test.
pub fn init() -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_micros()
        .try_init()
        .is_ok()
}

/// Install a logger that is captured by the test harness.
pub fn init_for_tests() -> bool {
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_for_tests();
        assert!(!init());
        assert!(!init_for_tests());
    }
}
