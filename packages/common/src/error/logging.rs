//! Structured logging bootstrap
//!
//! Mechanism crates log through the `log` facade; this wires it to
//! `env_logger`. Slot values can carry credentials, so the helpers here only
//! ever record property names and error kinds.

use log::{debug, info, trace};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging entry points shared by the mechanism crates
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging (call once at application startup)
    ///
    /// Levels come from `RUST_LOG`, e.g.:
    /// - `RUST_LOG=debug` - everything including resolver failures
    /// - `RUST_LOG=saslmech_helpers=trace` - per-crate levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are no-ops.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a config slot whose resolver failed
    pub fn log_resolver_failure(property: &str, error: &crate::Error) {
        debug!(
            "config slot `{property}` resolver failed (kind: {:?})",
            error.kind()
        );
    }

    /// Log a config slot that resolved to an in-flight value
    pub fn log_resolver_deferred(property: &str) {
        trace!("config slot `{property}` awaiting deferred value");
    }

    /// Log a key removed from a record during a merge
    pub fn log_key_removed(key: &str) {
        trace!("merge removed key `{key}`");
    }
}
