//! Error handling with context propagation
//!
//! Provides the error type shared by every mechanism helper:
//! - Error kinds defined with thiserror
//! - Context attachment and source chaining
//! - Backtrace capture (feature `full-backtrace`)

pub mod constructors;
pub mod display;
pub mod logging;
pub mod macros;
pub mod types;

pub use logging::LoggingTransformer;
pub use types::{Error, ErrorKind, Location, Result};
