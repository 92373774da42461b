//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Core error type with context propagation support
///
/// Cloning is cheap and shares the same underlying error, which lets a
/// single failure be observed by every holder of a shared future.
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub context: Option<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub location: Option<Location>,
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Source position an error was raised at by [`err!`](crate::err),
/// [`bail!`](crate::bail) or [`ensure!`](crate::ensure)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Source file
    pub file: &'static str,
    /// Line within `file`
    pub line: u32,
}

/// Different kinds of errors that can occur
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A value had the wrong shape for the operation
    #[error("Type error")]
    Type,

    /// A config slot resolver failed
    #[error("Resolver error")]
    Resolver,

    /// Configuration values were missing or malformed
    #[error("Configuration error")]
    Configuration,

    /// Text or binary decoding failed
    #[error("Encoding error")]
    Encoding,

    /// A regular expression could not be built
    #[error("Pattern error")]
    Pattern,

    /// Internal error
    #[error("Internal error")]
    Internal,

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
