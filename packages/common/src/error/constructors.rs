//! Error constructors and methods

use super::types::{Error, ErrorInner, ErrorKind, Location};
use std::fmt;
use std::sync::Arc;

impl Error {
    /// Create a new error with the given kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self::build(kind, None, None)
    }

    /// Create an error with a source error
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::build(kind, None, Some(Box::new(source)))
    }

    /// Add context to this error
    ///
    /// An error that already carries context or a source is kept as the
    /// source of the returned error so nothing is lost from the chain.
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        let chained = self.inner.context.is_some() || self.inner.source.is_some();
        let location = if chained { None } else { self.inner.location };
        let source = chained.then(|| Box::new(self.clone()) as Box<dyn std::error::Error + Send + Sync>);

        Self::build(self.inner.kind.clone(), Some(context.to_string()), source).located(location)
    }

    /// Record where the error was raised
    ///
    /// Used by the error macros; the location shows in the alternate
    /// (`{:#}`) display only.
    #[doc(hidden)]
    #[must_use]
    pub fn at(self, file: &'static str, line: u32) -> Self {
        self.located(Some(Location { file, line }))
    }

    fn located(mut self, location: Option<Location>) -> Self {
        if location.is_none() {
            return self;
        }
        match Arc::get_mut(&mut self.inner) {
            Some(inner) => {
                inner.location = location;
                self
            }
            // shared elsewhere: keep it intact as the source
            None => {
                let kind = self.inner.kind.clone();
                let mut error = Self::build(kind, None, Some(Box::new(self)));
                if let Some(inner) = Arc::get_mut(&mut error.inner) {
                    inner.location = location;
                }
                error
            }
        }
    }

    fn build(
        kind: ErrorKind,
        context: Option<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context,
                source,
                location: None,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new(),
            }),
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Where the error was raised, for errors built by the macros
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        self.inner.location
    }

    /// Get the backtrace
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// Create a type error
    #[must_use]
    pub fn type_error() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Create a resolver error
    #[must_use]
    pub fn resolver() -> Self {
        Self::new(ErrorKind::Resolver)
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Create an encoding error
    #[must_use]
    pub fn encoding() -> Self {
        Self::new(ErrorKind::Encoding)
    }

    /// Create a pattern error
    #[must_use]
    pub fn pattern() -> Self {
        Self::new(ErrorKind::Pattern)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    /// Create an other error with custom message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::new(ErrorKind::Other(msg.into()))
    }
}
