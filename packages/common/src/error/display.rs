//! Display and trait implementations for Error
//!
//! Errors render on one line so they can be handed back as a rejection
//! message. The alternate form (`{:#}`) also names the raising location.

use super::types::{Error, ErrorKind};
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.inner.kind, &self.inner.context) {
            // the message already is the description
            (ErrorKind::Other(msg), Some(context)) => write!(f, "{context}: {msg}")?,
            (kind, Some(context)) => write!(f, "{kind}: {context}")?,
            (kind, None) => write!(f, "{kind}")?,
        }

        if f.alternate() {
            if let Some(location) = &self.inner.location {
                write!(f, " [{}:{}]", location.file, location.line)?;
            }
        }

        if let Some(source) = &self.inner.source {
            if f.alternate() {
                write!(f, " (caused by: {source:#})")?;
            } else {
                write!(f, " (caused by: {source})")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}
