//! Macros for raising errors with their source location
//!
//! The kind is named by its constructor (`type_error`, `configuration`,
//! `pattern`, ...). The message becomes the error's context unchanged; the
//! call site is recorded separately, see [`Error::location`](crate::Error::location).

/// Build an error of the given kind, recording the call site
///
/// ```
/// use saslmech_common::{err, ErrorKind};
///
/// let name = "s1";
/// let error = err!(type_error, "{name} must be a buffer");
/// assert_eq!(error.kind(), &ErrorKind::Type);
/// assert_eq!(error.get_context(), Some("s1 must be a buffer"));
/// assert!(error.location().is_some());
/// ```
#[macro_export]
macro_rules! err {
    ($kind:ident) => {
        $crate::error::Error::$kind().at(file!(), line!())
    };
    ($kind:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::error::Error::$kind()
            .context(format!($fmt $(, $arg)*))
            .at(file!(), line!())
    };
    ($kind:ident, $msg:expr $(,)?) => {
        $crate::error::Error::$kind().context($msg).at(file!(), line!())
    };
}

/// Return early with an error built by [`err!`]
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Return early with an error built by [`err!`] unless the condition holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
