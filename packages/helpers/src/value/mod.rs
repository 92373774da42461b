//! Dynamic values held in mechanism config records
//!
//! A config slot may hold plain data, a mutable container, or a
//! [`Resolver`] that computes the data on demand. [`Value`] is the tagged
//! union of all of these.
//!
//! Containers, dates and patterns are held through [`Shared`] handles, so
//! `Value::clone` (the `Clone` trait) aliases them. Use
//! [`clone_value`](crate::clone_value) for an independent copy.

mod pattern;
mod record;
mod resolver;
mod shared;

pub use pattern::{Pattern, PatternFlags};
pub use record::Record;
pub use resolver::{Deferred, Resolver};
pub use shared::Shared;

use chrono::{DateTime, Utc};

/// Config slot contents
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value; also the deletion marker for [`extend`](crate::extend)
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number (double precision, like every numeric slot)
    Number(f64),
    /// Text
    String(String),
    /// Binary buffer
    Bytes(Vec<u8>),
    /// Ordered sequence
    Array(Shared<Vec<Value>>),
    /// String-keyed record
    Record(Shared<Record>),
    /// Point in time
    Date(Shared<DateTime<Utc>>),
    /// Regular expression
    Pattern(Shared<Pattern>),
    /// Computed slot
    Function(Resolver),
    /// Value that settles later
    Deferred(Deferred),
}

impl Value {
    /// New array value
    #[must_use]
    pub fn array(items: Vec<Value>) -> Self {
        Self::Array(Shared::new(items))
    }

    /// New record value
    #[must_use]
    pub fn record(record: Record) -> Self {
        Self::Record(Shared::new(record))
    }

    /// New date value
    #[must_use]
    pub fn date(at: DateTime<Utc>) -> Self {
        Self::Date(Shared::new(at))
    }

    /// New pattern value
    #[must_use]
    pub fn pattern(pattern: Pattern) -> Self {
        Self::Pattern(Shared::new(pattern))
    }

    /// New resolver value
    pub fn function<F>(func: F) -> Self
    where
        F: Fn(&Shared<Record>, &[Value]) -> saslmech_common::Result<Value>
            + Send
            + Sync
            + 'static,
    {
        Self::Function(Resolver::new(func))
    }

    /// Whether the value counts as set
    ///
    /// `Undefined`, `Null`, `false`, `0`, `NaN` and the empty string are
    /// falsy; every other value, including empty containers and buffers, is
    /// truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Whether this is the `Undefined` marker
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Short name of the variant, safe to log
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Array(_) => "array",
            Self::Record(_) => "record",
            Self::Date(_) => "date",
            Self::Pattern(_) => "pattern",
            Self::Function(_) => "function",
            Self::Deferred(_) => "deferred",
        }
    }

    /// Text contents, if this is a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric contents, if this is a number
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Buffer contents, if this is a binary buffer
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Record handle, if this is a record
    #[must_use]
    pub fn as_record(&self) -> Option<&Shared<Record>> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Array handle, if this is an array
    #[must_use]
    pub fn as_array(&self) -> Option<&Shared<Vec<Value>>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }
}

/// Strict equality: scalars and buffers compare by content, everything held
/// through a handle compares by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a.ptr_eq(b),
            (Self::Record(a), Self::Record(b)) => a.ptr_eq(b),
            (Self::Date(a), Self::Date(b)) => a.ptr_eq(b),
            (Self::Pattern(a), Self::Pattern(b)) => a.ptr_eq(b),
            (Self::Function(a), Self::Function(b)) => a.ptr_eq(b),
            (Self::Deferred(a), Self::Deferred(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::array(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::record(value)
    }
}

impl From<Shared<Record>> for Value {
    fn from(value: Shared<Record>) -> Self {
        Self::Record(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::date(value)
    }
}

impl From<Pattern> for Value {
    fn from(value: Pattern) -> Self {
        Self::pattern(value)
    }
}

impl From<Resolver> for Value {
    fn from(value: Resolver) -> Self {
        Self::Function(value)
    }
}

impl From<Deferred> for Value {
    fn from(value: Deferred) -> Self {
        Self::Deferred(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}
