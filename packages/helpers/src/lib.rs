//! Utility layer shared by SASL mechanism implementations
//!
//! Mechanisms (SCRAM and friends) build their state machines on a handful
//! of primitives:
//!
//! - [`promised_value`]: resolve a config slot that holds either data or a
//!   function producing it, synchronously or asynchronously
//! - [`clone_value`] and [`extend`]: build layered config records
//! - [`make_array`]: coerce any value into a sequence
//! - [`xor`] / [`xor_values`]: byte-wise XOR for proof/signature mixing
//! - [`DEFAULT_PRF`], [`DEFAULT_SALT`], [`DEFAULT_ITERATIONS`]: fallback
//!   key-derivation parameters
//!
//! ```
//! use saslmech_helpers::{extend, promised_value, Record, Shared, Value};
//!
//! # async fn demo() -> saslmech_helpers::Result<()> {
//! let defaults = Shared::new(Record::from_iter([("username", "user")]));
//! let options = Shared::new(Record::from_iter([(
//!     "password",
//!     Value::function(|_config, _args| Ok(Value::from("pencil"))),
//! )]));
//! let config = extend(Some(defaults), Some(&options));
//!
//! let password = promised_value(&config, "password", &[]).await?;
//! assert_eq!(password, Value::from("pencil"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod array;
pub mod binary;
pub mod clone;
pub mod defaults;
pub mod resolve;
pub mod value;
pub mod xor;

pub use array::make_array;
pub use binary::{binary_to_bytes, bytes_to_binary};
pub use clone::{clone_value, extend};
pub use defaults::{
    decode_salt, DerivationParams, Prf, DEFAULT_ITERATIONS, DEFAULT_PRF, DEFAULT_SALT, DEFAULT_SALT_B64,
    DEFAULT_SALT_BYTES,
};
pub use resolve::{promised_value, PromisedValue};
pub use value::{Deferred, Pattern, PatternFlags, Record, Resolver, Shared, Value};
pub use xor::{xor, xor_values};

// Re-export the shared error types
pub use saslmech_common::{Error, ErrorKind, Result};
