//! Byte-wise exclusive-or over binary buffers
//!
//! This is a mixing primitive for challenge-response math (e.g. combining a
//! client key with a signature to form a proof). It is not a constant-time
//! comparison.

use crate::binary::binary_to_bytes;
use crate::value::Value;
use saslmech_common::{bail, Result};
use std::borrow::Cow;

/// XOR two buffers
///
/// The result is as long as the longer input; past the end of the shorter
/// one its bytes are taken as zero.
#[must_use]
pub fn xor(s1: impl AsRef<[u8]>, s2: impl AsRef<[u8]>) -> Vec<u8> {
    let (s1, s2) = (s1.as_ref(), s2.as_ref());
    let (long, short) = if s1.len() >= s2.len() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    let mut output = long.to_vec();
    for (out, b) in output.iter_mut().zip(short) {
        *out ^= b;
    }
    output
}

/// XOR two config values
///
/// Each operand must be a binary buffer or a string; strings are read as
/// binary strings (see [`binary_to_bytes`]), not as UTF-8.
///
/// # Errors
///
/// Returns a type error naming the first operand that is neither.
pub fn xor_values(s1: &Value, s2: &Value) -> Result<Vec<u8>> {
    let s1 = operand_bytes(s1, "s1")?;
    let s2 = operand_bytes(s2, "s2")?;
    Ok(xor(s1, s2))
}

fn operand_bytes<'a>(value: &'a Value, name: &str) -> Result<Cow<'a, [u8]>> {
    match value {
        Value::Bytes(bytes) => Ok(Cow::Borrowed(bytes)),
        Value::String(s) => Ok(Cow::Owned(binary_to_bytes(s))),
        other => bail!(type_error, "{name} must be a buffer (got {})", other.kind_name()),
    }
}
