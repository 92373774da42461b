//! Fallback parameters for the key-derivation step of mechanisms
//!
//! Mechanisms derive their salted password with these when the caller
//! configures nothing else. The derivation itself lives in the mechanisms.

use crate::binary::{binary_to_bytes, bytes_to_binary};
use crate::value::{Record, Value};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use saslmech_common::{bail, ensure, Error, ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default pseudo-random function name
pub const DEFAULT_PRF: &str = "sha1";

/// Default iteration count
pub const DEFAULT_ITERATIONS: u32 = 4096;

/// Base64 text of the default salt
pub const DEFAULT_SALT_B64: &str =
    "XJLr3lZl5uJxIW6U8NrYNBnepmwqds4x1X5SpYOULYQjJUw13WrWHJGW8RO8peCU6YjplCIjEpvTnbixxQF6Pw==";

/// Default salt bytes, decoded from [`DEFAULT_SALT_B64`] on first use
pub static DEFAULT_SALT_BYTES: Lazy<Vec<u8>> = Lazy::new(|| match decode_salt(DEFAULT_SALT_B64) {
    Ok(bytes) => bytes,
    Err(e) => {
        log::error!("default salt literal failed to decode: {e}");
        Vec::new()
    }
});

/// Decode a base64 salt
///
/// # Errors
///
/// Returns an encoding error if `encoded` is not standard padded base64.
pub fn decode_salt(encoded: &str) -> Result<Vec<u8>> {
    STANDARD.decode(encoded.trim()).map_err(|e| {
        Error::with_source(ErrorKind::Encoding, e).context("salt is not valid base64")
    })
}

/// Default salt as a binary string
pub static DEFAULT_SALT: Lazy<String> = Lazy::new(|| bytes_to_binary(&DEFAULT_SALT_BYTES));

/// Pseudo-random function used by the key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prf {
    /// HMAC-SHA-1
    #[default]
    Sha1,
    /// HMAC-SHA-256
    Sha256,
    /// HMAC-SHA-512
    Sha512,
}

impl Prf {
    /// Lowercase name, as used in config records
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Prf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            _ => bail!(configuration, "unsupported PRF `{s}`"),
        }
    }
}

/// Parameters for a salted password derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationParams {
    /// Pseudo-random function
    #[serde(default)]
    pub prf: Prf,
    /// Salt bytes
    #[serde(default = "default_salt")]
    pub salt: Vec<u8>,
    /// Iteration count
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

fn default_salt() -> Vec<u8> {
    DEFAULT_SALT_BYTES.clone()
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

impl Default for DerivationParams {
    fn default() -> Self {
        Self {
            prf: Prf::default(),
            salt: default_salt(),
            iterations: default_iterations(),
        }
    }
}

impl DerivationParams {
    /// Use a different PRF
    #[must_use]
    pub fn with_prf(mut self, prf: Prf) -> Self {
        self.prf = prf;
        self
    }

    /// Use a different salt
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Use a salt given as base64 text
    ///
    /// # Errors
    ///
    /// Returns an encoding error if `encoded` does not decode.
    pub fn with_salt_b64(mut self, encoded: &str) -> Result<Self> {
        self.salt = decode_salt(encoded)?;
        Ok(self)
    }

    /// Use a different iteration count
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Express the parameters as a config record (`prf`, `salt`,
    /// `iterations`) so they can be layered with [`extend`](crate::extend)
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("prf", self.prf.as_str());
        record.insert("salt", self.salt.clone());
        record.insert("iterations", self.iterations);
        record
    }

    /// Read parameters from a config record
    ///
    /// Absent or `Undefined` keys keep their defaults. `salt` may be a
    /// binary buffer or a binary string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown PRF, a salt of the wrong
    /// type, or an iteration count that is not a positive integer.
    pub fn from_record(record: &Record) -> Result<Self> {
        let mut params = Self::default();

        match record.get("prf") {
            None | Some(Value::Undefined) => {}
            Some(Value::String(name)) => params.prf = name.parse()?,
            Some(other) => bail!(
                configuration,
                "`prf` must be a string, got {}",
                other.kind_name()
            ),
        }

        match record.get("salt") {
            None | Some(Value::Undefined) => {}
            Some(Value::Bytes(bytes)) => params.salt.clone_from(bytes),
            Some(Value::String(s)) => params.salt = binary_to_bytes(s),
            Some(other) => bail!(
                configuration,
                "`salt` must be bytes or a binary string, got {}",
                other.kind_name()
            ),
        }

        match record.get("iterations") {
            None | Some(Value::Undefined) => {}
            Some(Value::Number(n)) => params.iterations = iteration_count(*n)?,
            Some(other) => bail!(
                configuration,
                "`iterations` must be a number, got {}",
                other.kind_name()
            ),
        }

        Ok(params)
    }
}

fn iteration_count(n: f64) -> Result<u32> {
    ensure!(
        n.fract() == 0.0 && (1.0..=f64::from(u32::MAX)).contains(&n),
        configuration,
        "`iterations` must be a positive integer, got {n}"
    );
    // range checked above
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = n as u32;
    Ok(count)
}
