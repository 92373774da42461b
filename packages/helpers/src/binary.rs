//! Binary strings: text whose UTF-16 code units each carry one byte

/// Bytes of a binary string
///
/// Each UTF-16 code unit contributes its low 8 bits, so `"\u{00ff}"` is
/// `0xff`, chars above U+00FF are truncated, and a char outside the Basic
/// Multilingual Plane yields one byte per surrogate.
#[must_use]
pub fn binary_to_bytes(s: &str) -> Vec<u8> {
    // truncation to the low byte is the binary-string contract
    #[allow(clippy::cast_possible_truncation)]
    let bytes = s.encode_utf16().map(|unit| unit as u8).collect();
    bytes
}

/// Binary string holding `bytes`, one char (U+0000..=U+00FF) per byte
#[must_use]
pub fn bytes_to_binary(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
