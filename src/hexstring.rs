//! Hex-encoded views of binary data
//!
//! Byte-buffers in tests, benches, and rendered output are far more
//! legible as hex-strings — ASCII strings matching `([0-9a-fA-F]{2})*`,
//! where each aligned character pair encodes one byte
//! (`"deadbeef" ~ [0xde, 0xad, 0xbe, 0xef]`). This module converts in
//! both directions and provides the [`hex!`](crate::hex) macro for
//! lightweight literal construction.

use crate::error::ConvError;
use std::fmt::Write;

/// Formats a sequence of bytes into an undelimited lowercase hexadecimal
/// `String`.
///
/// # Examples
///
/// ```
/// use parsimony::hexstring::hex_of_bytes;
/// assert_eq!(hex_of_bytes(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
/// ```
#[must_use]
pub fn hex_of_bytes(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        match write!(&mut hex, "{byte:02x}") {
            Ok(()) => (),
            Err(_) => unreachable!("write to String should never fail"),
        }
    }
    hex
}

/// Parses a hex-encoded string into the bytes it represents.
///
/// Case-insensitive: `"FFD8"` and `"ffd8"` decode identically.
///
/// # Errors
///
/// Returns [`ConvError::OddParity`] if the string cannot be split into
/// aligned pairs, and [`ConvError::InvalidDigit`] if any pair is not a
/// hexadecimal byte.
pub fn bytes_of_hex(hex: impl AsRef<str>) -> Result<Vec<u8>, ConvError> {
    let s = hex.as_ref();
    if !s.is_ascii() {
        return Err(ConvError::InvalidDigit {
            culprit: s.to_owned(),
        });
    }
    if s.len() % 2 != 0 {
        return Err(ConvError::OddParity { length: s.len() });
    }
    (0..s.len())
        .step_by(2)
        .map(|ix| {
            u8::from_str_radix(&s[ix..ix + 2], 16).map_err(|_| ConvError::InvalidDigit {
                culprit: s[ix..ix + 2].to_owned(),
            })
        })
        .collect()
}

/// Converts a hex-string literal or expression into a `Vec<u8>` by parsing
/// it as hexadecimal.
///
/// Panics if the argument is not a valid hex-string; intended for literals
/// in tests and benches, where a malformed string is a bug.
///
/// ```
/// assert_eq!(parsimony::hex!("ffd8"), vec![0xff, 0xd8]);
/// ```
#[macro_export]
macro_rules! hex {
    ($s:expr) => {{
        $crate::hexstring::bytes_of_hex($s).expect("hex! macro encountered error")
    }};
}
