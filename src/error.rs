//! Error types for the decode boundary and hex conversion
//!
//! Grammar mismatch inside the engine is never an error value: it is the
//! ordinary [`Outcome::Failure`](crate::Outcome::Failure) case. The types
//! here exist only at the edges — the whole-buffer decode entry-point and
//! the hex-string helpers.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors reported by the whole-buffer decode entry-point
/// [`try_decode`](crate::schema::try_decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The grammar did not match the buffer. Deliberately carries no
    /// structured diagnostic; position information is available only on
    /// the underlying failure outcome.
    Failed,
    /// The grammar matched but left unconsumed bytes behind. Only reported
    /// when the `check_complete_parse` feature is enabled.
    NonEmpty {
        /// Number of unconsumed bytes after the final cursor.
        residual: usize,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Failed => write!(f, "parse failed"),
            DecodeError::NonEmpty { residual } => {
                write!(f, "parse left {} unconsumed bytes in buffer", residual)
            }
        }
    }
}

impl Error for DecodeError {}

/// Type alias for `Result` with an error type of [`DecodeError`].
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Errors arising when interpreting a string as hex-encoded binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvError {
    /// The string has an odd number of characters and cannot be split
    /// into aligned byte pairs.
    OddParity {
        /// Length of the offending string.
        length: usize,
    },
    /// A character pair is not a valid hexadecimal byte.
    InvalidDigit {
        /// The offending character pair (or the whole string when it is
        /// not even ASCII).
        culprit: String,
    },
}

impl Display for ConvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConvError::OddParity { length } => {
                write!(f, "hex-string has odd length {}", length)
            }
            ConvError::InvalidDigit { culprit } => {
                write!(f, "invalid hexadecimal digit-pair '{}'", culprit)
            }
        }
    }
}

impl Error for ConvError {}

#[cfg(test)]
mod tests {
    fn check<T: Send + Sync>() {}

    #[test]
    fn decode_error_threadsafe() {
        check::<super::DecodeError>();
    }

    #[test]
    fn conv_error_threadsafe() {
        check::<super::ConvError>();
    }

    #[test]
    fn decode_error_display_is_generic() {
        assert_eq!(super::DecodeError::Failed.to_string(), "parse failed");
    }
}
