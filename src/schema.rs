//! The sample segment grammar: a thin consumer of the engine
//!
//! The format parsed here is a simplified sequence of length-prefixed
//! segments, modelled on the marker/length segments of tagged binary
//! container formats: a fixed two-byte start marker, any number of
//! generic segments, and one terminal segment whose marker word is the
//! reserved [`DATA_MARKER`]. Each segment is a two-byte marker, a
//! two-byte length (which conventionally includes itself, so the payload
//! is `length - 2` bytes), and the payload, which is consumed and
//! discarded. The grammar shrinks every segment to a [`SegmentRecord`]
//! structural summary.
//!
//! Every sub-grammar is exposed as an explicit factory function; the
//! composed document grammar additionally lives behind the process-wide
//! static [`struct@DOCUMENT`], built once on first use. Construction is a
//! simple dependency DAG, leaves first, so there is no initialization-
//! order hazard.

use crate::error::{DecodeError, DecodeResult};
use crate::parse::cursor::Cursor;
use crate::parse::outcome::Outcome;
use crate::parse::Parser;
use crate::prim::{any_byte, word, word_equal_to, word_matching};
use lazy_static::lazy_static;
use std::sync::Arc;

#[cfg(feature = "serde_impls")]
use serde::ser::SerializeStruct;

/// Marker word opening a well-formed document (bytes `0xFF`, `0xD8`).
pub const START_MARKER: u16 = 0xffd8;

/// The reserved marker word of the terminal segment. Generic segments may
/// carry any marker word except this one.
pub const DATA_MARKER: u16 = 0xffda;

/// Structural summary of one parsed segment: its marker word and declared
/// length. Payload bytes are read and discarded during parsing, never
/// retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentRecord {
    /// The two-byte marker word identifying the segment's type.
    pub marker: u16,
    /// The declared segment length, which includes the length field
    /// itself.
    pub length: u16,
}

impl SegmentRecord {
    /// Constructs a record from a marker word and declared length.
    #[inline]
    #[must_use]
    pub const fn new(marker: u16, length: u16) -> Self {
        Self { marker, length }
    }

    /// Number of payload bytes the declared length accounts for.
    ///
    /// The length field conventionally includes its own two bytes; a
    /// declared length under 2 accounts for an empty payload rather than
    /// a negative one.
    #[inline]
    #[must_use]
    pub const fn payload_len(&self) -> usize {
        (self.length as usize).saturating_sub(2)
    }
}

#[cfg(feature = "serde_impls")]
impl serde::Serialize for SegmentRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut record = serializer.serialize_struct("SegmentRecord", 2)?;
        record.serialize_field("type", &self.marker)?;
        record.serialize_field("length", &self.length)?;
        record.end()
    }
}

/// The fixed two-byte start marker, projected to the constant
/// [`START_MARKER`].
///
/// Sequenced byte-by-byte so that a mismatch on the second byte records a
/// one-byte attempt position, like any other two-byte match in this
/// grammar.
pub fn start_marker() -> Parser<u16> {
    word_equal_to(START_MARKER)
}

/// One segment carrying any marker word except [`DATA_MARKER`].
///
/// Shape: excluded-marker word, length word, then exactly
/// `length - 2` arbitrary payload bytes consumed and discarded.
pub fn generic_segment() -> Parser<SegmentRecord> {
    segment_body(word_matching(|marker| marker != DATA_MARKER))
}

/// The terminal segment: same shape as [`generic_segment`], but matched on
/// the reserved [`DATA_MARKER`] itself.
///
/// Its declared length governs exactly how many trailing bytes are
/// consumed as its body; the grammar needs no knowledge of what follows.
pub fn terminal_segment() -> Parser<SegmentRecord> {
    segment_body(word_equal_to(DATA_MARKER))
}

/// Common marker/length/payload shape shared by both segment kinds.
fn segment_body(marker: Parser<u16>) -> Parser<SegmentRecord> {
    marker.bind(|marker| {
        word().bind(move |length| {
            let record = SegmentRecord::new(marker, length);
            any_byte().times(record.payload_len()).map(move |_| record)
        })
    })
}

/// The whole document: start marker, zero or more generic segments, then
/// one terminal segment.
///
/// Produces the generic segments in input order with the terminal record
/// appended last. A failure anywhere in the chain fails the whole parse;
/// no partial results are surfaced.
pub fn document() -> Parser<Vec<SegmentRecord>> {
    start_marker().bind(|_| {
        generic_segment().many().bind(|segments| {
            terminal_segment().map(move |terminal| {
                let mut records = segments.clone();
                records.push(terminal);
                records
            })
        })
    })
}

lazy_static! {
    /// Process-wide document grammar, built once on first use via
    /// [`document`]. Parsers are immutable `Send + Sync` values, so the
    /// static may be applied concurrently from any number of threads.
    pub static ref DOCUMENT: Parser<Vec<SegmentRecord>> = document();
}

/// Parses a whole buffer as a document, mapping the outcome to a
/// [`DecodeResult`].
///
/// A grammar mismatch is reported as the generic [`DecodeError::Failed`],
/// with no structured diagnostic. When the `check_complete_parse` feature
/// is enabled, a successful parse that leaves unconsumed bytes behind is
/// additionally rejected with [`DecodeError::NonEmpty`].
///
/// # Examples
///
/// ```
/// use parsimony::{hex, try_decode, SegmentRecord};
///
/// let records = try_decode(hex!("ffd8ffe00004aabbffda0002")).unwrap();
/// assert_eq!(
///     records,
///     vec![SegmentRecord::new(0xffe0, 4), SegmentRecord::new(0xffda, 2)]
/// );
/// assert!(try_decode(hex!("0000")).is_err());
/// ```
pub fn try_decode<B>(buf: B) -> DecodeResult<Vec<SegmentRecord>>
where
    B: Into<Arc<[u8]>>,
{
    match DOCUMENT.apply(Cursor::new(buf)) {
        Outcome::Success { value, remainder } => finish(value, remainder),
        Outcome::Failure(_) => Err(DecodeError::Failed),
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "check_complete_parse")] {
        fn finish(value: Vec<SegmentRecord>, remainder: Cursor) -> DecodeResult<Vec<SegmentRecord>> {
            if remainder.at_end() {
                Ok(value)
            } else {
                Err(DecodeError::NonEmpty {
                    residual: remainder.remaining(),
                })
            }
        }
    } else {
        fn finish(value: Vec<SegmentRecord>, remainder: Cursor) -> DecodeResult<Vec<SegmentRecord>> {
            let _ = remainder;
            Ok(value)
        }
    }
}
