//! Primitive parsers: the only place bytes are read from the buffer
//!
//! Every primitive checks [`at_end`](crate::Cursor::at_end) before
//! reading, and fails without consuming input — the cursor carried by a
//! primitive failure is exactly the cursor the primitive was applied to.

use crate::parse::cursor::Cursor;
use crate::parse::outcome::Outcome;
use crate::parse::Parser;

/// Consumes a single byte accepted by `predicate`.
///
/// Fails without consuming if the cursor is at the end of its buffer or
/// the predicate rejects the current byte.
pub fn byte_matching(predicate: impl Fn(u8) -> bool + Send + Sync + 'static) -> Parser<u8> {
    Parser::new(move |input: Cursor| {
        if input.at_end() || !predicate(input.current()) {
            return Outcome::failure(input.clone(), input);
        }
        let value = input.current();
        Outcome::success(value, input.advance())
    })
}

/// Consumes any single byte.
pub fn any_byte() -> Parser<u8> {
    byte_matching(|_| true)
}

/// Consumes a single byte equal to `expected`.
pub fn byte_equal_to(expected: u8) -> Parser<u8> {
    byte_matching(move |byte| byte == expected)
}

/// Consumes two bytes and composes them big-endian into a `u16`.
///
/// ```
/// use parsimony::{prim, Cursor};
///
/// let outcome = prim::word().apply(Cursor::new(vec![0xffu8, 0xd8]));
/// assert_eq!(outcome.into_success().map(|(v, _)| v), Some(0xffd8));
/// ```
pub fn word() -> Parser<u16> {
    any_byte().bind(|high| any_byte().map(move |low| (u16::from(high) << 8) | u16::from(low)))
}

/// Consumes a big-endian `u16` accepted by `predicate`.
///
/// Failure is non-consuming even though two bytes are tentatively read:
/// whether the word could not be read at all or the predicate rejected it,
/// the reported cursor is the original input.
pub fn word_matching(predicate: impl Fn(u16) -> bool + Send + Sync + 'static) -> Parser<u16> {
    let inner = word();
    Parser::new(move |input: Cursor| match inner.apply(input.clone()) {
        Outcome::Success { value, remainder } if predicate(value) => {
            Outcome::success(value, remainder)
        }
        Outcome::Success { .. } => Outcome::failure(input.clone(), input),
        Outcome::Failure(fail) => Outcome::failure(input, fail.at),
    })
}

/// Consumes the exact big-endian `u16` `expected`.
///
/// Implemented by decomposing `expected` into its high and low bytes and
/// sequencing two [`byte_equal_to`] primitives, rather than matching the
/// whole word atomically: the decomposed form reuses the single-byte
/// primitive uniformly and lets a failure record which byte mismatched.
pub fn word_equal_to(expected: u16) -> Parser<u16> {
    let high = (expected >> 8) as u8;
    let low = (expected & 0x00ff) as u8;
    byte_equal_to(high)
        .bind(move |_| byte_equal_to(low))
        .map(move |_| expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex;

    #[test]
    fn byte_matching_consumes_exactly_one_on_success() {
        let parser = byte_matching(|b| b & 1 == 0);
        let cursor = Cursor::new(vec![0x02u8, 0x03]);
        match parser.apply(cursor.clone()) {
            Outcome::Success { value, remainder } => {
                assert_eq!(value, 0x02);
                assert_eq!(remainder.position(), cursor.position() + 1);
                assert!(remainder.same_buffer(&cursor));
            }
            Outcome::Failure(_) => panic!("even byte must match"),
        }
    }

    #[test]
    fn byte_matching_fails_without_consuming() {
        let parser = byte_matching(|b| b & 1 == 0);
        let cursor = Cursor::new(vec![0x03u8]);
        match parser.apply(cursor.clone()) {
            Outcome::Failure(fail) => {
                assert_eq!(fail.origin, cursor);
                assert_eq!(fail.at, cursor);
            }
            Outcome::Success { .. } => panic!("odd byte must not match"),
        }
    }

    #[test]
    fn byte_matching_fails_at_end_without_reading() {
        let cursor = Cursor::new(Vec::<u8>::new());
        assert!(any_byte().apply(cursor.clone()).is_failure());
        // The predicate must not run on an exhausted cursor.
        let poisoned = byte_matching(|_| panic!("predicate ran at end of buffer"));
        assert!(poisoned.apply(cursor).is_failure());
    }

    #[test]
    fn word_composes_big_endian_and_advances_two() {
        for (high, low) in [(0x00u8, 0x00u8), (0xff, 0xd8), (0x12, 0x34)] {
            let cursor = Cursor::new(vec![high, low, 0xee]);
            match word().apply(cursor) {
                Outcome::Success { value, remainder } => {
                    assert_eq!(value, (u16::from(high) << 8) | u16::from(low));
                    assert_eq!(remainder.position(), 2);
                }
                Outcome::Failure(_) => panic!("two bytes available, word must succeed"),
            }
        }
    }

    #[test]
    fn word_fails_on_short_buffer() {
        assert!(word().apply(Cursor::new(vec![0xffu8])).is_failure());
        assert!(word().apply(Cursor::new(Vec::<u8>::new())).is_failure());
    }

    #[test]
    fn word_matching_rejection_is_non_consuming() {
        let parser = word_matching(|w| w == 0xffd8);
        let cursor = Cursor::new(hex!("ffd9"));
        match parser.apply(cursor.clone()) {
            Outcome::Failure(fail) => {
                // Two bytes were tentatively read, but the failure is
                // anchored at the untouched input cursor.
                assert_eq!(fail.origin, cursor);
                assert_eq!(fail.at, cursor);
            }
            Outcome::Success { .. } => panic!("0xffd9 must be rejected"),
        }
    }

    #[test]
    fn word_matching_accepts_through() {
        let parser = word_matching(|w| w != 0xffda);
        let cursor = Cursor::new(hex!("ffe0"));
        assert_eq!(
            parser.apply(cursor.clone()).into_success(),
            Some((0xffe0, cursor.advance().advance()))
        );
    }

    #[test]
    fn word_equal_to_matches_exact_word() {
        let cursor = Cursor::new(hex!("ffda00"));
        match word_equal_to(0xffda).apply(cursor) {
            Outcome::Success { value, remainder } => {
                assert_eq!(value, 0xffda);
                assert_eq!(remainder.position(), 2);
            }
            Outcome::Failure(_) => panic!("exact word must match"),
        }
    }

    #[test]
    fn word_equal_to_records_partial_byte_failure() {
        // First byte matches, second does not: the attempt position shows
        // the mismatch happened one byte in.
        let cursor = Cursor::new(hex!("ffd8"));
        match word_equal_to(0xffda).apply(cursor.clone()) {
            Outcome::Failure(fail) => {
                assert_eq!(fail.origin, cursor);
                assert_eq!(fail.at.position(), 1);
            }
            Outcome::Success { .. } => panic!("0xffd8 is not 0xffda"),
        }
    }
}
