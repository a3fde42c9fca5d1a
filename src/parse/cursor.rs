//! Immutable positions into shared byte-buffers
//!
//! This module defines [`Cursor`], the input type of every parser in this
//! crate. A cursor pairs a shared, read-only byte-buffer with a position
//! into it. Advancing a cursor never mutates anything: it produces a new
//! cursor value over the same buffer, one byte further along. The buffer
//! itself is held behind an [`Arc`] and is therefore never copied, no
//! matter how many cursors are derived from it or how many threads those
//! cursors are used on.
//!
//! # Equality
//!
//! Two cursors are equal if and only if they view the *same* buffer (by
//! identity, not by content) at the same position. Identity-based equality
//! is what the repetition combinators rely on to detect a zero-progress
//! parse: comparing positions alone would conflate cursors over unrelated
//! buffers that happen to share a position.
//!
//! # Preconditions
//!
//! [`current`](Cursor::current) and [`advance`](Cursor::advance) require
//! the cursor not to be at the end of its buffer, and panic otherwise.
//! An out-of-bounds read is a programming-contract violation, never a
//! recoverable parse failure: every combinator in this crate checks
//! [`at_end`](Cursor::at_end) before reading, so these panics are
//! unreachable from the engine itself.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

/// Immutable view over a shared byte-buffer at a fixed position.
///
/// Cloning a cursor is cheap (a reference-count bump and a `usize` copy),
/// and every cursor derived from a buffer keeps that buffer alive.
///
/// # Examples
///
/// ```
/// use parsimony::Cursor;
///
/// let cursor = Cursor::new(vec![0xde, 0xad]);
/// assert!(!cursor.at_end());
/// assert_eq!(cursor.current(), 0xde);
///
/// let next = cursor.advance();
/// assert_eq!(next.position(), 1);
/// assert_eq!(next.current(), 0xad);
/// assert!(next.advance().at_end());
/// ```
#[derive(Clone)]
pub struct Cursor {
    buf: Arc<[u8]>,
    pos: usize,
}

impl Cursor {
    /// Constructs a cursor at position `0` over `buf`.
    #[must_use]
    pub fn new(buf: impl Into<Arc<[u8]>>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// Returns `true` if and only if the position has reached the end of
    /// the buffer, i.e. there is no byte left to read.
    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Returns the byte at the current position without consuming it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end of its buffer. Callers must
    /// check [`at_end`](Self::at_end) first.
    #[inline]
    #[must_use]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Returns a new cursor over the same buffer, advanced by one byte.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end of its buffer.
    #[must_use]
    pub fn advance(&self) -> Self {
        assert!(
            !self.at_end(),
            "Cursor::advance: cannot advance past end of buffer (position {})",
            self.pos
        );
        Self {
            buf: Arc::clone(&self.buf),
            pos: self.pos + 1,
        }
    }

    /// Returns the current position within the buffer.
    ///
    /// The position is always in the range `0..=len`, where `len` is the
    /// length of the underlying buffer.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes between the current position and the
    /// end of the buffer.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if `self` and `other` view the same buffer, by
    /// identity rather than content.
    #[inline]
    #[must_use]
    pub fn same_buffer(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buf, &other.buf)
    }
}

impl PartialEq for Cursor {
    /// Identity-based equality: same buffer (not merely equal contents)
    /// and same position.
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.pos == other.pos
    }
}

impl Eq for Cursor {}

impl Debug for Cursor {
    /// Elides the buffer contents, which may be arbitrarily large.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.pos)
            .field("buffer_len", &self.buf.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_end_iff_position_reaches_length() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        for expected in 0..3 {
            assert_eq!(cursor.position(), expected);
            assert!(!cursor.at_end());
            cursor = cursor.advance();
        }
        assert_eq!(cursor.position(), 3);
        assert!(cursor.at_end());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn empty_buffer_starts_at_end() {
        let cursor = Cursor::new(Vec::<u8>::new());
        assert!(cursor.at_end());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn advance_preserves_buffer_identity() {
        let cursor = Cursor::new(vec![0xffu8, 0xd8]);
        let next = cursor.advance();
        assert!(cursor.same_buffer(&next));
        assert_ne!(cursor, next);
        assert_eq!(next, cursor.advance());
    }

    #[test]
    fn equality_requires_same_buffer_identity() {
        let left = Cursor::new(vec![0u8, 1]);
        let right = Cursor::new(vec![0u8, 1]);
        assert_eq!(left.position(), right.position());
        assert_ne!(left, right);
    }

    #[test]
    #[should_panic(expected = "cannot advance past end")]
    fn advance_at_end_panics() {
        let _ = Cursor::new(Vec::<u8>::new()).advance();
    }

    #[test]
    fn cursor_threadsafe() {
        fn check<T: Send + Sync>() {}
        check::<Cursor>();
    }
}
