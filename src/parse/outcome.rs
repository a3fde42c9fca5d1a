//! The result type of applying a parser to a cursor
//!
//! An [`Outcome<T>`] is either a success carrying the produced value and a
//! remainder cursor, or a failure carrying the cursors relevant to the
//! failed attempt. Outcomes are plain immutable values; nothing in this
//! module executes parsers.
//!
//! # Failure-cursor policies
//!
//! Composite combinators must decide which cursor a failure reports. This
//! engine deliberately preserves two distinct policies side by side:
//!
//! * [`map`], [`bind`], [`or`], [`not`], and every primitive anchor their
//!   reported failure at the cursor originally handed to the combined
//!   parser. This is what makes alternation sound: the second branch of an
//!   [`or`] always restarts from the true original position.
//! * [`times`] reports the cursor reached just before the failing
//!   repetition, exposing how far the repetition progressed.
//!
//! Rather than unify the two (and lose information either way), a
//! [`Failure`] carries both cursors: [`origin`](Failure::origin) realises
//! the original-input policy and [`at`](Failure::at) the progress policy.
//! Consumers pick whichever anchor their combinator documents.
//!
//! [`map`]: crate::Parser::map
//! [`bind`]: crate::Parser::bind
//! [`or`]: crate::Parser::or
//! [`not`]: crate::Parser::not
//! [`times`]: crate::Parser::times

use crate::parse::cursor::Cursor;

/// Position information carried by a failed parse attempt.
///
/// See the [module documentation](self) for the two reporting policies
/// these fields realise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// The cursor originally handed to the parser whose application
    /// failed. Combinators that backtrack report this cursor.
    pub origin: Cursor,
    /// The cursor at which the failing attempt began. For primitives this
    /// equals `origin`; for [`times`](crate::Parser::times) it records the
    /// repetition's progress.
    pub at: Cursor,
}

/// Tagged success/failure result of applying a parser to a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The parser matched, producing `value` and leaving `remainder`
    /// pointing at the first unconsumed byte.
    Success {
        /// The value produced by the parser.
        value: T,
        /// The cursor immediately after the consumed input.
        remainder: Cursor,
    },
    /// The parser did not match. No input is consumed on failure.
    Failure(Failure),
}

impl<T> Outcome<T> {
    /// Constructs a successful outcome.
    #[inline]
    pub fn success(value: T, remainder: Cursor) -> Self {
        Self::Success { value, remainder }
    }

    /// Constructs a failed outcome anchored at `origin`, recording `at` as
    /// the position the failing attempt began from.
    #[inline]
    pub fn failure(origin: Cursor, at: Cursor) -> Self {
        Self::Failure(Failure { origin, at })
    }

    /// Returns `true` for the success case.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns `true` for the failure case.
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Destructs a successful outcome into its value and remainder, or
    /// `None` on failure.
    pub fn into_success(self) -> Option<(T, Cursor)> {
        match self {
            Self::Success { value, remainder } => Some((value, remainder)),
            Self::Failure(_) => None,
        }
    }
}
