//! The combinator algebra over [`Parser<T>`]
//!
//! Each method below builds a new parser out of existing ones without
//! executing anything; the combined parser only runs when applied to a
//! cursor. All repetition is loop-based, so stack depth is bounded by
//! grammar nesting, never by input length.
//!
//! The failure-cursor conventions implemented here are documented in
//! [`crate::parse::outcome`]: everything except [`times`](Parser::times)
//! anchors its reported failure at the cursor the combined parser was
//! given, while `times` exposes repetition progress.

use crate::parse::cursor::Cursor;
use crate::parse::outcome::Outcome;
use crate::parse::Parser;

impl<T: 'static> Parser<T> {
    /// Transforms the produced value with `f`, leaving consumption
    /// untouched.
    ///
    /// On failure of the underlying parser, the failure is re-anchored at
    /// the cursor given to the combined parser.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + Send + Sync + 'static) -> Parser<U> {
        Parser::new(move |input: Cursor| match self.apply(input.clone()) {
            Outcome::Success { value, remainder } => Outcome::success(f(value), remainder),
            Outcome::Failure(fail) => Outcome::failure(input, fail.at),
        })
    }

    /// Monadic sequencing: applies `self`, then applies the parser built
    /// by `f` from the produced value to the remainder.
    ///
    /// This is the core sequencing primitive; every multi-step grammar in
    /// this crate is a chain of `bind` calls. A failure of either step is
    /// anchored at the cursor originally given to the combined parser,
    /// deliberately discarding any partial-progress position (see
    /// [`crate::parse::outcome`]); the attempt position survives in the
    /// failure's `at` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use parsimony::{prim, Cursor};
    ///
    /// // Parse one byte, then expect the next byte to equal it.
    /// let doubled = prim::any_byte().bind(|b| prim::byte_equal_to(b));
    /// assert!(doubled.apply(Cursor::new(vec![7u8, 7])).is_success());
    /// assert!(doubled.apply(Cursor::new(vec![7u8, 8])).is_failure());
    /// ```
    pub fn bind<U: 'static>(
        self,
        f: impl Fn(T) -> Parser<U> + Send + Sync + 'static,
    ) -> Parser<U> {
        Parser::new(move |input: Cursor| match self.apply(input.clone()) {
            Outcome::Success { value, remainder } => match f(value).apply(remainder) {
                Outcome::Success { value, remainder } => Outcome::success(value, remainder),
                Outcome::Failure(fail) => Outcome::failure(input, fail.at),
            },
            Outcome::Failure(fail) => Outcome::failure(input, fail.at),
        })
    }

    /// Ordered alternation: tries `self`; on failure, applies `second` to
    /// the same original input and returns its outcome as-is.
    ///
    /// Correctness relies on failures never consuming input, which every
    /// primitive in this crate guarantees.
    pub fn or(self, second: Parser<T>) -> Parser<T> {
        Parser::new(move |input: Cursor| match self.apply(input.clone()) {
            success @ Outcome::Success { .. } => success,
            Outcome::Failure(_) => second.apply(input),
        })
    }

    /// Negative lookahead: succeeds (producing `()`, consuming nothing)
    /// exactly when `self` fails, and fails at the original input when
    /// `self` succeeds. Zero-width in every case.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Parser<()> {
        Parser::new(move |input: Cursor| match self.apply(input.clone()) {
            Outcome::Success { .. } => Outcome::failure(input.clone(), input),
            Outcome::Failure(_) => Outcome::success((), input),
        })
    }

    /// Zero-or-more repetition. Never fails.
    ///
    /// Repeatedly applies `self`, accumulating produced values in order,
    /// until an application either fails or succeeds without advancing the
    /// cursor. The zero-progress guard (cursor equality) bounds repetition
    /// of vacuously-successful parsers such as [`not`](Self::not); a
    /// zero-progress success contributes no element to the result.
    pub fn many(self) -> Parser<Vec<T>> {
        Parser::new(move |input: Cursor| {
            let mut values = Vec::new();
            let mut rest = input;
            loop {
                match self.apply(rest.clone()) {
                    Outcome::Success { value, remainder } => {
                        if remainder == rest {
                            break;
                        }
                        values.push(value);
                        rest = remainder;
                    }
                    Outcome::Failure(_) => break,
                }
            }
            Outcome::success(values, rest)
        })
    }

    /// Exactly-`count` repetition.
    ///
    /// Applies `self` `count` times in sequence; if any application fails,
    /// the whole combinator fails. Unlike [`bind`](Self::bind), the
    /// failure's `at` cursor is the one reached just before the failing
    /// attempt, exposing how far the repetition progressed. `count == 0`
    /// succeeds immediately with an empty sequence.
    pub fn times(self, count: usize) -> Parser<Vec<T>> {
        Parser::new(move |input: Cursor| {
            let mut values = Vec::with_capacity(count);
            let mut rest = input.clone();
            for _ in 0..count {
                match self.apply(rest.clone()) {
                    Outcome::Success { value, remainder } => {
                        values.push(value);
                        rest = remainder;
                    }
                    Outcome::Failure(_) => return Outcome::failure(input.clone(), rest),
                }
            }
            Outcome::success(values, rest)
        })
    }
}
