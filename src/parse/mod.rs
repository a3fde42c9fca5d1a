//! First-class parsers over byte-buffer cursors
//!
//! This module and its submodules hold the leaf types of the engine:
//!
//! * [`cursor`] defines [`Cursor`], the immutable buffer-plus-position
//!   input every parser consumes.
//! * [`outcome`] defines [`Outcome<T>`], the tagged success/failure result
//!   of a parser application, and documents the failure-cursor policies.
//! * The top level defines [`Parser<T>`] itself, a first-class value
//!   wrapping a pure function from a cursor to an outcome.
//!
//! Primitive parsers that actually read bytes live in [`crate::prim`]; the
//! combinator algebra is defined as inherent methods on [`Parser<T>`].
//!
//! # Purity
//!
//! A parser is referentially transparent: applying the same parser value
//! to equal cursors always yields equal outcomes. Parsers hold no mutable
//! state and perform no I/O, so a single parser value may be applied from
//! any number of threads concurrently — the closure behind it is required
//! to be `Send + Sync`, and construction enforces this.

pub mod cursor;
pub mod outcome;

use std::sync::Arc;

use self::cursor::Cursor;
use self::outcome::Outcome;

/// A first-class parser: a pure function from a [`Cursor`] to an
/// [`Outcome<T>`].
///
/// Parsers are ordinary values. They can be stored, passed around, cloned
/// (cheaply — a reference-count bump), and combined with the inherent
/// combinator methods without executing anything; execution happens only
/// when [`apply`](Parser::apply) is called.
///
/// # Examples
///
/// ```
/// use parsimony::{Cursor, Outcome, Parser};
///
/// // A parser that consumes nothing and always produces 42.
/// let fixed = Parser::new(|input| Outcome::success(42u32, input));
/// let outcome = fixed.apply(Cursor::new(vec![0xffu8]));
/// assert_eq!(outcome.into_success().map(|(v, _)| v), Some(42));
/// ```
pub struct Parser<T: 'static> {
    run: Arc<dyn Fn(Cursor) -> Outcome<T> + Send + Sync>,
}

impl<T: 'static> Parser<T> {
    /// Wraps a closure as a parser value.
    ///
    /// The closure must be pure with respect to its captured state: the
    /// engine assumes that applying a parser twice to the same cursor
    /// yields equal outcomes.
    pub fn new(run: impl Fn(Cursor) -> Outcome<T> + Send + Sync + 'static) -> Self {
        Self { run: Arc::new(run) }
    }

    /// Applies the parser to `input`, producing an outcome.
    #[must_use]
    pub fn apply(&self, input: Cursor) -> Outcome<T> {
        (self.run)(input)
    }
}

impl<T: 'static> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_is_repeatable() {
        let parser = Parser::new(|input: Cursor| {
            if input.at_end() {
                Outcome::failure(input.clone(), input)
            } else {
                Outcome::success(input.current(), input.advance())
            }
        });
        let cursor = Cursor::new(vec![0xabu8]);
        assert_eq!(parser.apply(cursor.clone()), parser.apply(cursor));
    }

    #[test]
    fn clones_share_behavior() {
        let parser = Parser::new(|input| Outcome::success((), input));
        let copy = parser.clone();
        let cursor = Cursor::new(vec![1u8, 2]);
        assert_eq!(parser.apply(cursor.clone()), copy.apply(cursor));
    }

    #[test]
    fn parser_threadsafe() {
        fn check<T: Send + Sync>() {}
        check::<Parser<u8>>();
        check::<Parser<Vec<u16>>>();
    }
}
