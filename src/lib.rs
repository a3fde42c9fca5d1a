//! Parser-combinator engine for byte-oriented binary formats
//!
//! # Overview
//!
//! This library provides a small algebra of composable parsers over in-memory
//! byte-buffers, together with a sample grammar for a simplified family of
//! tagged binary container formats built out of marker/length segments.
//!
//! The core of the library is deliberately minimal: a [`Cursor`] is an
//! immutable view into a shared byte-buffer, a [`Parser<T>`] is a first-class
//! pure function from a cursor to an [`Outcome<T>`], and every multi-step
//! grammar is assembled from single-byte primitives using a handful of
//! combinators ([`map`], [`bind`], [`or`], [`not`], [`many`], and [`times`]).
//! Composition never executes anything; a composed parser is an ordinary
//! value that only does work when applied to a cursor.
//!
//! Backtracking is driven entirely by the outcome type: a failing parser
//! reports the cursor it was handed rather than consuming input, which is
//! what makes alternation ([`or`]) sound. The one intentional exception is
//! [`times`], which reports how far repetition progressed before the failing
//! attempt; see the [`parse::outcome`] module documentation for the exact
//! policies and the rationale for carrying both cursors in a failure.
//!
//! # The sample grammar
//!
//! The [`schema`] module composes the primitives into a parser for a
//! document of length-prefixed segments: a fixed two-byte start marker,
//! any number of generic segments, and a single terminal segment whose
//! marker word is reserved. Each segment is shrunk to a structural
//! [`SegmentRecord`] summary; payload bytes are consumed and discarded.
//! The composed grammar is exposed both as explicit factory functions and
//! as the process-wide static [`struct@schema::DOCUMENT`].
//!
//! # Scope
//!
//! The engine operates on fully materialized buffers only: no streaming or
//! incremental input, no diagnostic positions beyond the cursors carried by
//! a failure outcome, no memoization, and no left-recursion handling. File
//! I/O and rendering live in the thin driver binary, outside the library.
//!
//! [`map`]: Parser::map
//! [`bind`]: Parser::bind
//! [`or`]: Parser::or
//! [`not`]: Parser::not
//! [`many`]: Parser::many
//! [`times`]: Parser::times

mod combinator;
pub mod error;
pub mod hexstring;
pub mod parse;
pub mod prim;
pub mod schema;

pub use crate::error::{ConvError, DecodeError, DecodeResult};
pub use crate::parse::{
    cursor::Cursor,
    outcome::{Failure, Outcome},
    Parser,
};
pub use crate::schema::{try_decode, SegmentRecord, DATA_MARKER, START_MARKER};

pub use ::lazy_static::lazy_static;
