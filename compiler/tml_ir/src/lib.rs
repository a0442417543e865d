//! TML IR - shared types for the TML front end.
//!
//! This crate contains the data structures passed between the lexer,
//! the parser and their callers:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - The document model (`Workout`, `Exercise`, `Row`)
//!
//! Nothing here depends on the lexer or parser, so tooling that only needs
//! to inspect a parsed workout can depend on this crate alone.

mod ast;
mod span;
mod token;

pub use ast::{Exercise, Row, Workout, COUNT_UNIT};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
