//! Token types for the TML lexer.
//!
//! The token set is closed: structural single-character tokens (`#`, `@`,
//! `x`, newline), the context-sensitive lexemes (identifier, label, number,
//! text) and the end-of-input marker.

use super::Span;
use std::fmt;

/// Token kinds for TML.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. Always the last token of a `TokenList`.
    Eof,
    /// `#`, opens an exercise section.
    Hash,
    /// `@`, introduces an RPE value.
    At,
    /// `x`, separates weight from reps and reps from sets.
    Cross,
    /// Free text; may span several lines.
    Text,
    /// Exercise name, the rest of the line after `#`.
    Ident,
    /// Unit glued to (or following) a number, e.g. `kg` in `60kg`.
    Label,
    /// Digits and decimal points.
    Number,
    /// A newline.
    Delimiter,
}

impl TokenKind {
    /// Name of the kind as it appears in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Hash => "#",
            TokenKind::At => "@",
            TokenKind::Cross => "x",
            TokenKind::Text => "TEXT",
            TokenKind::Ident => "IDENT",
            TokenKind::Label => "LABEL",
            TokenKind::Number => "NUMBER",
            TokenKind::Delimiter => "DELIMITER",
        }
    }

    /// Whether this kind ends a block of rows.
    #[inline]
    pub fn ends_rows(self) -> bool {
        matches!(self, TokenKind::Text | TokenKind::Hash | TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexeme with its literal text and source span.
///
/// Tokens own their literal, so they outlive the lexer that produced them.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// End-of-input token located at `offset`.
    pub fn eof(offset: u32) -> Self {
        Token {
            kind: TokenKind::Eof,
            literal: String::new(),
            span: Span::point(offset),
        }
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.literal, self.span)
    }
}

/// Renders as `Token{KIND, literal}`, the shape used in malformed-token
/// messages.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token{{{}, {}}}", self.kind, self.literal)
    }
}

static DANGLING_EOF: Token = Token {
    kind: TokenKind::Eof,
    literal: String::new(),
    span: Span::DUMMY,
};

/// Ordered token sequence produced by one lexer pass.
///
/// Lookups past the end return the final token, which the lexer guarantees
/// to be `Eof`. This makes the tail of the sequence idempotent.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

#[allow(
    clippy::len_without_is_empty,
    reason = "a lexed list always ends in `Eof`"
)]
impl TokenList {
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Token at `index`, or the final token once `index` runs past the end.
    ///
    /// An empty list (never produced by the lexer) yields a dangling `Eof`.
    #[inline]
    pub fn get_clamped(&self, index: usize) -> &Token {
        self.tokens
            .get(index)
            .or_else(|| self.tokens.last())
            .unwrap_or(&DANGLING_EOF)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
