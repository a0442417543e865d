//! Parse error types.
//!
//! Every error is fatal to the parse that produced it. Each kind maps to a
//! stable [`ErrorCode`] so it can be looked up with `tml explain`.

use std::fmt;

use thiserror::Error;
use tml_diagnostic::{Diagnostic, ErrorCode};
use tml_ir::{Span, Token};

/// Numeric shape a number token had to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Reps and sets.
    Integer,
    /// Weights and RPE values.
    Float,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => f.write_str("integer"),
            NumberKind::Float => f.write_str("decimal number"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseErrorKind {
    /// The token does not fit the grammar at this position.
    #[error("bad token: {found}, before: {next}")]
    UnexpectedToken { found: Token, next: Token },

    #[error("invalid unit `{unit}`")]
    InvalidUnit { unit: String },

    #[error("invalid RPE `{value}`: expected a value between {min} and {max}")]
    InvalidRpe { value: f64, min: f64, max: f64 },

    #[error("invalid {expected} `{literal}`")]
    InvalidNumber {
        literal: String,
        expected: NumberKind,
    },
}

/// Parse error with the span it points at.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    /// `found` was not expected here; `next` is the token after it.
    pub fn unexpected(found: Token, next: Token) -> Self {
        let span = found.span;
        ParseError {
            kind: ParseErrorKind::UnexpectedToken { found, next },
            span,
        }
    }

    pub fn invalid_unit(unit: impl Into<String>, span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidUnit { unit: unit.into() },
            span,
        }
    }

    pub fn invalid_rpe(value: f64, (min, max): (f64, f64), span: Span) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidRpe { value, min, max },
            span,
        }
    }

    pub fn invalid_number(token: &Token, expected: NumberKind) -> Self {
        ParseError {
            kind: ParseErrorKind::InvalidNumber {
                literal: token.literal.clone(),
                expected,
            },
            span: token.span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::InvalidUnit { .. } => ErrorCode::E1002,
            ParseErrorKind::InvalidRpe { .. } => ErrorCode::E1003,
            ParseErrorKind::InvalidNumber { .. } => ErrorCode::E1004,
        }
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.to_string());

        match &self.kind {
            ParseErrorKind::UnexpectedToken { found, next } => {
                let diagnostic =
                    diagnostic.with_label(self.span, format!("unexpected {}", found.kind));
                if next.span == Span::DUMMY {
                    diagnostic
                } else {
                    diagnostic.with_secondary_label(next.span, format!("before {}", next.kind))
                }
            }
            ParseErrorKind::InvalidUnit { .. } => {
                diagnostic.with_label(self.span, "not a valid unit")
            }
            ParseErrorKind::InvalidRpe { min, max, .. } => {
                diagnostic.with_label(self.span, format!("outside {min}..={max}"))
            }
            ParseErrorKind::InvalidNumber { expected, .. } => match expected {
                NumberKind::Integer => diagnostic
                    .with_label(self.span, "expected an integer")
                    .with_note("reps and sets are whole numbers"),
                NumberKind::Float => {
                    diagnostic.with_label(self.span, "expected a decimal number")
                }
            },
        }
    }
}
