//! Recursive descent parser for TML workout logs.
//!
//! The parser walks the lexer's tokens with one token of lookahead and stops
//! at the first error. Whatever was complete by then is still returned, see
//! [`ParseOutput`].

mod config;
mod error;
mod grammar;
mod outcome;

pub use config::{Config, DEFAULT_RPE_RANGE, DEFAULT_UNIT, DEFAULT_UNITS};
pub use error::{NumberKind, ParseError, ParseErrorKind};
pub use outcome::ParseOutput;

use tml_ir::{Token, TokenKind, Workout};
use tml_lexer::Lexer;

/// Parser state.
pub struct Parser<'c> {
    lexer: Lexer,
    config: &'c Config,
    /// Most recently consumed token.
    current: Token,
}

impl<'c> Parser<'c> {
    pub fn new(lexer: Lexer, config: &'c Config) -> Self {
        Parser {
            lexer,
            config,
            current: Token::eof(0),
        }
    }

    /// Consume the next token and make it current.
    #[inline]
    fn advance(&mut self) -> &Token {
        self.current = self.lexer.next_token();
        &self.current
    }

    /// The token after `current`.
    #[inline]
    fn peek(&self) -> &Token {
        self.lexer.peek_token()
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    /// Advance and require the new current token to be `kind`.
    fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        self.advance();
        if self.current.is(kind) {
            Ok(&self.current)
        } else {
            Err(self.unexpected())
        }
    }

    /// Error for `current`, reported together with the token after it.
    fn unexpected(&self) -> ParseError {
        ParseError::unexpected(self.current.clone(), self.peek().clone())
    }

    fn skip_delimiters(&mut self) {
        while self.peek_is(TokenKind::Delimiter) {
            self.advance();
        }
    }

    /// Parse the whole token stream.
    pub fn parse_workout(mut self) -> ParseOutput {
        let mut workout = Workout::new();
        let error = self.parse_items(&mut workout).err();

        tracing::debug!(
            exercises = workout.exercises.len(),
            rows = workout.row_count(),
            failed = error.is_some(),
            "parsed workout"
        );

        ParseOutput { workout, error }
    }

    fn parse_items(&mut self, workout: &mut Workout) -> Result<(), ParseError> {
        loop {
            let kind = self.advance().kind;
            match kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::Delimiter => {}
                // A later text block replaces an earlier one.
                TokenKind::Text => workout.comment = Some(self.current.literal.clone()),
                TokenKind::Hash => {
                    let exercise = self.parse_exercise()?;
                    workout.exercises.push(exercise);
                }
                _ => return Err(self.unexpected()),
            }
        }
    }
}

/// Parse the tokens of `lexer` against `config`.
pub fn parse(lexer: Lexer, config: &Config) -> ParseOutput {
    Parser::new(lexer, config).parse_workout()
}

#[cfg(test)]
mod tests;
