//! Exercise parsing.

use tml_ir::{Exercise, Row, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an exercise. `current` is its `#`.
    ///
    /// Stops in front of the next `#`, text block or end of input, so the
    /// caller sees the token that ended the exercise.
    pub(crate) fn parse_exercise(&mut self) -> Result<Exercise, ParseError> {
        let name = self.expect(TokenKind::Ident)?.literal.clone();
        tracing::trace!(%name, "exercise");

        let mut exercise = Exercise::new(name);
        if self.peek_is(TokenKind::Delimiter) {
            self.advance();
        }

        exercise.rows = self.parse_rows()?;

        self.skip_delimiters();
        if self.peek_is(TokenKind::Text) {
            exercise.comment = Some(self.advance().literal.clone());
        }

        Ok(exercise)
    }

    fn parse_rows(&mut self) -> Result<Vec<Row>, ParseError> {
        let mut rows = Vec::new();
        loop {
            self.skip_delimiters();
            if self.peek().kind.ends_rows() {
                return Ok(rows);
            }
            rows.push(self.parse_row()?);
        }
    }
}
