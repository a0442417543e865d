//! Row parsing.
//!
//! A row is `weight[unit] x reps`, optionally followed by `x sets`, then
//! optionally by `@ rpe`. Both clauses appear at most once and only in that
//! order.

use tml_ir::{Row, Span, Token, TokenKind};

use crate::{NumberKind, ParseError, Parser};

impl Parser<'_> {
    /// Parse one row. The row's first token is `peek`.
    pub(crate) fn parse_row(&mut self) -> Result<Row, ParseError> {
        let config = self.config;
        if !config.is_valid_unit(&config.default_unit) {
            return Err(ParseError::invalid_unit(
                config.default_unit.clone(),
                Span::point(self.peek().span.start),
            ));
        }

        let weight_token = self.expect(TokenKind::Number)?.clone();
        let weight = parse_float(&weight_token)?;

        let mut unit = config.default_unit.clone();
        if self.peek_is(TokenKind::Label) {
            let label = self.advance();
            if !config.is_valid_unit(&label.literal) {
                return Err(ParseError::invalid_unit(label.literal.clone(), label.span));
            }
            unit.clone_from(&label.literal);
        }

        self.expect(TokenKind::Cross)?;
        let reps = parse_integer(self.expect(TokenKind::Number)?)?;

        let mut sets = 1;
        if self.peek_is(TokenKind::Cross) {
            self.advance();
            sets = parse_integer(self.expect(TokenKind::Number)?)?;
        }

        let mut rpe = None;
        if self.peek_is(TokenKind::At) {
            self.advance();
            rpe = Some(self.parse_rpe()?);
        }

        self.expect(TokenKind::Delimiter)?;

        let row = Row {
            sets,
            reps,
            rpe,
            weight,
            unit,
        };
        let row = if row.is_count() {
            count_row(row, &weight_token)?
        } else {
            row
        };

        tracing::trace!(?row, "row");
        Ok(row)
    }

    fn parse_rpe(&mut self) -> Result<f64, ParseError> {
        let config = self.config;
        let token = self.expect(TokenKind::Number)?;
        let rpe = parse_float(token)?;
        if config.is_valid_rpe(rpe) {
            Ok(rpe)
        } else {
            Err(ParseError::invalid_rpe(rpe, config.rpe_range, token.span))
        }
    }
}

/// `<reps>count x <sets>`: the weight position holds the reps and the reps
/// position holds the sets. Any `x sets` clause is discarded.
fn count_row(row: Row, weight: &Token) -> Result<Row, ParseError> {
    let reps = whole_reps(row.weight)
        .ok_or_else(|| ParseError::invalid_number(weight, NumberKind::Integer))?;
    Ok(Row {
        sets: row.reps,
        reps,
        weight: 1.0,
        ..row
    })
}

/// Integer part of a weight, or `None` if it does not fit in a `u64`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range checked before the cast"
)]
fn whole_reps(weight: f64) -> Option<u64> {
    // 2^64, the first whole number past `u64::MAX`.
    const LIMIT: f64 = 18_446_744_073_709_551_616.0;
    let whole = weight.trunc();
    if (0.0..LIMIT).contains(&whole) {
        Some(whole as u64)
    } else {
        None
    }
}

fn parse_float(token: &Token) -> Result<f64, ParseError> {
    token
        .literal
        .parse()
        .map_err(|_| ParseError::invalid_number(token, NumberKind::Float))
}

fn parse_integer(token: &Token) -> Result<u64, ParseError> {
    token
        .literal
        .parse()
        .map_err(|_| ParseError::invalid_number(token, NumberKind::Integer))
}
