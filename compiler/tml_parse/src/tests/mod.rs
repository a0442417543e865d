#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use crate::{parse, Config, ParseError, ParseOutput};
use tml_ir::{Row, Workout};
use tml_lexer::Lexer;


fn parse_output(source: &str, config: &Config) -> ParseOutput {
    parse(Lexer::new(source), config)
}

fn parse_ok(source: &str) -> Workout {
    parse_output(source, &Config::default()).into_result().unwrap()
}

fn parse_err(source: &str, config: &Config) -> ParseError {
    parse_output(source, config).error.unwrap()
}

fn row(sets: u64, reps: u64, weight: f64, unit: &str, rpe: Option<f64>) -> Row {
    Row {
        sets,
        reps,
        rpe,
        weight,
        unit: unit.to_owned(),
    }
}

/// Rows of the only exercise in `source`.
fn single_rows(source: &str) -> Vec<Row> {
    let workout = parse_ok(source);
    assert_eq!(workout.exercises.len(), 1, "{workout:?}");
    workout.exercises.into_iter().next().unwrap().rows
}
