//! Shared test utilities for phase tests.

use tmlc::Row;

/// Absolute path of a file in `tests/fixtures`.
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

pub fn row(sets: u64, reps: u64, weight: f64, unit: &str, rpe: Option<f64>) -> Row {
    Row {
        sets,
        reps,
        rpe,
        weight,
        unit: unit.to_owned(),
    }
}
