//! Document model produced by the parser.
//!
//! A `Workout` owns its exercises, an `Exercise` owns its rows. Sequences
//! preserve source order. Optional comments are `None` unless a text block
//! appeared at that position in the source.

/// One logged set-group: `sets` x `reps` at `weight` `unit`, with an
/// optional RPE.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    pub sets: u64,
    pub reps: u64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rpe: Option<f64>,
    pub weight: f64,
    pub unit: String,
}

/// Unit that marks a row as weightless.
pub const COUNT_UNIT: &str = "count";

impl Row {
    /// Whether this row uses the `count` pseudo-unit.
    pub fn is_count(&self) -> bool {
        self.unit == COUNT_UNIT
    }
}

/// A named block of rows with an optional trailing comment.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exercise {
    pub name: String,
    pub rows: Vec<Row>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub comment: Option<String>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Exercise {
            name: name.into(),
            rows: Vec::new(),
            comment: None,
        }
    }
}

/// Root of a parsed document.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Workout {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub comment: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows across every exercise.
    pub fn row_count(&self) -> usize {
        self.exercises.iter().map(|e| e.rows.len()).sum()
    }
}
