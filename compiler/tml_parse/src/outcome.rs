//! Best-effort parse outcome.

use tml_ir::Workout;

use crate::ParseError;

/// A workout together with the error that stopped the parse, if any.
///
/// On error, `workout` holds every exercise completed before the failing
/// one. The failing exercise itself is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub workout: Workout,
    pub error: Option<ParseError>,
}

impl ParseOutput {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Discard the partial workout on error.
    pub fn into_result(self) -> Result<Workout, ParseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.workout),
        }
    }
}
