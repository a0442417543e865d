//! Validation parameters for a parse.

use rustc_hash::FxHashSet;

/// Unit assumed for rows that do not name one.
pub const DEFAULT_UNIT: &str = "kg";

/// Units accepted by [`Config::default`].
pub const DEFAULT_UNITS: [&str; 5] = ["kg", "lbs", "s", "min", "count"];

/// Inclusive RPE bounds of [`Config::default`].
pub const DEFAULT_RPE_RANGE: (f64, f64) = (0.0, 11.0);

/// Validation parameters, fixed for the duration of one parse.
///
/// Units are compared exactly: no case folding and no trimming.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub default_unit: String,
    pub valid_units: FxHashSet<String>,
    /// Inclusive `(min, max)`.
    pub rpe_range: (f64, f64),
}

impl Config {
    pub fn new<I, S>(default_unit: impl Into<String>, units: I, rpe_range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Config {
            default_unit: default_unit.into(),
            valid_units: units.into_iter().map(Into::into).collect(),
            rpe_range,
        }
    }

    #[must_use]
    pub fn with_default_unit(mut self, unit: impl Into<String>) -> Self {
        self.default_unit = unit.into();
        self
    }

    /// Replace the set of valid units.
    #[must_use]
    pub fn with_valid_units<I, S>(mut self, units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_units = units.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_rpe_range(mut self, min: f64, max: f64) -> Self {
        self.rpe_range = (min, max);
        self
    }

    #[inline]
    pub fn is_valid_unit(&self, unit: &str) -> bool {
        self.valid_units.contains(unit)
    }

    /// Whether `rpe` lies in the inclusive range. A range with `min > max`
    /// accepts nothing.
    #[inline]
    pub fn is_valid_rpe(&self, rpe: f64) -> bool {
        let (min, max) = self.rpe_range;
        min <= rpe && rpe <= max
    }

    /// Valid units in sorted order, for display.
    pub fn sorted_units(&self) -> Vec<&str> {
        let mut units: Vec<&str> = self.valid_units.iter().map(String::as_str).collect();
        units.sort_unstable();
        units
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_UNIT, DEFAULT_UNITS, DEFAULT_RPE_RANGE)
    }
}
