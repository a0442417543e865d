//! Parse phase tests: source text in, workout or error out.

mod entry_points;
mod fixtures;
mod sessions;
