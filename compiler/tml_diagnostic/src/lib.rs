//! Diagnostic system for TML error reporting.
//!
//! Every diagnostic carries:
//! - An error code for searchability (`tml explain E1002`)
//! - A message (what went wrong)
//! - A primary label (where it went wrong)
//! - Optional secondary labels and notes (context, valid alternatives)
//!
//! Rendering is left to the emitters in [`emitter`]; the parser only builds
//! `Diagnostic` values.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
