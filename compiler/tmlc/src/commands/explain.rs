//! The `explain` command: display documentation for error codes.

use std::io::Write;

use tml_diagnostic::{ErrorCode, ErrorDocs};

use super::{EXIT_FAILURE, EXIT_OK};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let code = match code_str.parse::<ErrorCode>() {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            let _ = writeln!(err);
            let known: Vec<&str> = ErrorCode::ALL.iter().map(|c| c.as_str()).collect();
            let _ = writeln!(err, "Known codes: {}", known.join(", "));
            return EXIT_FAILURE;
        }
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = writeln!(out, "{doc}");
    } else {
        let _ = writeln!(out, "{code}: {}", code.description());
    }
    EXIT_OK
}
