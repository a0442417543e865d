//! The `lex` command: print the token stream.

use std::io::Write;

use super::{read_or_report, EXIT_FAILURE, EXIT_OK};

/// Lex a file and display its tokens with their spans.
pub fn lex_file(path: &str, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    let Some(source) = read_or_report(path, err) else {
        return EXIT_FAILURE;
    };

    let tokens = crate::lex(&source);
    let _ = writeln!(out, "Tokens for '{path}' ({} tokens):", tokens.len());
    for token in &tokens {
        let _ = writeln!(
            out,
            "  {:<9} {:?} @ {}",
            token.kind.display_name(),
            token.literal,
            token.span
        );
    }

    EXIT_OK
}
