//! TML workout log parser.
//!
//! Facade over the front-end crates:
//!
//! ```text
//! source ──lex──▶ TokenList ──parse──▶ Workout
//! ```
//!
//! [`parse`] is the entry point most callers want. [`parse_with_output`]
//! additionally returns the exercises completed before an error.

pub mod commands;

use std::sync::Once;

pub use tml_diagnostic::{Diagnostic, ErrorCode};
pub use tml_ir::{Exercise, Row, Span, Token, TokenKind, TokenList, Workout};
pub use tml_parse::{Config, NumberKind, ParseError, ParseErrorKind, ParseOutput};

use tml_lexer::Lexer;

/// Parse `input` into a workout, stopping at the first error.
pub fn parse(input: &str, config: &Config) -> Result<Workout, ParseError> {
    parse_with_output(input, config).into_result()
}

/// Parse `input`, keeping the partial workout on error.
pub fn parse_with_output(input: &str, config: &Config) -> ParseOutput {
    tml_parse::parse(Lexer::new(input), config)
}

/// Default unit `kg`, units `kg`, `lbs`, `s`, `min` and `count`, RPE
/// between 0 and 11 inclusive.
pub fn default_config() -> Config {
    Config::default()
}

/// Tokenize `input` without parsing it.
pub fn lex(input: &str) -> TokenList {
    tml_lexer::lex(input)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=tml_parse=trace` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
