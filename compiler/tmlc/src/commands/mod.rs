//! Command handlers for the `tml` CLI.
//!
//! Each submodule implements one command. Handlers write to the writers they
//! are given and return the process exit code, so they can be driven from
//! tests. Shared utilities (option parsing, reading input, error reporting)
//! live here in the module root.

use std::io::{Read, Write};
use std::mem;

use thiserror::Error;
use tml_diagnostic::emitter::{
    ColorMode, DiagnosticEmitter, JsonEmitter, RenderSource, TerminalEmitter,
};
use tml_parse::{Config, ParseError, ParseErrorKind};

mod check;
mod config;
mod explain;
mod lex;
mod parse;

pub use check::check_file;
pub use config::show_config;
pub use explain::explain_error;
pub use lex::lex_file;
pub use parse::parse_file;

/// Exit code for success.
pub const EXIT_OK: i32 = 0;
/// Exit code for input that failed to read or parse.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for malformed command-line usage.
pub const EXIT_USAGE: i32 = 2;

/// How diagnostics are written to stderr.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormat {
    #[default]
    Human,
    Json,
}

/// Options shared by the commands.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Print the workout as JSON (`parse` only).
    pub json: bool,
    pub color: ColorMode,
    pub error_format: ErrorFormat,
    /// Whether stderr is a terminal; resolves `ColorMode::Auto`.
    pub stderr_is_tty: bool,
    pub config: Config,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            json: false,
            color: ColorMode::Auto,
            error_format: ErrorFormat::Human,
            stderr_is_tty: false,
            config: Config::default(),
        }
    }
}

/// A command-line usage error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for `{flag}`: expected {expected}")]
    InvalidValue {
        flag: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Arguments after the command name: at most one path plus options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Invocation {
    pub path: Option<String>,
    pub options: Options,
}

/// Parse the arguments that follow the command name.
///
/// Flags may appear before or after the path. `-` is a path (stdin).
pub fn parse_args(args: &[String]) -> Result<Invocation, UsageError> {
    let mut invocation = Invocation::default();
    let options = &mut invocation.options;

    for arg in args {
        if arg == "--json" {
            options.json = true;
        } else if let Some(value) = arg.strip_prefix("--color=") {
            options.color = ColorMode::from_flag(value).ok_or_else(|| UsageError::InvalidValue {
                flag: "--color",
                value: value.to_owned(),
                expected: "auto, always or never",
            })?;
        } else if let Some(value) = arg.strip_prefix("--error-format=") {
            options.error_format = match value {
                "human" => ErrorFormat::Human,
                "json" => ErrorFormat::Json,
                _ => {
                    return Err(UsageError::InvalidValue {
                        flag: "--error-format",
                        value: value.to_owned(),
                        expected: "human or json",
                    })
                }
            };
        } else if let Some(value) = arg.strip_prefix("--default-unit=") {
            if value.is_empty() {
                return Err(UsageError::InvalidValue {
                    flag: "--default-unit",
                    value: String::new(),
                    expected: "a unit name",
                });
            }
            options.config = mem::take(&mut options.config).with_default_unit(value);
        } else if let Some(value) = arg.strip_prefix("--units=") {
            let units = parse_units(value)?;
            options.config = mem::take(&mut options.config).with_valid_units(units);
        } else if let Some(value) = arg.strip_prefix("--rpe=") {
            let (min, max) = parse_rpe_range(value)?;
            options.config = mem::take(&mut options.config).with_rpe_range(min, max);
        } else if arg.starts_with('-') && arg != "-" {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if invocation.path.is_none() {
            invocation.path = Some(arg.clone());
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(invocation)
}

fn parse_units(value: &str) -> Result<Vec<String>, UsageError> {
    let units: Vec<String> = value.split(',').map(str::to_owned).collect();
    if units.iter().any(String::is_empty) {
        return Err(UsageError::InvalidValue {
            flag: "--units",
            value: value.to_owned(),
            expected: "a comma-separated list of unit names",
        });
    }
    Ok(units)
}

fn parse_rpe_range(value: &str) -> Result<(f64, f64), UsageError> {
    let invalid = || UsageError::InvalidValue {
        flag: "--rpe",
        value: value.to_owned(),
        expected: "<min>,<max>",
    };

    let (min, max) = value.split_once(',').ok_or_else(invalid)?;
    let min: f64 = min.trim().parse().map_err(|_| invalid())?;
    let max: f64 = max.trim().parse().map_err(|_| invalid())?;
    if !min.is_finite() || !max.is_finite() {
        return Err(invalid());
    }
    Ok((min, max))
}

/// Read the input file, or stdin for `-`.
///
/// Returns a user-facing message on failure.
pub fn read_source(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(e) => Err(format!("cannot read standard input: {e}")),
        };
    }

    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("cannot read '{path}': {e}"),
    })
}

/// Name used for `path` in diagnostics.
fn display_path(path: &str) -> &str {
    if path == "-" {
        "<stdin>"
    } else {
        path
    }
}

/// Render `error` against its source.
pub(crate) fn report_parse_error(
    error: &ParseError,
    path: &str,
    source: &str,
    options: &Options,
    err: &mut dyn Write,
) {
    let mut diagnostic = error.to_diagnostic();
    if let ParseErrorKind::InvalidUnit { .. } = error.kind {
        diagnostic = diagnostic.with_note(format!(
            "valid units are: {}",
            options.config.sorted_units().join(", ")
        ));
    }

    let source = RenderSource::new(display_path(path), source);
    match options.error_format {
        ErrorFormat::Human => {
            let mut emitter =
                TerminalEmitter::with_color_mode(err, options.color, options.stderr_is_tty)
                    .with_source(source);
            emitter.emit(&diagnostic);
            emitter.flush();
        }
        ErrorFormat::Json => {
            let mut emitter = JsonEmitter::new(err).with_source(source);
            emitter.begin();
            emitter.emit(&diagnostic);
            emitter.end();
            emitter.flush();
        }
    }
}

/// Read `path`, reporting failures to `err`.
fn read_or_report(path: &str, err: &mut dyn Write) -> Option<String> {
    match read_source(path) {
        Ok(source) => Some(source),
        Err(message) => {
            let _ = writeln!(err, "error: {message}");
            None
        }
    }
}
