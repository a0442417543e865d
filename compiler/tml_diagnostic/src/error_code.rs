use std::fmt;
use std::str::FromStr;

/// Error codes for all TML diagnostics.
///
/// Format: E#### where the first digit indicates the phase. The lexer never
/// fails, so every code currently lives in the parser range (E1xxx).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Token does not fit the grammar at this position
    E1001,
    /// Unit is not in the configured set of valid units
    E1002,
    /// RPE value outside the configured range
    E1003,
    /// Number literal cannot be read as the required numeric type
    E1004,
}

impl ErrorCode {
    /// Every known code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    /// One-line summary of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "malformed token",
            ErrorCode::E1002 => "invalid unit",
            ErrorCode::E1003 => "invalid RPE",
            ErrorCode::E1004 => "invalid number",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `ErrorCode::from_str` for strings that name no known code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code `{}`", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Accepts `E1001` as well as the lower-case `e1001`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}
