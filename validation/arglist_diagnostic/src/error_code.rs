use std::fmt;
use std::str::FromStr;

/// Error codes for all validation diagnostics.
///
/// Format: A#### where the first digit indicates the phase:
/// - A0xxx: Argument list errors (reported per call)
/// - A1xxx: Signature errors (malformed parameter lists)
/// - A9xxx: Input errors (unreadable call descriptions)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Argument Errors (A0xxx)
    /// Required argument not supplied
    A0001,
    /// Argument does not match the declared type
    A0002,
    /// More arguments than parameters, and no variadic
    A0003,

    // Signature Errors (A1xxx)
    /// Parameter positions have a gap or duplicate
    A1001,
    /// Variadic parameter is not last
    A1002,
    /// Parameter name declared twice
    A1003,

    // Input Errors (A9xxx)
    /// Call description could not be read or decoded
    A9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::A0001,
        ErrorCode::A0002,
        ErrorCode::A0003,
        ErrorCode::A1001,
        ErrorCode::A1002,
        ErrorCode::A1003,
        ErrorCode::A9001,
    ];

    /// Get the code as a string (e.g., "A0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::A0001 => "A0001",
            ErrorCode::A0002 => "A0002",
            ErrorCode::A0003 => "A0003",
            ErrorCode::A1001 => "A1001",
            ErrorCode::A1002 => "A1002",
            ErrorCode::A1003 => "A1003",
            ErrorCode::A9001 => "A9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl serde::Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a known code.
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

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownErrorCode(wanted.to_string()))
    }
}
