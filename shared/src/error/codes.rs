//! Unified error codes for the TSMS workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 4xxx: Transaction errors
//! - 7xxx: Report errors
//! - 8xxx: Print errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid format
    InvalidFormat = 6,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 4xxx: Transaction ====================
    /// Flagged transaction not found
    FlaggedTransactionNotFound = 4002,
    /// Flag has already been resolved
    FlagAlreadyResolved = 4003,
    /// Resolution text is required
    ResolutionRequired = 4004,

    // ==================== 7xxx: Report ====================
    /// Sales data could not be read
    ReportDataInvalid = 7001,
    /// Unknown report kind
    ReportKindInvalid = 7002,

    // ==================== 8xxx: Print ====================
    /// Writing the print document failed
    PrintWriteFailed = 8002,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9002,
    /// IO error
    IoError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidFormat => "Invalid format",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Transaction
            ErrorCode::FlaggedTransactionNotFound => "Flagged transaction not found",
            ErrorCode::FlagAlreadyResolved => "Flagged transaction is already resolved",
            ErrorCode::ResolutionRequired => "Resolution details are required",

            // Report
            ErrorCode::ReportDataInvalid => "Sales data is invalid",
            ErrorCode::ReportKindInvalid => "Unknown report kind",

            // Print
            ErrorCode::PrintWriteFailed => "Failed to write print document",

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::IoError => "IO error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            6 => Ok(ErrorCode::InvalidFormat),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),

            // Transaction
            4002 => Ok(ErrorCode::FlaggedTransactionNotFound),
            4003 => Ok(ErrorCode::FlagAlreadyResolved),
            4004 => Ok(ErrorCode::ResolutionRequired),

            // Report
            7001 => Ok(ErrorCode::ReportDataInvalid),
            7002 => Ok(ErrorCode::ReportKindInvalid),

            // Print
            8002 => Ok(ErrorCode::PrintWriteFailed),

            // System
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::PermissionDenied.code(), 2001);
        assert_eq!(ErrorCode::FlaggedTransactionNotFound.code(), 4002);
        assert_eq!(ErrorCode::ReportKindInvalid.code(), 7002);
        assert_eq!(ErrorCode::PrintWriteFailed.code(), 8002);
        assert_eq!(ErrorCode::ConfigError.code(), 9002);
    }

    #[test]
    fn test_try_from_roundtrip() {
        let codes = [
            ErrorCode::NotFound,
            ErrorCode::ResolutionRequired,
            ErrorCode::PrintWriteFailed,
            ErrorCode::IoError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(8001), Err(InvalidErrorCode(8001)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
        assert_eq!(InvalidErrorCode(4).to_string(), "Invalid error code: 4");
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::ReportDataInvalid).unwrap(), "7001");
        let code: ErrorCode = serde_json::from_str("8002").unwrap();
        assert_eq!(code, ErrorCode::PrintWriteFailed);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::ResolutionRequired.message(), "Resolution details are required");
    }
}
