//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 2xxx: Permission errors
/// - 4xxx: Transaction errors
/// - 7xxx: Report errors
/// - 8xxx: Print errors
/// - everything else: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Permission errors (2xxx)
    Permission,
    /// Transaction errors (4xxx)
    Transaction,
    /// Report errors (7xxx)
    Report,
    /// Print errors (8xxx)
    Print,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            2000..3000 => Self::Permission,
            4000..5000 => Self::Transaction,
            7000..8000 => Self::Report,
            8000..9000 => Self::Print,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Permission => "permission",
            Self::Transaction => "transaction",
            Self::Report => "report",
            Self::Print => "print",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(4003), ErrorCategory::Transaction);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Report);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Print);
        assert_eq!(ErrorCategory::from_code(9003), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(1500), ErrorCategory::System);
    }

    #[test]
    fn test_code_category() {
        assert_eq!(ErrorCode::ReportDataInvalid.category(), ErrorCategory::Report);
        assert_eq!(ErrorCode::PrintWriteFailed.category().name(), "print");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Transaction).unwrap();
        assert_eq!(json, "\"transaction\"");
    }
}
