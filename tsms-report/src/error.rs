//! Error types for the report library

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Report error types
#[derive(Debug, Error)]
pub enum ReportError {
    /// Sales data could not be parsed
    #[error("Invalid sales data: {0}")]
    InvalidData(#[from] serde_json::Error),

    /// Unknown report kind requested
    #[error("Invalid report kind: {0}")]
    InvalidKind(String),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Print error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error while writing the print document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Print context was already closed
    #[error("Print context closed")]
    Closed,

    /// Print target misconfigured
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for print operations
pub type PrintResult<T> = Result<T, PrintError>;

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        let code = match &err {
            ReportError::InvalidData(_) => ErrorCode::ReportDataInvalid,
            ReportError::InvalidKind(_) => ErrorCode::ReportKindInvalid,
        };
        AppError::with_message(code, err.to_string())
    }
}

impl From<PrintError> for AppError {
    fn from(err: PrintError) -> Self {
        let code = match &err {
            PrintError::Io(_) | PrintError::Closed => ErrorCode::PrintWriteFailed,
            PrintError::InvalidConfig(_) => ErrorCode::ConfigError,
        };
        AppError::with_message(code, err.to_string())
    }
}
