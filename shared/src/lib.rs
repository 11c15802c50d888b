//! Shared types for the Tenant Sales Management System
//!
//! Domain models (sales records, report totals, transactions, roles),
//! the unified error model and small time helpers used by every crate
//! in the workspace.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
