//! Data models
//!
//! Sales report inputs and totals, report metadata, roles, and the
//! transaction / flagged-transaction records shown on the dashboard, and
//! the POS terminals behind batch import.

pub mod flagged;
pub mod report;
pub mod role;
pub mod sales;
pub mod terminal;
pub mod transaction;

// Re-exports
pub use flagged::*;
pub use report::*;
pub use role::*;
pub use sales::*;
pub use terminal::*;
pub use transaction::*;
