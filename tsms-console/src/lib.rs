//! TSMS Console - tenant sales monitoring back office
//!
//! # Overview
//!
//! - **Reports** (`reports`): sales records → totals → report table → print
//! - **Dashboard** (`dashboard`): role-based layouts and key metrics
//! - **Transactions** (`transactions`): transaction log filter, limit and sort
//! - **Flagged** (`flagged`): review and resolution of flagged transactions
//! - **Batch import** (`batch_import`): terminal selection and import history
//!
//! # Module layout
//!
//! ```text
//! tsms-console/src/
//! ├── core/          # configuration, config errors
//! ├── utils/         # logger
//! ├── batch_import.rs
//! ├── dashboard.rs
//! ├── transactions.rs
//! ├── flagged.rs
//! ├── reports.rs
//! └── fixtures.rs    # demo data
//! ```

pub mod batch_import;
pub mod core;
pub mod dashboard;
pub mod fixtures;
pub mod flagged;
pub mod reports;
pub mod transactions;
pub mod utils;

pub use batch_import::{
    BatchImport, IMPORT_HISTORY_LIMIT, ImportOutcome, ImportSource, ImportState,
    SimulatedImportSource,
};
pub use core::{Config, ConfigError};
pub use dashboard::{DashboardPanel, DashboardView, KeyMetric, key_metrics, navigation};
pub use flagged::{FlaggedFilter, FlaggedReview, StatusFilter};
pub use reports::{SalesReportService, parse_kind};
pub use transactions::{SearchField, SortDirection, SortField, TransactionQuery, tenants};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read and validate the config, create the work dirs and
/// start logging
pub fn setup_environment() -> core::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.validate()?;

    std::fs::create_dir_all(&config.work_dir)?;
    std::fs::create_dir_all(config.print_dir())?;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }

    init_logger_with_file(
        Some(&config.log_level),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );

    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Environment ready"
    );
    Ok(config)
}
