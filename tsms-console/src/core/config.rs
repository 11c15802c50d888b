use shared::models::ReportHeader;
use tsms_report::{DEFAULT_CSS_URL, DEFAULT_LOGO_URL, PrintAssets};

use super::error::{ConfigError, Result};

/// Console configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./tsms-data | Working directory (print output, logs) |
/// | TSMS_TENANT_NAME | Tenant Name | Signatory name on reports |
/// | TSMS_TRADE_NAME | Tradename | Trade name in the report header |
/// | TSMS_BRANCH | Branch | Branch in the report header |
/// | TSMS_REPORT_MONTH | JANUARY | Reporting month (upper case) |
/// | TSMS_REPORT_YEAR | 2025 | Reporting year |
/// | TSMS_CSS_URL | https://cdn.tailwindcss.com | CSS framework of the print document |
/// | TSMS_LOGO_URL | /images/mwmlogo.png | Report logo, empty to hide |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// TSMS_TRADE_NAME="Kape Kultura" TSMS_BRANCH=Makati cargo test
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub tenant_name: String,
    pub trade_name: String,
    pub branch: String,
    pub report_month: String,
    pub report_year: String,
    pub css_url: String,
    pub logo_url: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = ReportHeader::default();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./tsms-data".into()),
            tenant_name: std::env::var("TSMS_TENANT_NAME").unwrap_or(defaults.tenant_name),
            trade_name: std::env::var("TSMS_TRADE_NAME").unwrap_or(defaults.trade_name),
            branch: std::env::var("TSMS_BRANCH").unwrap_or(defaults.branch),
            report_month: std::env::var("TSMS_REPORT_MONTH")
                .map(|m| m.to_uppercase())
                .unwrap_or(defaults.month),
            report_year: std::env::var("TSMS_REPORT_YEAR").unwrap_or(defaults.year),
            css_url: std::env::var("TSMS_CSS_URL").unwrap_or_else(|_| DEFAULT_CSS_URL.into()),
            logo_url: match std::env::var("TSMS_LOGO_URL") {
                Ok(url) if url.trim().is_empty() => None,
                Ok(url) => Some(url),
                Err(_) => Some(DEFAULT_LOGO_URL.into()),
            },
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the work dir and report identity
    ///
    /// Commonly used in tests
    pub fn with_overrides(
        work_dir: impl Into<String>,
        trade_name: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.trade_name = trade_name.into();
        config.branch = branch.into();
        config
    }

    /// Reject values the report cannot be rendered with
    pub fn validate(&self) -> Result<()> {
        if self.work_dir.trim().is_empty() {
            return Err(ConfigError::Missing("WORK_DIR"));
        }
        if self.report_year.parse::<u16>().is_err() {
            return Err(ConfigError::Invalid {
                key: "TSMS_REPORT_YEAR",
                value: self.report_year.clone(),
            });
        }
        if !matches!(
            self.environment.as_str(),
            "development" | "staging" | "production"
        ) {
            return Err(ConfigError::Invalid {
                key: "ENVIRONMENT",
                value: self.environment.clone(),
            });
        }
        Ok(())
    }

    /// Header printed on every report
    pub fn report_header(&self) -> ReportHeader {
        ReportHeader {
            tenant_name: self.tenant_name.clone(),
            trade_name: self.trade_name.clone(),
            branch: self.branch.clone(),
            month: self.report_month.clone(),
            year: self.report_year.clone(),
        }
    }

    /// Resources referenced by the print document
    pub fn print_assets(&self) -> PrintAssets {
        PrintAssets {
            css_url: self.css_url.clone(),
            logo_url: self.logo_url.clone(),
        }
    }

    /// Directory receiving file print jobs
    pub fn print_dir(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir).join("print")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
