//! Report kinds and report header metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which layout a sales report is rendered with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Full per-day table plus the VAT / percentage-rent summary
    #[default]
    Monthly,
    /// Transaction-type / amount table for one day
    Daily,
    /// Transaction-type / amount table for one hour slice
    Hourly,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [ReportKind::Monthly, ReportKind::Daily, ReportKind::Hourly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    /// Daily and hourly reports share the flat two-column layout
    pub fn is_flat(&self) -> bool {
        !matches!(self, Self::Monthly)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown report kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidReportKind(pub String);

impl fmt::Display for InvalidReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid report kind: {}", self.0)
    }
}

impl std::error::Error for InvalidReportKind {}

impl FromStr for ReportKind {
    type Err = InvalidReportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            other => Err(InvalidReportKind(other.to_string())),
        }
    }
}

/// Tenant identification printed at the top and in the signatory block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportHeader {
    pub tenant_name: String,
    pub trade_name: String,
    pub branch: String,
    /// Upper-case month name, e.g. "JANUARY"
    pub month: String,
    pub year: String,
}

impl Default for ReportHeader {
    fn default() -> Self {
        Self {
            tenant_name: "Tenant Name".to_string(),
            trade_name: "Tradename".to_string(),
            branch: "Branch".to_string(),
            month: "JANUARY".to_string(),
            year: "2025".to_string(),
        }
    }
}

impl ReportHeader {
    /// "{trade name} / {branch} Branch"
    pub fn title(&self) -> String {
        format!("{} / {} Branch", self.trade_name, self.branch)
    }

    /// "For the month of {MONTH} {YEAR}"
    pub fn period_line(&self) -> String {
        format!("For the month of {} {}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_parse() {
        assert_eq!("monthly".parse::<ReportKind>(), Ok(ReportKind::Monthly));
        assert_eq!(" Daily ".parse::<ReportKind>(), Ok(ReportKind::Daily));
        assert_eq!("HOURLY".parse::<ReportKind>(), Ok(ReportKind::Hourly));
        assert!("weekly".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_report_kind_serde() {
        assert_eq!(serde_json::to_string(&ReportKind::Hourly).unwrap(), "\"hourly\"");
        let kind: ReportKind = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(kind, ReportKind::Daily);
    }

    #[test]
    fn test_flat_layout() {
        assert!(!ReportKind::Monthly.is_flat());
        assert!(ReportKind::Daily.is_flat());
        assert!(ReportKind::Hourly.is_flat());
    }

    #[test]
    fn test_header_lines() {
        let header = ReportHeader::default();
        assert_eq!(header.title(), "Tradename / Branch Branch");
        assert_eq!(header.period_line(), "For the month of JANUARY 2025");
    }
}
