//! POS terminals and batch import results

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalStatus {
    Online,
    Offline,
    Connecting,
}

impl TerminalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Connecting => "connecting",
        }
    }

    /// Badge label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Connecting => "Connecting",
        }
    }
}

impl fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Terminal {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: TerminalStatus,
    pub last_sync: NaiveDateTime,
}

impl Terminal {
    pub fn is_online(&self) -> bool {
        self.status == TerminalStatus::Online
    }

    /// Offline terminals cannot be picked for an import
    pub fn is_selectable(&self) -> bool {
        self.status != TerminalStatus::Offline
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Success,
    Failed,
}

/// Outcome of importing one terminal's transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub terminal_id: String,
    pub terminal_name: String,
    pub status: ImportStatus,
    pub message: String,
    /// Only set on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions_count: Option<u32>,
    pub timestamp: NaiveDateTime,
}

impl ImportResult {
    pub fn is_success(&self) -> bool {
        self.status == ImportStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_terminal_serde() {
        let json = r#"{
            "id": "3",
            "name": "Terminal 03",
            "location": "Electronics",
            "status": "offline",
            "lastSync": "2023-06-14T18:20:00"
        }"#;
        let terminal: Terminal = serde_json::from_str(json).unwrap();
        assert_eq!(terminal.status, TerminalStatus::Offline);
        assert!(!terminal.is_selectable());
        assert!(!terminal.is_online());
        assert_eq!(terminal.status.label(), "Offline");
    }

    #[test]
    fn test_failed_result_omits_count() {
        let result = ImportResult {
            terminal_id: "1".into(),
            terminal_name: "Terminal 01".into(),
            status: ImportStatus::Failed,
            message: "Connection timed out".into(),
            transactions_count: None,
            timestamp: NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "failed");
        assert!(json.get("transactionsCount").is_none());
        assert!(!result.is_success());
    }
}
