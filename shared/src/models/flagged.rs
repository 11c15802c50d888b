//! Flagged transactions awaiting review

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sales::lenient_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagType {
    #[serde(rename = "Missing Info")]
    MissingInfo,
    #[serde(rename = "Incorrect Total")]
    IncorrectTotal,
    #[serde(rename = "Late Sync")]
    LateSync,
    Other,
}

impl FlagType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingInfo => "Missing Info",
            Self::IncorrectTotal => "Incorrect Total",
            Self::LateSync => "Late Sync",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagStatus {
    Pending,
    Resolved,
}

impl FlagStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }
}

/// A transaction flagged by staff for follow-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedTransaction {
    pub id: String,
    /// Id of the flagged POS transaction, e.g. "TRX-001"
    pub transaction_id: String,
    pub date: NaiveDateTime,
    pub tenant: String,
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: Decimal,
    pub flag_reason: String,
    pub flag_type: FlagType,
    pub status: FlagStatus,
    pub flagged_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl FlaggedTransaction {
    pub fn is_pending(&self) -> bool {
        self.status == FlagStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagged_serde() {
        let json = r#"{
            "id": "2",
            "transactionId": "TRX-004",
            "date": "2023-06-01T14:30:00",
            "tenant": "Clothing Store",
            "amount": 45.0,
            "flagReason": "Incorrect total amount",
            "flagType": "Incorrect Total",
            "status": "Pending",
            "flaggedBy": "Jane Smith"
        }"#;
        let flagged: FlaggedTransaction = serde_json::from_str(json).unwrap();

        assert_eq!(flagged.flag_type, FlagType::IncorrectTotal);
        assert!(flagged.is_pending());
        assert!(flagged.resolved_by.is_none());

        let out = serde_json::to_value(&flagged).unwrap();
        assert!(out.get("resolution").is_none());
        assert_eq!(out["flagType"], "Incorrect Total");
    }
}
