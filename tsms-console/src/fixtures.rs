//! Demo data for the console
//!
//! The mocked data set the dashboard ships with: one month of vatable
//! sales, a day and a half of POS transactions, four flagged items and the
//! mall's five POS terminals.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use shared::models::{
    DailySalesRecord, FlagStatus, FlagType, FlaggedTransaction, Terminal, TerminalStatus,
    Transaction, TransactionStatus, TransactionType,
};

const DEMO_TRANSACTION_ID: &str = "8a918a90-7cbd-4b44-adc0-bc3d31cee238";
const DEMO_TENANT: &str = "C-T1005";

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

/// January sales: four days of vatable-only sales
pub fn sales_records() -> Vec<DailySalesRecord> {
    [2323400i64, 132300, 252500, 2252500]
        .into_iter()
        .enumerate()
        .map(|(i, cents)| DailySalesRecord::vatable_only(i as u32 + 1, Decimal::new(cents, 2)))
        .collect()
}

pub fn transactions() -> Vec<Transaction> {
    use TransactionStatus::*;
    use TransactionType::*;

    let rows = [
        ((1, 10, 30), "POS-001", Sale, 2490, Completed),
        ((1, 11, 45), "POS-002", Sale, 5995, Completed),
        ((1, 13, 15), "POS-003", Sale, 8750, Completed),
        ((1, 14, 30), "POS-004", Refund, 4500, Completed),
        ((1, 15, 45), "POS-005", Sale, 29999, Pending),
        ((1, 16, 30), "POS-001", Void, 1250, Completed),
        ((1, 17, 15), "POS-002", Sale, 3495, Failed),
        ((2, 9, 30), "POS-003", Sale, 6575, Completed),
        ((2, 10, 45), "POS-004", Sale, 12999, Completed),
        ((2, 12, 0), "POS-005", Refund, 19999, Pending),
    ];

    rows.into_iter()
        .map(|((day, hour, minute), terminal, kind, cents, status)| Transaction {
            id: DEMO_TRANSACTION_ID.to_string(),
            date: at(day, hour, minute),
            tenant: DEMO_TENANT.to_string(),
            terminal: terminal.to_string(),
            kind,
            amount: Decimal::new(cents, 2),
            status,
        })
        .collect()
}

pub fn flagged_transactions() -> Vec<FlaggedTransaction> {
    let item = |id: &str,
                transaction_id: &str,
                date: NaiveDateTime,
                tenant: &str,
                cents: i64,
                reason: &str,
                flag_type: FlagType,
                flagged_by: &str| FlaggedTransaction {
        id: id.to_string(),
        transaction_id: transaction_id.to_string(),
        date,
        tenant: tenant.to_string(),
        amount: Decimal::new(cents, 2),
        flag_reason: reason.to_string(),
        flag_type,
        status: FlagStatus::Pending,
        flagged_by: flagged_by.to_string(),
        resolved_by: None,
        resolution: None,
    };

    let mut items = vec![
        item(
            "1",
            "TRX-001",
            at(1, 10, 30),
            "Coffee Shop",
            2499,
            "Missing POS terminal ID",
            FlagType::MissingInfo,
            "John Doe",
        ),
        item(
            "2",
            "TRX-004",
            at(1, 14, 30),
            "Clothing Store",
            4500,
            "Incorrect total amount, should be $54.99",
            FlagType::IncorrectTotal,
            "Jane Smith",
        ),
        item(
            "3",
            "TRX-007",
            at(1, 17, 15),
            "Bookstore",
            3495,
            "Transaction synced 24 hours late",
            FlagType::LateSync,
            "Robert Johnson",
        ),
        item(
            "4",
            "TRX-010",
            at(2, 12, 0),
            "Electronics",
            19999,
            "Customer dispute on refund amount",
            FlagType::Other,
            "Michael Wilson",
        ),
    ];

    for (index, resolver, resolution) in [
        (2, "Emily Davis", "Confirmed with tenant, system clock was incorrect"),
        (3, "Sarah Brown", "Refund processed correctly, customer was confused about tax"),
    ] {
        let entry = &mut items[index];
        entry.status = FlagStatus::Resolved;
        entry.resolved_by = Some(resolver.to_string());
        entry.resolution = Some(resolution.to_string());
    }

    items
}

/// Five terminals, terminal 03 offline
pub fn terminals() -> Vec<Terminal> {
    let rows = [
        ("1", "Food Court", TerminalStatus::Online, (15, 14, 30)),
        ("2", "Fashion Wing", TerminalStatus::Online, (15, 13, 45)),
        ("3", "Electronics", TerminalStatus::Offline, (14, 18, 20)),
        ("4", "Grocery", TerminalStatus::Online, (15, 12, 10)),
        ("5", "Home Goods", TerminalStatus::Online, (15, 11, 30)),
    ];

    rows.into_iter()
        .map(|(id, location, status, (day, hour, minute))| Terminal {
            id: id.to_string(),
            name: format!("Terminal 0{}", id),
            location: location.to_string(),
            status,
            last_sync: at(day, hour, minute),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(sales_records().len(), 4);
        assert_eq!(transactions().len(), 10);
        let flagged = flagged_transactions();
        assert_eq!(flagged.iter().filter(|f| f.is_pending()).count(), 2);
        let terminals = terminals();
        assert_eq!(terminals[2].name, "Terminal 03");
        assert_eq!(terminals.iter().filter(|t| t.is_online()).count(), 4);
    }
}
