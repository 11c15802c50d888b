//! Role-based dashboard dispatch
//!
//! Each role gets one dashboard layout. The layout lists its panels in
//! display order; the key metrics panel is computed from the transaction log.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{NavTab, Transaction, TransactionStatus, TransactionType, UserRole};
use tsms_report::format_peso;

use crate::transactions::TransactionQuery;

/// Rows shown by the overview transaction panel
pub const OVERVIEW_TRANSACTION_LIMIT: usize = 5;

/// Dashboard layout for a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardView {
    /// Admin / IT Support: system metrics and user management
    Admin,
    /// Accounting / Finance: metrics, charts, full log, flagged items
    Finance,
    /// Commercial team: tenant performance
    Commercial,
    /// Super Admin: metrics, charts and the latest transactions
    Overview,
}

/// A block on the dashboard page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "panel")]
pub enum DashboardPanel {
    KeyMetrics,
    Charts,
    Transactions { limit: Option<usize> },
    FlaggedTransactions,
    UserManagement,
}

impl DashboardPanel {
    /// Log query behind a transactions panel, `None` for other panels
    pub fn transaction_query(&self) -> Option<TransactionQuery> {
        match self {
            Self::Transactions { limit: Some(limit) } => Some(TransactionQuery::latest(*limit)),
            Self::Transactions { limit: None } => Some(TransactionQuery::new()),
            _ => None,
        }
    }
}

impl DashboardView {
    pub fn for_role(role: UserRole) -> Self {
        match role {
            UserRole::Admin | UserRole::ItSupport => Self::Admin,
            UserRole::Accounting | UserRole::Finance => Self::Finance,
            UserRole::Commercial => Self::Commercial,
            UserRole::SuperAdmin => Self::Overview,
        }
    }

    /// Layout for the signed-in user; nobody signed in means Super Admin
    pub fn for_user(current: Option<UserRole>) -> Self {
        Self::for_role(UserRole::resolve(current))
    }

    /// Page heading, `None` for the overview
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Self::Admin => Some("ADMIN / IT SUPPORT DASHBOARD"),
            Self::Finance => Some("ACCOUNTING / FINANCE DASHBOARD"),
            Self::Commercial => Some("COMMERCIAL TEAM DASHBOARD"),
            Self::Overview => None,
        }
    }

    pub fn panels(&self) -> &'static [DashboardPanel] {
        use DashboardPanel::*;
        match self {
            Self::Admin => &[KeyMetrics, UserManagement],
            Self::Finance => &[
                KeyMetrics,
                Charts,
                Transactions { limit: None },
                FlaggedTransactions,
            ],
            Self::Commercial => &[KeyMetrics, Charts, Transactions { limit: None }],
            Self::Overview => &[
                KeyMetrics,
                Charts,
                Transactions {
                    limit: Some(OVERVIEW_TRANSACTION_LIMIT),
                },
            ],
        }
    }
}

/// Sidebar tabs of the signed-in user with their header titles
pub fn navigation(current: Option<UserRole>) -> Vec<(NavTab, &'static str)> {
    UserRole::resolve(current)
        .visible_tabs()
        .into_iter()
        .map(|tab| (tab, tab.title()))
        .collect()
}

/// One tile of the key metrics panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMetric {
    pub title: &'static str,
    pub value: String,
}

/// Daily sales, count, average ticket and active tenants for `day`
///
/// Only completed sales count towards sales and the average.
pub fn key_metrics(transactions: &[Transaction], day: NaiveDate) -> Vec<KeyMetric> {
    let todays: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date.date() == day)
        .collect();
    let sales: Vec<&Transaction> = todays
        .iter()
        .copied()
        .filter(|t| t.kind == TransactionType::Sale && t.status == TransactionStatus::Completed)
        .collect();

    let daily_sales: Decimal = sales.iter().map(|t| t.amount).sum();
    let average = if sales.is_empty() {
        Decimal::ZERO
    } else {
        daily_sales / Decimal::from(sales.len())
    };
    let active: HashSet<&str> = todays.iter().map(|t| t.tenant.as_str()).collect();
    let all: HashSet<&str> = transactions.iter().map(|t| t.tenant.as_str()).collect();

    vec![
        KeyMetric {
            title: "Daily Sales",
            value: format_peso(daily_sales),
        },
        KeyMetric {
            title: "Transactions",
            value: todays.len().to_string(),
        },
        KeyMetric {
            title: "Avg. Transaction",
            value: format_peso(average),
        },
        KeyMetric {
            title: "Active Tenants",
            value: format!("{}/{}", active.len(), all.len()),
        },
    ]
}
