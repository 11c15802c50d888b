//! Transaction log query
//!
//! Filtering, limiting and sorting of the in-memory transaction log.
//! The limit is applied to the filtered list before sorting.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{Transaction, TransactionType};

/// Default order of the log: newest first
pub const DEFAULT_SORT: (SortField, SortDirection) = (SortField::Date, SortDirection::Desc);

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Id,
    Date,
    Tenant,
    Terminal,
    #[serde(rename = "type")]
    Kind,
    Amount,
    Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Column scope of the advanced search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    All,
    Id,
    Date,
    Tenant,
    Terminal,
    #[serde(rename = "type")]
    Kind,
    Amount,
    Status,
}

/// Transaction log filter/sort state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Case-insensitive match on id, tenant or terminal
    pub search: String,
    /// Exact tenant, `None` for all tenants
    pub tenant: Option<String>,
    /// Exact type, `None` for all types
    pub kind: Option<TransactionType>,
    /// Same calendar date
    pub date: Option<NaiveDate>,
    pub advanced_term: String,
    pub advanced_field: SearchField,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub limit: Option<usize>,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            tenant: None,
            kind: None,
            date: None,
            advanced_term: String::new(),
            advanced_field: SearchField::All,
            sort_field: DEFAULT_SORT.0,
            sort_direction: DEFAULT_SORT.1,
            limit: None,
        }
    }
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The newest `limit` rows of the default log
    pub fn latest(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn with_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_advanced(mut self, term: impl Into<String>, field: SearchField) -> Self {
        self.advanced_term = term.into();
        self.advanced_field = field;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }

    /// Column header click: flip on the same field, ascending on a new one
    pub fn toggle_sort(&mut self, field: SortField) {
        if field == self.sort_field {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Filter, then limit, then sort
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut rows: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();

        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }

        rows.sort_by(|a, b| {
            let ord = compare(a, b, self.sort_field);
            match self.sort_direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }

    pub fn matches(&self, t: &Transaction) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = t.id.to_lowercase().contains(&search)
            || t.tenant.to_lowercase().contains(&search)
            || t.terminal.to_lowercase().contains(&search);

        let matches_tenant = self.tenant.as_ref().is_none_or(|tenant| &t.tenant == tenant);
        let matches_kind = self.kind.is_none_or(|kind| t.kind == kind);
        let matches_date = self.date.is_none_or(|date| t.date.date() == date);

        matches_search
            && matches_tenant
            && matches_kind
            && matches_date
            && self.matches_advanced(t)
    }

    fn matches_advanced(&self, t: &Transaction) -> bool {
        if self.advanced_term.is_empty() {
            return true;
        }
        let term = self.advanced_term.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&term);

        match self.advanced_field {
            SearchField::All => {
                contains(&t.id)
                    || contains(&t.tenant)
                    || contains(&t.terminal)
                    || contains(t.kind.as_str())
                    || contains(t.status.as_str())
                    || amount_text(t).contains(&term)
                    || contains(&display_date(t))
            }
            SearchField::Id => contains(&t.id),
            SearchField::Date => contains(&display_date(t)),
            SearchField::Tenant => contains(&t.tenant),
            SearchField::Terminal => contains(&t.terminal),
            SearchField::Kind => contains(t.kind.as_str()),
            SearchField::Amount => amount_text(t).contains(&term),
            SearchField::Status => contains(t.status.as_str()),
        }
    }
}

/// Unique tenants in first-seen order
pub fn tenants(transactions: &[Transaction]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for t in transactions {
        if !seen.iter().any(|s| s == &t.tenant) {
            seen.push(t.tenant.clone());
        }
    }
    seen
}

/// `Jun 1, 2023`
fn display_date(t: &Transaction) -> String {
    t.date.format("%b %-d, %Y").to_string()
}

/// Shortest decimal text of the amount (`24.9`, `45`)
fn amount_text(t: &Transaction) -> String {
    t.amount.normalize().to_string()
}

fn compare(a: &Transaction, b: &Transaction, field: SortField) -> Ordering {
    match field {
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::Date => a.date.cmp(&b.date),
        SortField::Id => cmp_lower(&a.id, &b.id),
        SortField::Tenant => cmp_lower(&a.tenant, &b.tenant),
        SortField::Terminal => cmp_lower(&a.terminal, &b.terminal),
        SortField::Kind => a.kind.as_str().cmp(b.kind.as_str()),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

fn cmp_lower(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal::Decimal;

    fn terminals(rows: &[Transaction]) -> Vec<&str> {
        rows.iter().map(|t| t.terminal.as_str()).collect()
    }

    #[test]
    fn test_default_is_newest_first() {
        let rows = TransactionQuery::new().apply(&fixtures::transactions());
        assert_eq!(rows.len(), 10);
        assert!(rows.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let rows = TransactionQuery::new()
            .with_search("pos-003")
            .apply(&fixtures::transactions());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|t| t.terminal == "POS-003"));
    }

    #[test]
    fn test_filter_by_kind_and_date() {
        let june_2 = NaiveDate::from_ymd_opt(2023, 6, 2).unwrap();
        let rows = TransactionQuery::new()
            .with_kind(TransactionType::Sale)
            .with_date(june_2)
            .apply(&fixtures::transactions());
        assert_eq!(terminals(&rows), vec!["POS-004", "POS-003"]);
    }

    #[test]
    fn test_tenant_filter_is_exact() {
        let all = fixtures::transactions();
        assert_eq!(TransactionQuery::new().with_tenant("C-T1005").apply(&all).len(), 10);
        assert!(TransactionQuery::new().with_tenant("c-t1005").apply(&all).is_empty());
    }

    #[test]
    fn test_limit_applies_before_sort() {
        // First three in input order, then sorted by amount
        let rows = TransactionQuery::new()
            .with_limit(3)
            .sorted_by(SortField::Amount, SortDirection::Asc)
            .apply(&fixtures::transactions());
        let amounts: Vec<Decimal> = rows.iter().map(|t| t.amount).collect();
        assert_eq!(
            amounts,
            vec![Decimal::new(249, 1), Decimal::new(5995, 2), Decimal::new(875, 1)]
        );
    }

    #[test]
    fn test_amount_sorts_numerically() {
        let rows = TransactionQuery::new()
            .sorted_by(SortField::Amount, SortDirection::Desc)
            .apply(&fixtures::transactions());
        assert_eq!(rows[0].amount, Decimal::new(29999, 2));
        assert_eq!(rows[9].amount, Decimal::new(125, 1));
    }

    #[test]
    fn test_string_fields_sort_lowercase() {
        let rows = TransactionQuery::new()
            .sorted_by(SortField::Kind, SortDirection::Asc)
            .apply(&fixtures::transactions());
        assert_eq!(rows[0].kind, TransactionType::Refund);
        assert_eq!(rows[9].kind, TransactionType::Void);
    }

    #[test]
    fn test_advanced_search() {
        let all = fixtures::transactions();
        let by_amount = TransactionQuery::new()
            .with_advanced("24.9", SearchField::Amount)
            .apply(&all);
        assert_eq!(by_amount.len(), 1);

        let by_date = TransactionQuery::new()
            .with_advanced("jun 2", SearchField::Date)
            .apply(&all);
        assert_eq!(by_date.len(), 3);

        let any = TransactionQuery::new()
            .with_advanced("PENDING", SearchField::All)
            .apply(&all);
        assert_eq!(any.len(), 2);

        let status_only = TransactionQuery::new()
            .with_advanced("pos", SearchField::Status)
            .apply(&all);
        assert!(status_only.is_empty());
    }

    #[test]
    fn test_toggle_sort() {
        let mut query = TransactionQuery::new();
        query.toggle_sort(SortField::Date);
        assert_eq!(query.sort_direction, SortDirection::Asc);
        query.toggle_sort(SortField::Date);
        assert_eq!(query.sort_direction, SortDirection::Desc);
        query.toggle_sort(SortField::Amount);
        assert_eq!(
            (query.sort_field, query.sort_direction),
            (SortField::Amount, SortDirection::Asc)
        );
    }

    #[test]
    fn test_tenants_first_seen_order() {
        let mut all = fixtures::transactions();
        all[3].tenant = "B-T2001".into();
        all[5].tenant = "A-T3001".into();
        all[7].tenant = "B-T2001".into();
        assert_eq!(tenants(&all), vec!["C-T1005", "B-T2001", "A-T3001"]);
    }
}
