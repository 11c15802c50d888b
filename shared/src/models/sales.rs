//! Sales Report Models (certified monthly sales report)
//!
//! Amounts are `Decimal` end to end so sums are exact. Every numeric field
//! (amounts and the day) deserializes leniently: a missing, `null` or
//! unparseable value becomes zero instead of rejecting the record.

use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Promo sales discount, split by approval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SalesDiscount {
    #[serde(deserialize_with = "lenient_amount")]
    pub with_approval: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub without_approval: Decimal,
}

/// Collected service charge, split between staff and management
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceCharge {
    #[serde(deserialize_with = "lenient_amount")]
    pub distributed_to_employees: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub retained_by_management: Decimal,
}

/// One report row: a calendar day (monthly report) or a terminal/hour slice
///
/// `gross_sales` is expected to equal the sum of the category amounts but
/// is carried as reported by the POS, never recomputed or checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DailySalesRecord {
    /// Day of month (1-31), 0 when missing or unreadable
    #[serde(deserialize_with = "lenient_day")]
    pub day: u32,
    /// Net of discounts, service charge and local tax
    #[serde(deserialize_with = "lenient_amount")]
    pub vatable_transactions: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub sc_vat_exempt_transactions: Decimal,
    pub sales_discount: SalesDiscount,
    #[serde(deserialize_with = "lenient_amount")]
    pub employee_discount: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub senior_citizen_discount: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub pwd_discount: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub vip_card_discount: Decimal,
    #[serde(deserialize_with = "lenient_amount")]
    pub local_tax: Decimal,
    pub service_charge: ServiceCharge,
    #[serde(deserialize_with = "lenient_amount")]
    pub gross_sales: Decimal,
}

impl DailySalesRecord {
    /// A record carrying only vatable sales, reported gross as the same amount
    pub fn vatable_only(day: u32, amount: Decimal) -> Self {
        Self {
            day,
            vatable_transactions: amount,
            gross_sales: amount,
            ..Default::default()
        }
    }
}

/// Column-wise sums of a set of `DailySalesRecord`s
///
/// Computed fresh on each render, never stored. Values are unrounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    pub vatable_transactions: Decimal,
    pub sc_vat_exempt_transactions: Decimal,
    pub sales_discount: SalesDiscount,
    pub employee_discount: Decimal,
    pub senior_citizen_discount: Decimal,
    pub pwd_discount: Decimal,
    pub vip_card_discount: Decimal,
    pub local_tax: Decimal,
    pub service_charge: ServiceCharge,
    pub gross_sales: Decimal,
}

impl ReportTotals {
    /// All-zero totals (the sum of no records)
    pub fn zero() -> Self {
        Self::default()
    }

    /// True when every field, nested ones included, is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Component-wise sum of two totals
    pub fn merge(&self, other: &ReportTotals) -> ReportTotals {
        *self + *other
    }
}

impl Add for SalesDiscount {
    type Output = SalesDiscount;

    fn add(self, rhs: SalesDiscount) -> SalesDiscount {
        SalesDiscount {
            with_approval: self.with_approval + rhs.with_approval,
            without_approval: self.without_approval + rhs.without_approval,
        }
    }
}

impl Add for ServiceCharge {
    type Output = ServiceCharge;

    fn add(self, rhs: ServiceCharge) -> ServiceCharge {
        ServiceCharge {
            distributed_to_employees: self.distributed_to_employees + rhs.distributed_to_employees,
            retained_by_management: self.retained_by_management + rhs.retained_by_management,
        }
    }
}

impl Add for ReportTotals {
    type Output = ReportTotals;

    fn add(self, rhs: ReportTotals) -> ReportTotals {
        ReportTotals {
            vatable_transactions: self.vatable_transactions + rhs.vatable_transactions,
            sc_vat_exempt_transactions: self.sc_vat_exempt_transactions
                + rhs.sc_vat_exempt_transactions,
            sales_discount: self.sales_discount + rhs.sales_discount,
            employee_discount: self.employee_discount + rhs.employee_discount,
            senior_citizen_discount: self.senior_citizen_discount + rhs.senior_citizen_discount,
            pwd_discount: self.pwd_discount + rhs.pwd_discount,
            vip_card_discount: self.vip_card_discount + rhs.vip_card_discount,
            local_tax: self.local_tax + rhs.local_tax,
            service_charge: self.service_charge + rhs.service_charge,
            gross_sales: self.gross_sales + rhs.gross_sales,
        }
    }
}

impl From<&DailySalesRecord> for ReportTotals {
    fn from(record: &DailySalesRecord) -> Self {
        ReportTotals {
            vatable_transactions: record.vatable_transactions,
            sc_vat_exempt_transactions: record.sc_vat_exempt_transactions,
            sales_discount: record.sales_discount,
            employee_discount: record.employee_discount,
            senior_citizen_discount: record.senior_citizen_discount,
            pwd_discount: record.pwd_discount,
            vip_card_discount: record.vip_card_discount,
            local_tax: record.local_tax,
            service_charge: record.service_charge,
            gross_sales: record.gross_sales,
        }
    }
}

impl AddAssign<&DailySalesRecord> for ReportTotals {
    fn add_assign(&mut self, record: &DailySalesRecord) {
        *self = *self + ReportTotals::from(record);
    }
}

/// VAT and net sales lines of the monthly summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTaxFigures {
    /// 12% of vatable transactions, rounded to 2 dp
    pub vat: Decimal,
    pub net_sales: Decimal,
    pub net_sales_after_vat: Decimal,
    pub net_sales_subject_to_percentage_rent: Decimal,
}

/// Accept a number, a numeric string, `null` or anything else (as zero)
pub(crate) fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => parse_amount(&n.to_string()),
        Value::String(s) => parse_amount(s.trim()),
        _ => Decimal::ZERO,
    })
}

/// Accept an integer, an integral float or numeric string; anything else is 0
pub(crate) fn lenient_day<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let day = match value {
        Value::Number(n) => parse_day(&n.to_string()),
        Value::String(s) => parse_day(s.trim()),
        _ => None,
    };
    Ok(day.unwrap_or(0))
}

fn parse_day(s: &str) -> Option<u32> {
    let day = parse_amount(s);
    if day.fract().is_zero() {
        day.to_u32()
    } else {
        None
    }
}

fn parse_amount(s: &str) -> Decimal {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or(Decimal::ZERO)
}
