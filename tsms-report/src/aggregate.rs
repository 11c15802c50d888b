//! Sales report aggregation
//!
//! Reduces daily records into column totals, then derives the VAT and
//! net sales figures of the monthly summary. Both steps are pure and run
//! in full on every render.

use shared::models::{DailySalesRecord, DerivedTaxFigures, ReportTotals};
use tracing::debug;

use crate::error::ReportResult;
use crate::money::{VAT_RATE, round2};

/// Sum every amount field (nested ones component-wise) across `records`
///
/// An empty input yields all-zero totals. Sums are exact, so the result
/// does not depend on record order. No rounding is applied here.
pub fn aggregate<'a, I>(records: I) -> ReportTotals
where
    I: IntoIterator<Item = &'a DailySalesRecord>,
{
    let mut count = 0usize;
    let totals = records.into_iter().fold(ReportTotals::zero(), |mut acc, record| {
        acc += record;
        count += 1;
        acc
    });
    debug!(records = count, gross_sales = %totals.gross_sales, "Aggregated sales records");
    totals
}

/// VAT, net sales and percentage-rent base from the vatable total
///
/// Adjustment lines shown on the report (promo discounts, VIP cards,
/// SC exempt sales, other tax, service charge) do not enter the
/// percentage-rent figure.
pub fn derive_tax_figures(totals: &ReportTotals) -> DerivedTaxFigures {
    let net_sales = totals.vatable_transactions;
    let vat = round2(net_sales * VAT_RATE);
    let net_sales_after_vat = net_sales - vat;

    DerivedTaxFigures {
        vat,
        net_sales,
        net_sales_after_vat,
        net_sales_subject_to_percentage_rent: net_sales_after_vat,
    }
}

/// Parse a JSON array of daily records
///
/// Individual amount fields are lenient (missing or malformed → 0); only a
/// document that is not an array of objects is rejected.
pub fn load_records(json: &str) -> ReportResult<Vec<DailySalesRecord>> {
    let records: Vec<DailySalesRecord> = serde_json::from_str(json)?;
    debug!(count = records.len(), "Loaded sales records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn fixture() -> Vec<DailySalesRecord> {
        ["23234.00", "1323.00", "2525.00", "22525.00"]
            .iter()
            .enumerate()
            .map(|(i, v)| DailySalesRecord::vatable_only(i as u32 + 1, dec(v)))
            .collect()
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let totals = aggregate(&Vec::<DailySalesRecord>::new());
        assert!(totals.is_zero());
        assert_eq!(totals.sales_discount.with_approval, Decimal::ZERO);
        assert_eq!(totals.service_charge.retained_by_management, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_fixture() {
        let totals = aggregate(&fixture());
        assert_eq!(totals.vatable_transactions, dec("49607.00"));
        assert_eq!(totals.gross_sales, dec("49607.00"));
        assert_eq!(totals.local_tax, Decimal::ZERO);

        let figures = derive_tax_figures(&totals);
        assert_eq!(figures.vat, dec("5952.84"));
        assert_eq!(figures.net_sales_after_vat, dec("43654.16"));
        assert_eq!(figures.net_sales_subject_to_percentage_rent, dec("43654.16"));
    }

    #[test]
    fn test_aggregate_nested_fields_component_wise() {
        let mut a = DailySalesRecord::vatable_only(1, dec("100"));
        a.sales_discount.with_approval = dec("5.25");
        a.service_charge.distributed_to_employees = dec("3");
        let mut b = DailySalesRecord::vatable_only(2, dec("50"));
        b.sales_discount.without_approval = dec("1.10");
        b.service_charge.distributed_to_employees = dec("4.5");
        b.service_charge.retained_by_management = dec("2");

        let totals = aggregate(&[a, b]);
        assert_eq!(totals.sales_discount.with_approval, dec("5.25"));
        assert_eq!(totals.sales_discount.without_approval, dec("1.10"));
        assert_eq!(totals.service_charge.distributed_to_employees, dec("7.5"));
        assert_eq!(totals.service_charge.retained_by_management, dec("2"));
        assert_eq!(totals.vatable_transactions, dec("150"));
    }

    #[test]
    fn test_aggregate_keeps_unrounded_sums() {
        let records = [
            DailySalesRecord::vatable_only(1, dec("0.004")),
            DailySalesRecord::vatable_only(2, dec("0.004")),
        ];
        assert_eq!(aggregate(&records).vatable_transactions, dec("0.008"));
    }

    #[test]
    fn test_tax_figures_ten_thousand() {
        let totals = ReportTotals {
            vatable_transactions: dec("10000"),
            ..ReportTotals::zero()
        };
        let figures = derive_tax_figures(&totals);
        assert_eq!(figures.vat, dec("1200.00"));
        assert_eq!(figures.net_sales, dec("10000.00"));
        assert_eq!(figures.net_sales_after_vat, dec("8800.00"));
        assert_eq!(figures.net_sales_subject_to_percentage_rent, dec("8800.00"));
    }

    #[test]
    fn test_tax_figures_zero() {
        let figures = derive_tax_figures(&ReportTotals::zero());
        assert_eq!(figures, DerivedTaxFigures::default());
    }

    #[test]
    fn test_tax_figures_ignore_other_columns() {
        let totals = ReportTotals {
            vatable_transactions: dec("1000"),
            sc_vat_exempt_transactions: dec("500"),
            local_tax: dec("20"),
            gross_sales: dec("1520"),
            ..ReportTotals::zero()
        };
        let figures = derive_tax_figures(&totals);
        assert_eq!(figures.vat, dec("120.00"));
        assert_eq!(figures.net_sales_subject_to_percentage_rent, dec("880.00"));
    }

    #[test]
    fn test_gross_not_validated() {
        let mut record = DailySalesRecord::vatable_only(1, dec("100"));
        record.gross_sales = dec("999");
        let totals = aggregate(&[record]);
        assert_eq!(totals.gross_sales, dec("999"));
        assert_eq!(totals.vatable_transactions, dec("100"));
    }

    #[test]
    fn test_load_records_missing_local_tax() {
        let json = r#"[
            {"day": 1, "vatableTransactions": 100.5, "localTax": 2, "grossSales": 102.5},
            {"day": 2, "vatableTransactions": 50, "grossSales": 50}
        ]"#;
        let records = load_records(json).unwrap();
        let totals = aggregate(&records);
        assert_eq!(totals.local_tax, dec("2"));
        assert_eq!(totals.vatable_transactions, dec("150.5"));
    }

    #[test]
    fn test_load_records_rejects_non_array() {
        assert!(load_records(r#"{"day": 1}"#).is_err());
    }
}
