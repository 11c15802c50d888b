use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use shared::models::{DailySalesRecord, ReportTotals, SalesDiscount, ServiceCharge};
use tsms_report::{aggregate, derive_tax_figures, load_records};

fn amount(rng: &mut StdRng) -> Decimal {
    // Up to 99,999.99 with cent precision
    Decimal::new(rng.gen_range(0..10_000_000i64), 2)
}

fn random_records(rng: &mut StdRng, count: usize) -> Vec<DailySalesRecord> {
    (0..count)
        .map(|i| DailySalesRecord {
            day: (i % 31) as u32 + 1,
            vatable_transactions: amount(rng),
            sc_vat_exempt_transactions: amount(rng),
            sales_discount: SalesDiscount {
                with_approval: amount(rng),
                without_approval: amount(rng),
            },
            employee_discount: amount(rng),
            senior_citizen_discount: amount(rng),
            pwd_discount: amount(rng),
            vip_card_discount: amount(rng),
            local_tax: amount(rng),
            service_charge: ServiceCharge {
                distributed_to_employees: amount(rng),
                retained_by_management: amount(rng),
            },
            gross_sales: amount(rng),
        })
        .collect()
}

#[test]
fn test_empty_input_yields_zero_totals() {
    let totals = aggregate(&Vec::<DailySalesRecord>::new());
    assert_eq!(totals, ReportTotals::zero());
    assert_eq!(totals.sales_discount, SalesDiscount::default());
    assert_eq!(totals.service_charge, ServiceCharge::default());
}

#[test]
fn test_aggregate_is_order_independent() {
    let mut rng = StdRng::seed_from_u64(0x7535);
    for round in 0..50 {
        let mut records = random_records(&mut rng, 1 + round % 31);
        let expected = aggregate(&records);
        for _ in 0..10 {
            records.shuffle(&mut rng);
            assert_eq!(aggregate(&records), expected, "round {round}");
        }
    }
}

#[test]
fn test_aggregate_is_additive_over_partitions() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let records = random_records(&mut rng, 31);
        let split = rng.gen_range(0..=records.len());
        let (a, b) = records.split_at(split);

        let whole = aggregate(&records);
        assert_eq!(whole, aggregate(a).merge(&aggregate(b)));
        assert_eq!(whole, aggregate(a) + aggregate(b));
    }
}

#[test]
fn test_fixture_month() {
    let json = r#"[
        {"day": 1, "vatableTransactions": 23234.00, "grossSales": 23234.00},
        {"day": 2, "vatableTransactions": 1323.00, "grossSales": 1323.00},
        {"day": 3, "vatableTransactions": 2525.00, "grossSales": 2525.00},
        {"day": 4, "vatableTransactions": 22525.00, "grossSales": 22525.00}
    ]"#;
    let records = load_records(json).expect("fixture parses");
    let totals = aggregate(&records);
    assert_eq!(totals.vatable_transactions, Decimal::new(4960700, 2));
    assert_eq!(totals.gross_sales, Decimal::new(4960700, 2));

    let figures = derive_tax_figures(&totals);
    assert_eq!(figures.vat, Decimal::new(595284, 2));
    assert_eq!(figures.net_sales_after_vat, Decimal::new(4365416, 2));
    assert_eq!(figures.net_sales_subject_to_percentage_rent, Decimal::new(4365416, 2));
}

#[test]
fn test_malformed_fields_count_as_zero() {
    let json = r#"[
        {"day": 1, "vatableTransactions": "abc", "localTax": null, "grossSales": 10},
        {"day": 2, "vatableTransactions": "250.50", "salesDiscount": {"withApproval": 5}}
    ]"#;
    let records = load_records(json).expect("lenient parse");
    let totals = aggregate(&records);
    assert_eq!(totals.vatable_transactions, Decimal::new(25050, 2));
    assert_eq!(totals.local_tax, Decimal::ZERO);
    assert_eq!(totals.sales_discount.with_approval, Decimal::from(5));
    assert_eq!(totals.sales_discount.without_approval, Decimal::ZERO);
    assert_eq!(totals.gross_sales, Decimal::from(10));
}

#[test]
fn test_malformed_day_keeps_the_document() {
    let json = r#"[
        {"day": null, "vatableTransactions": 100, "grossSales": 100},
        {"day": "3", "vatableTransactions": 200, "grossSales": 200},
        {"day": 3.0, "vatableTransactions": 300, "grossSales": 300},
        {"day": "Monday", "vatableTransactions": 400, "grossSales": 400}
    ]"#;
    let records = load_records(json).expect("lenient day");
    let days: Vec<u32> = records.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![0, 3, 3, 0]);
    assert_eq!(aggregate(&records).gross_sales, Decimal::from(1000));
}
