//! Sales report service against a real print directory

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{ReportKind, UserRole};
use tsms_console::{Config, DashboardView, SalesReportService, fixtures};
use tsms_report::{FilePrintSink, MemoryPrintSink};

const RECORDS_JSON: &str = r#"[
    {"day": 1, "vatableTransactions": 10000, "grossSales": 10000},
    {"day": 2, "vatableTransactions": 2500.75, "localTax": 12.5, "grossSales": 2513.25},
    {"day": 3, "grossSales": "oops"}
]"#;

fn config(dir: &std::path::Path) -> Config {
    let mut config = Config::with_overrides(dir.to_string_lossy(), "Kape Kultura", "Makati");
    config.report_month = "MARCH".into();
    config.report_year = "2025".into();
    config.tenant_name = "Juan dela Cruz".into();
    config
}

#[test]
fn monthly_report_lands_in_print_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    std::fs::create_dir_all(config.print_dir()).unwrap();

    let service = SalesReportService::from_json(&config, RECORDS_JSON).unwrap();
    assert_eq!(service.records().len(), 3);
    assert_eq!(service.totals().gross_sales, Decimal::new(1251325, 2));

    let sink = FilePrintSink::new(config.print_dir()).unwrap();
    service.print(ReportKind::Monthly, None, &sink);

    let files: Vec<_> = std::fs::read_dir(config.print_dir())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);

    let name = files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("sales-report-monthly-"));

    let document = std::fs::read_to_string(&files[0]).unwrap();
    assert!(document.contains("Kape Kultura / Makati Branch"));
    assert!(document.contains("For the month of MARCH 2025"));
    assert!(document.contains("Juan dela Cruz"));
    assert!(document.contains("window.print()"));
}

#[test]
fn missing_print_dir_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let service = SalesReportService::new(&config, fixtures::sales_records());

    let sink = FilePrintSink::new(config.print_dir()).unwrap();
    service.print(ReportKind::Monthly, None, &sink);
    assert!(!config.print_dir().exists());
}

#[test]
fn hourly_preview_carries_time() {
    let dir = tempfile::tempdir().unwrap();
    let service = SalesReportService::new(&config(dir.path()), fixtures::sales_records());
    let at = NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(21, 5, 0)
        .unwrap();

    let hourly = service.preview(ReportKind::Hourly, Some(at));
    assert!(hourly.contains("Hourly Sales Report"));
    assert!(hourly.contains("March 14, 2025"));
    assert!(hourly.contains("9:05 PM"));

    let daily = service.preview(ReportKind::Daily, Some(at));
    assert!(daily.contains("March 14, 2025"));
    assert!(!daily.contains("9:05 PM"));
}

#[test]
fn finance_user_flow() {
    let dir = tempfile::tempdir().unwrap();
    let service = SalesReportService::new(&config(dir.path()), fixtures::sales_records());
    let role = UserRole::Finance;

    assert_eq!(DashboardView::for_role(role), DashboardView::Finance);
    let sink = MemoryPrintSink::new();
    service
        .print_as(role, ReportKind::Monthly, None, &sink)
        .unwrap();

    let jobs = sink.jobs();
    assert_eq!(jobs.len(), 1);
    assert!(jobs[0].printed && jobs[0].closed);
    assert!(jobs[0].document.contains("₱5952.84"));
    assert!(jobs[0].document.contains("₱43654.16"));
}
