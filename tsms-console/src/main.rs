use tsms_console::{SalesReportService, fixtures, parse_kind, setup_environment};
use tsms_report::FilePrintSink;

/// Usage: `tsms-console [monthly|daily|hourly] [records.json]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. dotenv, work dir, logger
    let config = setup_environment()?;

    let mut args = std::env::args().skip(1);
    let kind = parse_kind(args.next().as_deref().unwrap_or("monthly"))?;

    // 2. Records from a JSON file, demo data otherwise
    let service = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            SalesReportService::from_json(&config, &json)?
        }
        None => SalesReportService::new(&config, fixtures::sales_records()),
    };

    // 3. Print into <work_dir>/print
    let sink = FilePrintSink::new(config.print_dir())?;
    let date = kind
        .is_flat()
        .then(|| chrono::Local::now().naive_local());
    service.print(kind, date, &sink);

    tracing::info!(
        %kind,
        gross_sales = %service.totals().gross_sales,
        "Sales report printed"
    );
    Ok(())
}
