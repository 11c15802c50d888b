//! Sales report service
//!
//! Holds the report header, renderer and current records. Totals, tables
//! and documents are recomputed from the records on every call.

use chrono::NaiveDateTime;
use shared::error::{AppError, AppResult};
use shared::models::{
    DailySalesRecord, DerivedTaxFigures, NavTab, ReportHeader, ReportKind, ReportTotals, UserRole,
};
use tracing::{info, instrument};
use tsms_report::{
    MonthlySummary, PrintSink, ReportContext, ReportError, ReportRenderer, ReportTable, aggregate,
    derive_tax_figures, load_records, print_report,
};

use crate::core::Config;

/// Parse a report kind name (`monthly`, `daily`, `hourly`)
pub fn parse_kind(name: &str) -> AppResult<ReportKind> {
    name.parse::<ReportKind>()
        .map_err(|e| ReportError::InvalidKind(e.0).into())
}

#[derive(Debug, Clone)]
pub struct SalesReportService {
    header: ReportHeader,
    renderer: ReportRenderer,
    records: Vec<DailySalesRecord>,
}

impl SalesReportService {
    pub fn new(config: &Config, records: Vec<DailySalesRecord>) -> Self {
        Self {
            header: config.report_header(),
            renderer: ReportRenderer::new(config.print_assets()),
            records,
        }
    }

    /// Build from a JSON array of daily records
    pub fn from_json(config: &Config, json: &str) -> AppResult<Self> {
        let records = load_records(json).map_err(AppError::from)?;
        info!(count = records.len(), "Sales records loaded");
        Ok(Self::new(config, records))
    }

    pub fn header(&self) -> &ReportHeader {
        &self.header
    }

    pub fn records(&self) -> &[DailySalesRecord] {
        &self.records
    }

    pub fn replace_records(&mut self, records: Vec<DailySalesRecord>) {
        self.records = records;
    }

    pub fn totals(&self) -> ReportTotals {
        aggregate(&self.records)
    }

    pub fn tax_figures(&self) -> DerivedTaxFigures {
        derive_tax_figures(&self.totals())
    }

    pub fn table(&self, kind: ReportKind) -> ReportTable {
        ReportTable::build(kind, &self.records, &self.totals())
    }

    pub fn summary(&self) -> MonthlySummary {
        MonthlySummary::from_figures(&self.tax_figures())
    }

    /// Render context; `date` only shows on daily/hourly reports
    pub fn context(&self, kind: ReportKind, date: Option<NaiveDateTime>) -> ReportContext {
        let ctx = ReportContext::new(kind, self.header.clone(), self.records.clone());
        match date {
            Some(date) => ctx.with_date(date),
            None => ctx,
        }
    }

    /// Report markup without the print wrapper (preview)
    pub fn preview(&self, kind: ReportKind, date: Option<NaiveDateTime>) -> String {
        self.renderer.render_markup(&self.context(kind, date))
    }

    /// Send the print document to `sink`; silent when the sink is unavailable
    #[instrument(skip(self, sink))]
    pub fn print<S: PrintSink>(&self, kind: ReportKind, date: Option<NaiveDateTime>, sink: &S) {
        print_report(sink, &self.renderer, &self.context(kind, date));
    }

    /// `print` for a signed-in role, gated like the Sales Reports tab
    pub fn print_as<S: PrintSink>(
        &self,
        role: UserRole,
        kind: ReportKind,
        date: Option<NaiveDateTime>,
        sink: &S,
    ) -> AppResult<()> {
        if !role.can_access(NavTab::SalesReports) {
            return Err(AppError::permission_denied(format!(
                "{} cannot print sales reports",
                role
            ))
            .with_detail("role", role.display_name()));
        }
        self.print(kind, date, sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal::Decimal;
    use shared::error::ErrorCode;
    use tsms_report::MemoryPrintSink;

    fn service() -> SalesReportService {
        let config = Config::with_overrides("/tmp/tsms", "Tradename", "Branch");
        SalesReportService::new(&config, fixtures::sales_records())
    }

    #[test]
    fn test_totals_and_figures() {
        let service = service();
        assert_eq!(service.totals().gross_sales, Decimal::new(4960700, 2));
        let figures = service.tax_figures();
        assert_eq!(figures.vat, Decimal::new(595284, 2));
        assert_eq!(figures.net_sales_after_vat, Decimal::new(4365416, 2));
    }

    #[test]
    fn test_recomputes_after_replace() {
        let mut service = service();
        service.replace_records(vec![DailySalesRecord::vatable_only(1, Decimal::from(10000))]);
        assert_eq!(service.tax_figures().vat, Decimal::new(120000, 2));
        assert_eq!(service.table(ReportKind::Monthly).data_rows, 1);

        service.replace_records(Vec::new());
        assert!(service.totals().is_zero());
        assert_eq!(
            service.summary().value_of("Net Sales Subject to Percentage rent"),
            Some("₱0.00")
        );
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(parse_kind("Hourly").unwrap(), ReportKind::Hourly);
        let err = parse_kind("weekly").unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportKindInvalid);
    }

    #[test]
    fn test_print_as_requires_report_access() {
        let service = service();
        let sink = MemoryPrintSink::new();

        let err = service
            .print_as(UserRole::Commercial, ReportKind::Monthly, None, &sink)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert_eq!(sink.job_count(), 0);

        service
            .print_as(UserRole::Finance, ReportKind::Monthly, None, &sink)
            .unwrap();
        assert_eq!(sink.job_count(), 1);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let config = Config::with_overrides("/tmp/tsms", "T", "B");
        let err = SalesReportService::from_json(&config, "not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::ReportDataInvalid);
    }
}
