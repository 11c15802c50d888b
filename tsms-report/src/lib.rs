//! # tsms-report
//!
//! Sales report library for TSMS: aggregation, formatting and printing.
//!
//! ## Scope
//!
//! This crate handles the report pipeline:
//! - Aggregating daily sales records into totals
//! - VAT / net sales derivation for the monthly summary
//! - Peso and plain currency formatting
//! - Monthly and daily/hourly table shaping
//! - HTML markup and the standalone print document
//! - Print sinks (file, memory)
//!
//! Where the records come from and who may print stays in application
//! code (`tsms-console`).
//!
//! ## Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use shared::models::{DailySalesRecord, ReportHeader, ReportKind};
//! use tsms_report::{
//!     MemoryPrintSink, ReportContext, ReportRenderer, aggregate, derive_tax_figures, print_report,
//! };
//!
//! let records = vec![DailySalesRecord::vatable_only(1, Decimal::from(10000))];
//! let totals = aggregate(&records);
//! assert_eq!(derive_tax_figures(&totals).vat, Decimal::new(120000, 2));
//!
//! let sink = MemoryPrintSink::new();
//! let ctx = ReportContext::new(ReportKind::Monthly, ReportHeader::default(), records);
//! print_report(&sink, &ReportRenderer::default(), &ctx);
//! assert_eq!(sink.job_count(), 1);
//! ```

mod aggregate;
mod error;
mod html;
mod money;
mod printer;
mod renderer;
mod table;

// Re-exports
pub use aggregate::{aggregate, derive_tax_figures, load_records};
pub use error::{PrintError, PrintResult, ReportError, ReportResult};
pub use html::{HtmlBuilder, escape_html};
pub use money::{CurrencyStyle, PESO_SIGN, VAT_RATE, format_currency, format_peso, format_plain, round2};
pub use printer::{
    FilePrintContext, FilePrintSink, MemoryPrintContext, MemoryPrintSink, PrintContext, PrintJob,
    PrintSink, print_report,
};
pub use renderer::{
    DEFAULT_CSS_URL, DEFAULT_LOGO_URL, PRINT_TITLE, PrintAssets, ReportContext, ReportRenderer,
};
pub use table::{
    CellAlign, FLAT_COLUMNS, MONTHLY_COLUMNS, MonthlySummary, ReportTable, SummaryLine,
    SummaryLineKind, TableCell, TableRow,
};
