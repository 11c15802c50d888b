//! Sales report renderer
//!
//! Renders a [`ReportContext`] into report markup, and wraps that markup
//! into the standalone print document.

use chrono::NaiveDateTime;
use shared::models::{DailySalesRecord, ReportHeader, ReportKind};
use tracing::{debug, instrument};

use crate::aggregate::{aggregate, derive_tax_figures};
use crate::html::HtmlBuilder;
use crate::table::{MonthlySummary, ReportTable, SummaryLineKind, TableRow};

/// Default CSS framework loaded by the print document
pub const DEFAULT_CSS_URL: &str = "https://cdn.tailwindcss.com";

/// Default logo shown on the monthly report
pub const DEFAULT_LOGO_URL: &str = "/images/mwmlogo.png";

/// Page title of the print document
pub const PRINT_TITLE: &str = "Print Sales Report";

/// Fixed inline styles of the print document
const PRINT_STYLES: &str = r#"
    body {
      font-family: Arial, sans-serif;
      margin: 0;
      padding: 20px;
      font-size: 11px;
      color: #000;
    }
    table {
      width: 100%;
      border-collapse: collapse;
      table-layout: fixed;
    }
    th, td {
      border: 1px solid #000;
      padding: 4px;
      text-align: right;
      vertical-align: middle;
    }
    th {
      text-align: center;
      font-size: 8px;
      font-weight: 600;
    }
    td {
      font-size: 8px;
    }
    .text-left {
      text-align: left !important;
    }
    .report-header {
      text-align: center;
      margin-top: 60px;
      margin-bottom: 10px;
    }
    .signature {
      margin-top: 60px;
      display: flex;
      justify-content: space-between;
      padding: 0 60px;
    }
    img {
      max-width: 100px;
      height: auto;
    }
"#;

/// Opens the print dialog once loaded, then closes the window
const PRINT_SCRIPT: &str = r#"
    window.onload = function() {
      window.print();
      window.close();
    };
"#;

const NET_OF_NOTE: &str = "(NET OF DISC. SERVICE CHARGE AND LOCAL TAX)";

/// External resources referenced by rendered reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintAssets {
    pub css_url: String,
    pub logo_url: Option<String>,
}

impl Default for PrintAssets {
    fn default() -> Self {
        Self {
            css_url: DEFAULT_CSS_URL.to_string(),
            logo_url: Some(DEFAULT_LOGO_URL.to_string()),
        }
    }
}

/// Everything one report render needs
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub kind: ReportKind,
    pub header: ReportHeader,
    /// Selected date; printed on daily/hourly reports
    pub date: Option<NaiveDateTime>,
    pub records: Vec<DailySalesRecord>,
}

impl ReportContext {
    pub fn new(kind: ReportKind, header: ReportHeader, records: Vec<DailySalesRecord>) -> Self {
        Self {
            kind,
            header,
            date: None,
            records,
        }
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = Some(date);
        self
    }
}

/// Sales report renderer
///
/// Stateless apart from the asset URLs; totals and tax figures are
/// recomputed from the context records on every call.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    assets: PrintAssets,
}

impl ReportRenderer {
    pub fn new(assets: PrintAssets) -> Self {
        Self { assets }
    }

    pub fn assets(&self) -> &PrintAssets {
        &self.assets
    }

    /// Render the report body (header, table, summary, signatories)
    pub fn render_markup(&self, ctx: &ReportContext) -> String {
        let totals = aggregate(&ctx.records);
        let table = ReportTable::build(ctx.kind, &ctx.records, &totals);

        let mut b = HtmlBuilder::new();
        b.open("div", "bg-white text-black p-6 w-full");
        b.open("div", "p-4");

        match ctx.kind {
            ReportKind::Monthly => {
                self.render_monthly_header(&mut b, &ctx.header);
                self.render_monthly_table(&mut b, &table);
                let summary = MonthlySummary::from_figures(&derive_tax_figures(&totals));
                self.render_summary(&mut b, &summary);
            }
            ReportKind::Daily | ReportKind::Hourly => {
                self.render_flat_header(&mut b, ctx);
                self.render_flat_table(&mut b, ctx.kind, &table);
            }
        }

        self.render_signatories(&mut b, &ctx.header.tenant_name);
        b.close("div");
        b.close("div");

        let markup = b.build();
        debug!(kind = %ctx.kind, bytes = markup.len(), "Rendered report markup");
        markup
    }

    /// Render the standalone print document
    #[instrument(skip(self, ctx), fields(kind = %ctx.kind, records = ctx.records.len()))]
    pub fn render_print_document(&self, ctx: &ReportContext) -> String {
        let markup = self.render_markup(ctx);

        let mut b = HtmlBuilder::new();
        b.raw("<html>").newline();
        b.raw("<head>").newline();
        b.element("title", "", PRINT_TITLE).newline();
        b.open_with("script", "", &[("src", self.assets.css_url.as_str())])
            .close("script")
            .newline();
        b.raw("<style>").raw(PRINT_STYLES).raw("</style>").newline();
        b.raw("</head>").newline();
        b.raw("<body>").newline();
        b.raw(&markup).newline();
        b.raw("<script>").raw(PRINT_SCRIPT).raw("</script>").newline();
        b.raw("</body>").newline();
        b.raw("</html>").newline();
        b.build()
    }

    // === Monthly ===

    fn render_monthly_header(&self, b: &mut HtmlBuilder, header: &ReportHeader) {
        b.open("div", "relative mb-6");
        if let Some(logo) = &self.assets.logo_url {
            b.open("div", "absolute top-0 right-0 w-28 h-16 print:static print:float-right");
            b.void(
                "img",
                &[
                    ("src", logo.as_str()),
                    ("alt", "Company Logo"),
                    ("class", "object-contain w-full h-full"),
                ],
            );
            b.close("div");
        }
        b.open("div", "text-center pt-16 report-header");
        b.element("h2", "text-sm font-bold", &header.title());
        b.element("h4", "text-xs font-semibold mt-1", "CERTIFIED MONTHLY SALES REPORT");
        b.element("p", "text-sm italic", &header.period_line());
        b.close("div");
        b.close("div");
    }

    fn render_monthly_table(&self, b: &mut HtmlBuilder, table: &ReportTable) {
        b.open("table", "w-full border-collapse text-xs mb-4");
        b.open("thead", "");

        b.open("tr", "");
        th(b, "Date", &[("rowspan", "3")]);
        th(b, "Net Sales", &[("colspan", "2")]);
        th(b, "", &[]);
        th(b, "Sales Discount", &[("colspan", "6")]);
        b.open_with("th", "border", &[("rowspan", "3")])
            .text("Other Tax")
            .raw("<br>")
            .element("span", "font-normal", "(Local Tax)")
            .close("th");
        th(b, "Service Charge", &[("colspan", "2"), ("rowspan", "2")]);
        th(b, "Gross Sales", &[("rowspan", "3")]);
        b.close("tr");

        b.open("tr", "");
        th(b, "Vatable Trans.", &[]);
        th(b, "SC Vat Exempt Trans.", &[]);
        th(b, "", &[]);
        th(b, "Promo", &[("colspan", "2")]);
        th(b, "Employee's Discount", &[("rowspan", "2")]);
        th(b, "Senior Citizen's", &[("rowspan", "2")]);
        th(b, "PWD Disc.", &[("rowspan", "2")]);
        b.open_with("th", "border", &[("rowspan", "2")])
            .text("VIP Cards")
            .raw("<br>")
            .text("if any")
            .close("th");
        b.close("tr");

        b.open("tr", "");
        th(b, NET_OF_NOTE, &[]);
        th(b, NET_OF_NOTE, &[]);
        th(b, "", &[]);
        th(b, "With Approval", &[]);
        th(b, "Without Approval", &[]);
        th(b, "Distributed to Employees", &[]);
        th(b, "Retained by Management", &[]);
        b.close("tr");

        b.close("thead");
        b.open("tbody", "");
        let colspan = table.column_count().to_string();
        for (i, row) in table.rows.iter().enumerate() {
            if table.is_empty() && i == 0 {
                b.open("tr", "");
                b.open_with("td", "border text-center", &[("colspan", colspan.as_str())])
                    .text("No data available")
                    .close("td");
                b.close("tr");
            }
            render_row(b, row, "border p-1");
        }
        b.close("tbody");
        b.close("table");
    }

    fn render_summary(&self, b: &mut HtmlBuilder, summary: &MonthlySummary) {
        b.open("div", "mt-6 pt-4");
        b.open("div", "space-y-1");
        for line in &summary.lines {
            let class = match line.kind {
                SummaryLineKind::Placeholder => "grid grid-cols-12 gap-2",
                SummaryLineKind::Figure => "grid grid-cols-12 gap-2 font-semibold",
                SummaryLineKind::Subtotal => {
                    "grid grid-cols-12 gap-2 font-semibold border-t border-black pt-1"
                }
                SummaryLineKind::Total => {
                    "grid grid-cols-12 gap-2 font-semibold border-t border-black pt-1 border-b border-double pb-1"
                }
            };
            b.open("div", class);
            b.element("div", "col-span-2 font-medium", line.section.unwrap_or(""));
            b.element("div", "col-span-8", line.label);
            b.element("div", "col-span-2 text-right", &line.value);
            b.close("div");
        }
        b.close("div");
        b.close("div");
    }

    // === Daily / hourly ===

    fn render_flat_header(&self, b: &mut HtmlBuilder, ctx: &ReportContext) {
        let title = match ctx.kind {
            ReportKind::Hourly => "Hourly Sales Report",
            _ => "Daily Sales Report",
        };

        b.open("div", "text-center mb-6 report-header");
        b.element("h2", "text-xl font-bold", &ctx.header.trade_name);
        b.element("h3", "text-lg", &format!("{} Branch", ctx.header.branch));
        b.element("h4", "text-md font-semibold mt-2", title);
        if let Some(date) = ctx.date {
            b.element("p", "text-sm", &date.format("%B %-d, %Y").to_string());
            if ctx.kind == ReportKind::Hourly {
                b.element("p", "text-sm", &date.format("%-I:%M %p").to_string());
            }
        }
        b.close("div");
    }

    fn render_flat_table(&self, b: &mut HtmlBuilder, kind: ReportKind, table: &ReportTable) {
        let caption = match kind {
            ReportKind::Hourly => "Hourly Transactions",
            _ => "Daily Transactions",
        };

        b.open("div", "mb-6");
        b.element("h5", "font-semibold mb-2", caption);
        b.open("table", "w-full border-collapse");
        b.open("thead", "");
        b.open("tr", "bg-gray-100");
        b.element("th", "border p-2 text-left", table.columns[0]);
        b.element("th", "border p-2 text-right", table.columns[1]);
        b.close("tr");
        b.close("thead");
        b.open("tbody", "");
        for row in &table.rows {
            render_row(b, row, "border p-2");
        }
        b.close("tbody");
        b.close("table");
        b.close("div");
    }

    // === Shared ===

    fn render_signatories(&self, b: &mut HtmlBuilder, tenant_name: &str) {
        b.open("div", "mt-16 grid grid-cols-2 gap-8 signatory-section signature");
        for (heading, position) in [
            ("Prepared by:", "SUPERVISOR/OWNER"),
            ("Certified Correct by:", "AUTHORIZED REPRESENTATIVE"),
        ] {
            b.open("div", "text-center");
            b.open("div", "border-t border-black pt-2");
            b.element("p", "font-medium", heading);
            b.element("p", "mt-10 font-semibold", tenant_name);
            b.element("p", "text-sm text-gray-600", "Signature over Printed Name");
            b.element("p", "mt-4 font-semibold", position);
            b.element("p", "text-sm text-gray-600", "(Position)");
            b.close("div");
            b.close("div");
        }
        b.close("div");
    }
}

fn th(b: &mut HtmlBuilder, text: &str, attrs: &[(&str, &str)]) {
    b.open_with("th", "border", attrs).text(text).close("th");
}

fn render_row(b: &mut HtmlBuilder, row: &TableRow, base_class: &str) {
    b.open("tr", if row.emphasized { "font-bold bg-gray-100" } else { "" });
    for cell in &row.cells {
        let mut class = format!("{} {}", base_class, cell.align.class());
        if cell.bold {
            class.push_str(" font-semibold");
        }
        b.element("td", &class, &cell.text);
    }
    b.close("tr");
}
