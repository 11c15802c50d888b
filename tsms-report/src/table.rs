//! Report table shaping
//!
//! Turns records and totals into pre-formatted rows for the monthly grid or
//! the flat daily/hourly table, and builds the monthly VAT summary lines.
//! Every amount cell uses the plain currency policy.

use rust_decimal::Decimal;
use shared::models::{DailySalesRecord, DerivedTaxFigures, ReportKind, ReportTotals};

use crate::money::{PESO_SIGN, format_plain};

/// Leaf column headers of the monthly grid (the fourth column is a blank spacer)
pub const MONTHLY_COLUMNS: [&str; 14] = [
    "Date",
    "Vatable Trans.",
    "SC Vat Exempt Trans.",
    "",
    "With Approval",
    "Without Approval",
    "Employee's Discount",
    "Senior Citizen's",
    "PWD Disc.",
    "VIP Cards if any",
    "Other Tax (Local Tax)",
    "Distributed to Employees",
    "Retained by Management",
    "Gross Sales",
];

/// Column headers of the daily/hourly table
pub const FLAT_COLUMNS: [&str; 2] = ["Transaction Type", "Amount (₱)"];

/// Transaction types of the daily/hourly table, in amount order
const FLAT_LABELS: [&str; 12] = [
    "Vatable Transactions",
    "SC/VAT Exempt Transactions",
    "Sales Discount (With Approval)",
    "Sales Discount (Without Approval)",
    "Employee Discount",
    "Senior Citizen Discount",
    "PWD Discount",
    "VIP Cards",
    "Local Tax",
    "Service Charge (Distributed)",
    "Service Charge (Retained)",
    "Gross Sales",
];

/// The twelve amount columns shared by both layouts
fn amounts(t: &ReportTotals) -> [Decimal; 12] {
    [
        t.vatable_transactions,
        t.sc_vat_exempt_transactions,
        t.sales_discount.with_approval,
        t.sales_discount.without_approval,
        t.employee_discount,
        t.senior_citizen_discount,
        t.pwd_discount,
        t.vip_card_discount,
        t.local_tax,
        t.service_charge.distributed_to_employees,
        t.service_charge.retained_by_management,
        t.gross_sales,
    ]
}

/// Horizontal alignment of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAlign {
    Left,
    Center,
    Right,
}

impl CellAlign {
    /// CSS utility class for the alignment
    pub fn class(&self) -> &'static str {
        match self {
            Self::Left => "text-left",
            Self::Center => "text-center",
            Self::Right => "text-right",
        }
    }
}

/// A formatted table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    pub text: String,
    pub align: CellAlign,
    pub bold: bool,
}

impl TableCell {
    fn label(text: impl Into<String>, align: CellAlign) -> Self {
        Self {
            text: text.into(),
            align,
            bold: false,
        }
    }

    fn amount(value: Decimal) -> Self {
        Self::label(format_plain(value), CellAlign::Right)
    }

    fn blank() -> Self {
        Self::label("", CellAlign::Right)
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// A table row; `emphasized` marks the total line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub emphasized: bool,
}

impl TableRow {
    /// Cell texts, for assertions and plain-text export
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Rows of a report, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
    /// Number of per-record rows (monthly only)
    pub data_rows: usize,
}

impl ReportTable {
    /// Shape `records` and their `totals` for the given report kind
    ///
    /// Monthly: one row per record in input order, then a `Total` row.
    /// Daily/hourly: one `(transaction type, amount)` row per column of
    /// `totals`, ending in `Gross Sales`.
    pub fn build(kind: ReportKind, records: &[DailySalesRecord], totals: &ReportTotals) -> Self {
        match kind {
            ReportKind::Monthly => Self::monthly(records, totals),
            ReportKind::Daily | ReportKind::Hourly => Self::flat(kind, totals),
        }
    }

    fn monthly(records: &[DailySalesRecord], totals: &ReportTotals) -> Self {
        let mut rows: Vec<TableRow> = records
            .iter()
            .map(|record| {
                let day = if record.day == 0 {
                    "-".to_string()
                } else {
                    record.day.to_string()
                };
                monthly_row(
                    TableCell::label(day, CellAlign::Center),
                    &ReportTotals::from(record),
                    false,
                )
            })
            .collect();
        rows.push(monthly_row(
            TableCell::label("Total", CellAlign::Center),
            totals,
            true,
        ));

        Self {
            kind: ReportKind::Monthly,
            columns: MONTHLY_COLUMNS.to_vec(),
            rows,
            data_rows: records.len(),
        }
    }

    fn flat(kind: ReportKind, totals: &ReportTotals) -> Self {
        let rows = FLAT_LABELS
            .iter()
            .zip(amounts(totals))
            .map(|(label, value)| {
                let gross = *label == "Gross Sales";
                let mut row = TableRow {
                    cells: vec![
                        TableCell::label(*label, CellAlign::Left),
                        TableCell::amount(value),
                    ],
                    emphasized: gross,
                };
                if gross {
                    row.cells.iter_mut().for_each(|c| c.bold = true);
                }
                row
            })
            .collect();

        Self {
            kind,
            columns: FLAT_COLUMNS.to_vec(),
            rows,
            data_rows: 0,
        }
    }

    /// Cells per row
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True for a monthly table built from no records
    pub fn is_empty(&self) -> bool {
        self.kind == ReportKind::Monthly && self.data_rows == 0
    }

    /// The emphasized closing row (`Total` or `Gross Sales`)
    pub fn total_row(&self) -> Option<&TableRow> {
        self.rows.last().filter(|row| row.emphasized)
    }
}

fn monthly_row(first: TableCell, t: &ReportTotals, emphasized: bool) -> TableRow {
    let values = amounts(t);
    let mut cells = Vec::with_capacity(MONTHLY_COLUMNS.len());
    cells.push(first);
    cells.extend(values[..2].iter().copied().map(TableCell::amount));
    cells.push(TableCell::blank());
    cells.extend(values[2..11].iter().copied().map(TableCell::amount));
    cells.push(TableCell::amount(values[11]).bold());
    TableRow { cells, emphasized }
}

/// How a summary line is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLineKind {
    /// Adjustment not wired into the figures, shown as `-`
    Placeholder,
    Figure,
    /// Ruled line above
    Subtotal,
    /// Ruled above, double-ruled below
    Total,
}

/// One line of the monthly summary block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// `Less:` / `Add:` on the first line of a section
    pub section: Option<&'static str>,
    pub label: &'static str,
    pub value: String,
    pub kind: SummaryLineKind,
}

impl SummaryLine {
    fn placeholder(section: Option<&'static str>, label: &'static str) -> Self {
        Self {
            section,
            label,
            value: "-".to_string(),
            kind: SummaryLineKind::Placeholder,
        }
    }

    fn figure(label: &'static str, value: Decimal, kind: SummaryLineKind) -> Self {
        Self {
            section: None,
            label,
            value: format!("{}{}", PESO_SIGN, format_plain(value)),
            kind,
        }
    }
}

/// VAT / percentage-rent block printed under the monthly grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub lines: Vec<SummaryLine>,
}

impl MonthlySummary {
    pub fn from_figures(figures: &DerivedTaxFigures) -> Self {
        let less = Some("Less:");
        let add = Some("Add:");
        let lines = vec![
            SummaryLine::placeholder(less, "Promo Discounts With Approval"),
            SummaryLine::placeholder(None, "Approved VIP Cards"),
            SummaryLine::placeholder(None, "SC Vat Exempt Transactions"),
            SummaryLine::placeholder(None, "Senior Citizen/PWD Discounts"),
            SummaryLine::placeholder(None, "Other Tax"),
            SummaryLine::placeholder(None, "Service Charge Distributed to Employees"),
            SummaryLine::placeholder(None, "Service Charge Retained by Management"),
            SummaryLine::figure("Net Sales", figures.net_sales, SummaryLineKind::Figure),
            SummaryLine::figure("Less 12% VAT", figures.vat, SummaryLineKind::Figure),
            SummaryLine::figure("", figures.net_sales_after_vat, SummaryLineKind::Subtotal),
            SummaryLine::placeholder(add, "SC Vat Exempt Transactions"),
            SummaryLine::placeholder(None, "Other Tax"),
            SummaryLine::placeholder(None, "Service Charge Retained by Management"),
            SummaryLine::figure(
                "Net Sales Subject to Percentage rent",
                figures.net_sales_subject_to_percentage_rent,
                SummaryLineKind::Total,
            ),
        ];
        Self { lines }
    }

    /// Value of the line with the given label (first match)
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}
