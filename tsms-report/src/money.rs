//! Money utilities using rust_decimal
//!
//! Two formatting policies are kept apart on purpose of the call site:
//! [`CurrencyStyle::Peso`] for on-screen amounts (`₱1,234.50`) and
//! [`CurrencyStyle::Plain`] for printed report tables (`1234.50`).

use rust_decimal::prelude::*;

/// Rounding precision for presented amounts (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Fixed VAT rate (12%)
pub const VAT_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Philippine peso sign
pub const PESO_SIGN: &str = "₱";

/// Round to 2 decimal places, midpoint away from zero
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Currency formatting policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CurrencyStyle {
    /// en-PH display format: symbol and thousands separators
    #[default]
    Peso,
    /// Fixed two decimals, no symbol, no separators
    Plain,
}

/// Format an amount with the given policy
pub fn format_currency(amount: Decimal, style: CurrencyStyle) -> String {
    match style {
        CurrencyStyle::Peso => format_peso(amount),
        CurrencyStyle::Plain => format_plain(amount),
    }
}

/// `1234.5` → `1234.50`
pub fn format_plain(amount: Decimal) -> String {
    format!("{:.2}", round2(amount))
}

/// `1234.5` → `₱1,234.50`, `-1234.5` → `-₱1,234.50`
pub fn format_peso(amount: Decimal) -> String {
    let rounded = round2(amount);
    let digits = format_plain(rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}.{}", sign, PESO_SIGN, group_thousands(int_part), frac_part)
}

/// Insert `,` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
