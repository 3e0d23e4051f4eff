//! Display rounding and currency formatting.
//!
//! The calculators return full precision amounts; everything that rounds
//! for presentation goes through these helpers.

use serde::Serialize;

/// Half-width of the budget range quoted to bidders.
pub const BID_RANGE_FRACTION: f64 = 0.15;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    pub low: f64,
    pub high: f64,
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round_to_dollar(value: f64) -> f64 {
    value.round()
}

/// Rounds to the nearest multiple of `step` (e.g. 1_000 for display in
/// thousands). A non-positive step leaves the value unchanged.
pub fn round_to_nearest(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// `1234567.8` => `"$1,234,568"`.
pub fn format_currency(value: f64) -> String {
    let rounded = round_to_dollar(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_thousands(&digits))
}

/// Short form used in chart labels: `"$1.2M"`, `"$850K"`, `"$512"`.
pub fn format_compact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{sign}${:.1}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{sign}${:.0}K", magnitude / 1_000.0)
    } else {
        format!("{sign}${:.0}", magnitude)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn budget_range(total: f64) -> BudgetRange {
    BudgetRange {
        low: total * (1.0 - BID_RANGE_FRACTION),
        high: total * (1.0 + BID_RANGE_FRACTION),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_currency_groups_thousands_and_rounds() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1_234_567.8), "$1,234,568");
        assert_eq!(format_currency(-2_500.0), "-$2,500");
    }

    #[test]
    fn format_compact_picks_a_unit() {
        assert_eq!(format_compact(2_949_980.0), "$2.9M");
        assert_eq!(format_compact(850_400.0), "$850K");
        assert_eq!(format_compact(512.2), "$512");
        assert_eq!(format_compact(-1_500_000.0), "-$1.5M");
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round_to_cents(6_843_601.286808), 6_843_601.29);
        assert_eq!(round_to_dollar(361.6), 362.0);
        assert_eq!(round_to_nearest(1_448_420.4, 1_000.0), 1_448_000.0);
        assert_eq!(round_to_nearest(12.5, 0.0), 12.5);
    }

    #[test]
    fn budget_range_spans_fifteen_percent_either_side() {
        let range = budget_range(100_000.0);
        assert!((range.low - 85_000.0).abs() < 1e-9);
        assert!((range.high - 115_000.0).abs() < 1e-9);
    }

    #[test]
    fn format_percent_uses_one_decimal() {
        assert_eq!(format_percent(-12.345), "-12.3%");
    }
}
