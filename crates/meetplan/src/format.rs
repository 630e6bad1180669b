//! Display formatting for report values
//!
//! The core hands over raw numbers; everything user-facing happens here.

use meetplan_core::kpi::KpiUnit;

/// Format a monetary value with thousands separators, e.g. `1,234.56 €`
pub fn format_currency(value: f64) -> String {
    let amount = thousands(value);
    format!("{amount} €")
}

/// Monetary delta with an explicit sign, e.g. `+205.00 €`
pub fn format_currency_delta(value: f64) -> String {
    if value >= 0.0 {
        format!("+{} €", thousands(value))
    } else {
        format!("{} €", thousands(value))
    }
}

/// Format a share as a percentage, e.g. `27.48%`
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a dimensionless ratio, e.g. `2.34`
pub fn format_ratio(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{value:.2}")
    }
}

/// Format a participant count; an infinite value renders as `unreachable`
pub fn format_count(value: f64) -> String {
    if value.is_infinite() {
        "unreachable".to_string()
    } else {
        format!("{value:.0}")
    }
}

/// Render a value according to its KPI unit hint
pub fn format_kpi(unit: KpiUnit, value: f64) -> String {
    match unit {
        KpiUnit::Money => format_currency(value),
        KpiUnit::Percent => format_percentage(value),
        KpiUnit::Ratio => format_ratio(value),
        KpiUnit::Count => format_count(value),
    }
}

/// Thousands-separated fixed-point rendering of the absolute amount, signed
fn thousands(value: f64) -> String {
    let abs_value = value.abs();
    let mut whole = abs_value as i64;
    let mut cents = ((abs_value - whole as f64) * 100.0).round() as i64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }

    let whole_str = whole.to_string();
    let mut reversed = String::new();
    for (i, c) in whole_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let formatted: String = reversed.chars().rev().collect();

    if value < 0.0 {
        format!("-{formatted}.{cents:02}")
    } else {
        format!("{formatted}.{cents:02}")
    }
}
