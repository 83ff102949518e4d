//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Hours as "HHh MMm"
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// Decimal hours with two digits, as printed in totals tables
pub fn hours_decimal(hours: f64) -> String {
    format!("{:.2}", hours)
}
