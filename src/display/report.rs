//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the report and detail views.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::models::Money;

/// Format a date with a strftime pattern, falling back to ISO for bad patterns
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        date.to_string()
    } else {
        date.format(pattern).to_string()
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a variance, marking it with `*` when the budget is not underspent
pub fn format_variance(variance: Money, currency: &str) -> String {
    let marker = if variance.is_negative() { "" } else { "*" };
    format!("{}{}", variance.format_with_symbol(currency), marker)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
