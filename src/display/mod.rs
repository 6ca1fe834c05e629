//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.

pub mod budget;
pub mod category;
pub mod expense;
pub mod reminder;

pub use budget::{format_breakdown, format_overview, progress_bar};
pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_list};
pub use reminder::format_reminder_list;

/// Format an amount with a currency code, thousands separators and cents
///
/// `format_amount(1234.5, "PHP")` gives `"PHP 1,234.50"`.
pub fn format_amount(amount: f64, currency_code: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{} {}.{:02}", sign, currency_code, grouped, cents % 100)
}

/// Truncate to `max_len` characters, marking the cut with "..."
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
