//! Expense display formatting
//!
//! Formats the ledger as a numbered list (positions are what `expense
//! remove` accepts) and single records in detail.

use chrono::{DateTime, Local, Utc};

use super::{format_amount, truncate};
use crate::models::ExpenseRecord;

/// Format the ledger as a numbered list with a total line
pub fn format_expense_list(
    records: &[ExpenseRecord],
    currency_code: &str,
    now: DateTime<Utc>,
) -> String {
    if records.is_empty() {
        return "No expenses recorded.\n\nRun 'expense add <NAME> <AMOUNT>' to add one.\n"
            .to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:12} {:24} {:16} {:>16}\n",
        "#", "ID", "Name", "Type", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for (i, record) in records.iter().enumerate() {
        let bell = if record.has_pending_reminder(now) { " ⏰" } else { "" };
        output.push_str(&format!(
            "{:>3}  {:12} {:24} {:16} {:>16}{}\n",
            i + 1,
            record.id.short(),
            truncate(&record.name, 24),
            truncate(record.display_type(), 16),
            format_amount(record.amount, currency_code),
            bell
        ));
    }

    let total: f64 = records.iter().map(|r| r.amount).sum();
    output.push_str(&"-".repeat(76));
    output.push('\n');
    output.push_str(&format!(
        "{:>3}  {:54} {:>16}\n",
        "",
        format!("Total ({} expenses)", records.len()),
        format_amount(total, currency_code)
    ));

    output
}

/// Format one expense in detail
pub fn format_expense_details(record: &ExpenseRecord, currency_code: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:  {}\n", record.id));
    output.push_str(&format!("Name:     {}\n", record.name));
    output.push_str(&format!("Type:     {}\n", record.display_type()));
    output.push_str(&format!(
        "Amount:   {}\n",
        format_amount(record.amount, currency_code)
    ));
    output.push_str(&format!("Icon:     {}\n", record.icon));

    if let Some(at) = record.reminder_at {
        output.push_str(&format!(
            "Reminder: {}\n",
            at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }

    output
}
