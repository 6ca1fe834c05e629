//! Budget overview formatting

use super::{format_amount, truncate};
use crate::models::{BudgetOverview, CategorySummary};

const BAR_WIDTH: usize = 20;

/// Render a progress ratio as a fixed-width bar, e.g. `[#####---------------]`
pub fn progress_bar(progress: f64, width: usize) -> String {
    let ratio = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format the monthly overview followed by the category breakdown
pub fn format_overview(overview: &BudgetOverview, currency_code: &str) -> String {
    let mut output = String::new();

    output.push_str("Monthly Budget\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');

    if overview.total_budget > 0.0 {
        output.push_str(&format!(
            "Budget:     {}\n",
            format_amount(overview.total_budget, currency_code)
        ));
    } else {
        output.push_str("Budget:     (not set)\n");
    }
    output.push_str(&format!(
        "Spent:      {}\n",
        format_amount(overview.total_spent, currency_code)
    ));

    if overview.total_budget > 0.0 {
        output.push_str(&format!(
            "Remaining:  {}\n",
            format_amount(overview.remaining(), currency_code)
        ));
        output.push_str(&format!(
            "Progress:   {} {:>3.0}%\n",
            progress_bar(overview.overall_progress(), BAR_WIDTH),
            overview.overall_progress() * 100.0
        ));
    }
    output.push_str(&format!("Days left:  {}\n", overview.days_left));

    if overview.is_over_budget() {
        output.push_str("\n⚠️  Over budget\n");
    }

    output.push('\n');
    output.push_str(&format_breakdown(&overview.categories, currency_code));

    if overview.total_budget <= 0.0 && !overview.is_empty() {
        output.push_str("\nRun 'expense budget set <AMOUNT>' to set a monthly budget.\n");
    }

    output
}

/// Format the per-category breakdown
pub fn format_breakdown(categories: &[CategorySummary], currency_code: &str) -> String {
    if categories.is_empty() {
        return "No Data\nAdd some expenses to see your breakdown here.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:16} {:>16} {:>16}  {}\n",
        "Category", "Spent", "Limit", "Progress"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for summary in categories {
        let status = if summary.is_over() {
            format!(
                "  over by {}",
                format_amount(summary.over_by(), currency_code)
            )
        } else {
            String::new()
        };

        output.push_str(&format!(
            "{:16} {:>16} {:>16}  {}{}\n",
            truncate(&summary.label, 16),
            format_amount(summary.spent, currency_code),
            format_amount(summary.limit, currency_code),
            progress_bar(summary.progress(), BAR_WIDTH),
            status
        ));
    }

    output
}
