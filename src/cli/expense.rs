//! Expense CLI commands
//!
//! Recording, listing and removing expenses.

use std::collections::BTreeSet;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use clap::builder::PossibleValuesParser;
use clap::Subcommand;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_amount, format_category_list, format_expense_details, format_expense_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseCategory, ExpenseRecord, ICON_PALETTE};
use crate::services::{ExpenseDraft, ExpenseService, ReminderOutcome};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount spent (e.g. "250" or "1299.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (bills, electricity, internet, groceries, transport,
        /// entertainment, dining, subscriptions, other)
        #[arg(short, long, default_value = "bills")]
        category: String,
        /// Custom label, used with the "other" category
        #[arg(short, long)]
        label: Option<String>,
        /// Icon, overriding the category's default
        #[arg(short, long, value_parser = PossibleValuesParser::new(ICON_PALETTE))]
        icon: Option<String>,
        /// Reminder time (RFC 3339, or local "YYYY-MM-DD HH:MM")
        #[arg(short, long, value_parser = parse_reminder_time)]
        remind: Option<DateTime<Utc>>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show the total of all expenses
    Total,

    /// Remove expenses by list position or ID
    #[command(alias = "rm")]
    Remove {
        /// 1-based positions from `expense list`, or expense IDs
        #[arg(required = true)]
        targets: Vec<String>,
    },

    /// Delete every expense
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// List the available categories
    Categories,
}

/// Parse a reminder time given on the command line
pub fn parse_reminder_time(input: &str) -> Result<DateTime<Utc>, String> {
    let input = input.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(at.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M").map_err(|_| {
        format!(
            "Invalid time '{}': use RFC 3339 or \"YYYY-MM-DD HH:MM\"",
            input
        )
    })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.with_timezone(&Utc))
        .ok_or_else(|| format!("'{}' does not exist in the local timezone", input))
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(&storage.ledger, &storage.reminders, settings, clock);
    let currency = settings.currency_code.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            label,
            icon,
            remind,
        } => {
            let category: ExpenseCategory = category
                .parse()
                .map_err(|_| ExpenseError::category_not_found(&category))?;

            let mut draft = ExpenseDraft::new(name, amount, category);
            if let Some(label) = label {
                draft = draft.custom_label(label);
            }
            if let Some(icon) = icon {
                draft = draft.icon(icon);
            }
            if let Some(at) = remind {
                draft = draft.reminder(at);
            }

            let (record, outcome) = service.add(&draft)?;
            println!("Expense added.");
            print!("{}", format_expense_details(&record, currency));

            match outcome {
                ReminderOutcome::Scheduled => println!("Reminder scheduled."),
                ReminderOutcome::InPast => {
                    println!("Reminder time has already passed; no reminder scheduled.")
                }
                ReminderOutcome::PermissionDenied => println!(
                    "Reminders are disabled; run 'expense reminders enable' to allow them."
                ),
                ReminderOutcome::PermissionPending => println!(
                    "Reminders are not enabled yet; run 'expense reminders enable' to allow them."
                ),
                ReminderOutcome::NoReminder => {}
            }
        }

        ExpenseCommands::List => {
            print!(
                "{}",
                format_expense_list(&storage.ledger.items(), currency, clock.now())
            );
        }

        ExpenseCommands::Total => {
            println!("{}", format_amount(storage.ledger.total(), currency));
        }

        ExpenseCommands::Remove { targets } => {
            let items = storage.ledger.items();
            let positions = resolve_targets(&items, &targets)?;

            let removed = service.remove_positions(&positions.into_iter().collect::<Vec<_>>());
            for record in &removed {
                println!(
                    "Removed {} ({})",
                    record.name,
                    format_amount(record.amount, currency)
                );
            }
            println!(
                "Total: {}",
                format_amount(storage.ledger.total(), currency)
            );
        }

        ExpenseCommands::Reset { yes } => {
            let count = storage.ledger.len();
            if !yes {
                println!(
                    "This deletes all {} expenses. Re-run with --yes to confirm.",
                    count
                );
                return Ok(());
            }

            let removed = service.reset();
            println!("Deleted {} expenses.", removed.len());
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list());
        }
    }

    Ok(())
}

/// Turn user targets into 0-based positions in `items`
///
/// Every target must resolve, otherwise nothing is removed.
fn resolve_targets(items: &[ExpenseRecord], targets: &[String]) -> ExpenseResult<BTreeSet<usize>> {
    targets
        .iter()
        .map(|target| {
            let target = target.trim();
            let position = match target.parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => Some(n - 1),
                Ok(_) => None,
                Err(_) => items.iter().position(|r| r.id.matches(target)),
            };
            position.ok_or_else(|| ExpenseError::expense_not_found(target))
        })
        .collect()
}
