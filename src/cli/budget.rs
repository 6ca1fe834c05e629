//! Budget CLI commands
//!
//! Configures the monthly budget and per-entry ceiling, and shows the
//! overview.

use clap::Subcommand;

use crate::clock::Clock;
use crate::config::Settings;
use crate::display::{format_amount, format_overview};
use crate::error::ExpenseResult;
use crate::models::CategoryGrouping;
use crate::services::{parse_amount, BudgetAggregator};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly budget (negative amounts are stored as 0)
    Set {
        #[arg(allow_hyphen_values = true)]
        amount: f64,
    },

    /// Set or clear the largest amount accepted for one expense
    Limit {
        #[arg(required_unless_present = "clear", conflicts_with = "clear")]
        amount: Option<String>,
        /// Remove the limit
        #[arg(long)]
        clear: bool,
    },

    /// Show spending against the budget for this month
    Overview {
        /// Group the breakdown by category or by label
        #[arg(short, long)]
        group_by: Option<CategoryGrouping>,
    },

    /// Choose how the breakdown groups expenses by default
    Grouping { grouping: CategoryGrouping },
}

/// Handle a budget command; no subcommand shows the overview
pub fn handle_budget_command(
    storage: &Storage,
    settings: &mut Settings,
    clock: &dyn Clock,
    cmd: Option<BudgetCommands>,
) -> ExpenseResult<()> {
    let currency = settings.currency_code.clone();

    match cmd.unwrap_or(BudgetCommands::Overview { group_by: None }) {
        BudgetCommands::Set { amount } => {
            let stored = settings.set_total_budget(amount)?;
            settings.save(storage.paths())?;
            println!("Monthly budget set to {}", format_amount(stored, &currency));
        }

        BudgetCommands::Limit { amount, clear } => {
            let limit = match amount {
                Some(amount) if !clear => Some(parse_amount(&amount)?),
                _ => None,
            };
            settings.set_entry_limit(limit)?;
            settings.save(storage.paths())?;

            match limit {
                Some(limit) => println!(
                    "Per-entry limit set to {}",
                    format_amount(limit, &currency)
                ),
                None => println!("Per-entry limit cleared."),
            }
        }

        BudgetCommands::Overview { group_by } => {
            let aggregator = BudgetAggregator::new(
                settings.total_budget,
                group_by.unwrap_or(settings.grouping),
            );
            let overview = aggregator.overview(&storage.ledger.items(), clock.today());
            print!("{}", format_overview(&overview, &currency));
        }

        BudgetCommands::Grouping { grouping } => {
            settings.grouping = grouping;
            settings.save(storage.paths())?;
            println!("Breakdown now grouped by {}.", grouping);
        }
    }

    Ok(())
}
