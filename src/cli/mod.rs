//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod reminders;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, parse_reminder_time, ExpenseCommands};
pub use reminders::{handle_reminder_command, ReminderCommands};
