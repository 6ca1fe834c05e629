//! Service layer
//!
//! Business logic on top of the storage layer: entry validation, budget
//! aggregation, reminder policy, and the expense workflow that ties them
//! together.

pub mod budget;
pub mod expense;
pub mod reminder;
pub mod validation;

pub use budget::BudgetAggregator;
pub use expense::ExpenseService;
pub use reminder::{schedule_reminder_for, Notifier, PermissionStatus, ReminderOutcome, ReminderRequest};
pub use validation::{can_submit, check_entry_limit, parse_amount, ExpenseDraft};
