//! Expense service
//!
//! Coordinates the entry flow: validate the draft, enforce the per-entry
//! ceiling, append to the ledger, then hand any reminder to the notifier.
//! Removals cancel the reminders of whatever they removed.

use tracing::{info, warn};

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetOverview, ExpenseId, ExpenseRecord};
use crate::storage::Ledger;

use super::budget::BudgetAggregator;
use super::reminder::{schedule_reminder_for, Notifier, ReminderOutcome};
use super::validation::{check_entry_limit, ExpenseDraft};

/// Service for recording and removing expenses
pub struct ExpenseService<'a> {
    ledger: &'a Ledger,
    notifier: &'a dyn Notifier,
    settings: &'a Settings,
    clock: &'a dyn Clock,
}

impl<'a> ExpenseService<'a> {
    pub fn new(
        ledger: &'a Ledger,
        notifier: &'a dyn Notifier,
        settings: &'a Settings,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            ledger,
            notifier,
            settings,
            clock,
        }
    }

    /// Record a new expense from form input
    ///
    /// The record is stored even if its reminder could not be scheduled; the
    /// outcome says what happened to the reminder.
    pub fn add(&self, draft: &ExpenseDraft) -> ExpenseResult<(ExpenseRecord, ReminderOutcome)> {
        let record = draft.build()?;
        check_entry_limit(record.amount, self.settings.entry_limit)?;

        self.ledger.add(record.clone())?;
        info!(id = %record.id, category = %record.category, "expense recorded");

        let outcome = match schedule_reminder_for(self.notifier, &record, self.clock.now()) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(id = %record.id, error = %e, "could not schedule reminder");
                return Err(ExpenseError::Notification(format!(
                    "Expense {} was saved but its reminder was not scheduled: {}",
                    record.id, e
                )));
            }
        };

        Ok((record, outcome))
    }

    /// Remove an expense by ID
    pub fn remove(&self, id: ExpenseId) -> ExpenseResult<ExpenseRecord> {
        let removed = self
            .ledger
            .remove_by_id(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.cancel_reminders(std::slice::from_ref(&removed));
        Ok(removed)
    }

    /// Remove expenses by list position (0-based, as displayed order)
    pub fn remove_positions(&self, positions: &[usize]) -> Vec<ExpenseRecord> {
        let removed = self.ledger.remove_at(positions.iter().copied());
        self.cancel_reminders(&removed);
        removed
    }

    /// Delete every expense
    pub fn reset(&self) -> Vec<ExpenseRecord> {
        let removed = self.ledger.clear();
        self.cancel_reminders(&removed);
        info!(count = removed.len(), "ledger reset");
        removed
    }

    /// Budget overview of the current ledger for today's month
    pub fn overview(&self) -> BudgetOverview {
        BudgetAggregator::new(self.settings.total_budget, self.settings.grouping)
            .overview(&self.ledger.items(), self.clock.today())
    }

    fn cancel_reminders(&self, removed: &[ExpenseRecord]) {
        for record in removed.iter().filter(|r| r.reminder_at.is_some()) {
            if let Err(e) = self.notifier.cancel_reminder(record.id) {
                warn!(id = %record.id, error = %e, "could not cancel reminder");
            }
        }
    }
}
