//! Storage layer
//!
//! JSON file storage with atomic writes and automatic directory creation.
//! The ledger and the reminder outbox each own one file under `data/`.

pub mod expenses;
pub mod file_io;
pub mod ledger;
pub mod reminders;

pub use expenses::{JsonLedgerStore, LedgerStore, MemoryLedgerStore};
pub use file_io::{read_json_lenient, read_json_or_default, write_json_atomic, JsonRead};
pub use ledger::Ledger;
pub use reminders::OutboxNotifier;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;

/// Everything the app keeps on disk, opened together
pub struct Storage {
    paths: ExpensePaths,
    pub ledger: Ledger,
    pub reminders: OutboxNotifier,
}

impl Storage {
    /// Open storage under `paths`, loading the ledger
    pub fn open(paths: ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: Ledger::load(JsonLedgerStore::new(paths.expenses_file())),
            reminders: OutboxNotifier::new(paths.reminders_file(), settings.reminder_permission),
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }
}
