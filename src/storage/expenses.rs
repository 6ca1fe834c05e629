//! Ledger persistence
//!
//! The ledger is stored as a single JSON array of records in insertion
//! order. Loading never fails: a missing or unusable file yields an empty
//! ledger so bad stored data can never keep the app from starting.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

use super::file_io::{read_json_lenient, write_json_atomic, JsonRead};

/// Where the ledger is loaded from and saved to
pub trait LedgerStore: Send + Sync {
    /// Load the stored records; an empty list when nothing usable is stored
    fn load_ledger(&self) -> Vec<ExpenseRecord>;

    /// Replace the stored records
    fn save_ledger(&self, records: &[ExpenseRecord]) -> ExpenseResult<()>;
}

/// Drop records that could not have been produced by the entry form, and
/// repeated identifiers (first occurrence wins)
fn sanitize(records: Vec<ExpenseRecord>) -> Vec<ExpenseRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| {
            if let Err(e) = record.validate() {
                warn!(id = %record.id, error = %e, "dropping malformed stored expense");
                return false;
            }
            if !seen.insert(record.id) {
                warn!(id = %record.id, "dropping duplicate stored expense");
                return false;
            }
            true
        })
        .collect()
}

/// JSON file backed ledger store (`data/expenses.json`)
pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl LedgerStore for JsonLedgerStore {
    fn load_ledger(&self) -> Vec<ExpenseRecord> {
        match read_json_lenient::<Vec<ExpenseRecord>, _>(&self.path) {
            JsonRead::Loaded(records) => {
                debug!(count = records.len(), path = %self.path.display(), "loaded ledger");
                sanitize(records)
            }
            JsonRead::Absent => Vec::new(),
            JsonRead::Corrupt(reason) => {
                warn!(%reason, "stored ledger is unreadable; starting with an empty ledger");
                Vec::new()
            }
        }
    }

    fn save_ledger(&self, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, records)
    }
}

/// In-memory ledger store
///
/// Useful for embedding the ledger without a filesystem, and for checking
/// how often the ledger persists.
#[derive(Default)]
pub struct MemoryLedgerStore {
    records: Mutex<Vec<ExpenseRecord>>,
    saves: AtomicUsize,
    fail_saves: bool,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with previously stored records
    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// A store whose every save fails
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Number of save attempts so far, including failed ones
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Records from the most recent successful save
    pub fn stored(&self) -> Vec<ExpenseRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load_ledger(&self) -> Vec<ExpenseRecord> {
        sanitize(self.stored())
    }

    fn save_ledger(&self, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_saves {
            return Err(ExpenseError::Storage("save rejected by store".into()));
        }
        let mut stored = self
            .records
            .lock()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire lock: {}", e)))?;
        *stored = records.to_vec();
        Ok(())
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<S> {
    fn load_ledger(&self) -> Vec<ExpenseRecord> {
        (**self).load_ledger()
    }

    fn save_ledger(&self, records: &[ExpenseRecord]) -> ExpenseResult<()> {
        (**self).save_ledger(records)
    }
}
