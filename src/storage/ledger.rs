//! The expense ledger
//!
//! An ordered, insertion-preserving collection of expense records. Every
//! mutation persists the whole ledger through the configured
//! [`LedgerStore`] exactly once, while the write lock is still held, so no
//! reader ever sees a half-applied change and saves never interleave.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};

use crate::models::{ExpenseId, ExpenseRecord, ValidationError};

use super::expenses::LedgerStore;

/// Ordered collection of expense records with write-through persistence
pub struct Ledger {
    records: RwLock<Vec<ExpenseRecord>>,
    store: Box<dyn LedgerStore>,
}

impl Ledger {
    /// Create an empty ledger that persists to `store` (nothing is loaded)
    pub fn new(store: impl LedgerStore + 'static) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            store: Box::new(store),
        }
    }

    /// Create a ledger populated from whatever `store` holds
    pub fn load(store: impl LedgerStore + 'static) -> Self {
        let records = store.load_ledger();
        debug!(count = records.len(), "ledger loaded");
        Self {
            records: RwLock::new(records),
            store: Box::new(store),
        }
    }

    // Each mutation is a single Vec operation, so a panic in another holder
    // cannot leave the records half-updated; recovering the guard is safe.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ExpenseRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ExpenseRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, records: &[ExpenseRecord]) {
        if let Err(e) = self.store.save_ledger(records) {
            warn!(error = %e, "failed to persist ledger; continuing with in-memory state");
        }
    }

    /// Append a record
    ///
    /// Malformed records are rejected and nothing is persisted.
    pub fn add(&self, record: ExpenseRecord) -> Result<(), ValidationError> {
        record.validate()?;

        let mut records = self.write();
        debug!(id = %record.id, amount = record.amount, "adding expense");
        records.push(record);
        self.persist(&records);
        Ok(())
    }

    /// Remove the records at the given positions
    ///
    /// Positions refer to the ledger as it was before the call; positions
    /// past the end are ignored. Returns the removed records in position
    /// order.
    pub fn remove_at<I>(&self, positions: I) -> Vec<ExpenseRecord>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut records = self.write();
        let positions: BTreeSet<usize> = positions
            .into_iter()
            .filter(|&p| p < records.len())
            .collect();

        let mut removed: Vec<ExpenseRecord> = positions
            .iter()
            .rev()
            .map(|&p| records.remove(p))
            .collect();
        removed.reverse();

        debug!(removed = removed.len(), "removed expenses by position");
        self.persist(&records);
        removed
    }

    /// Remove the record with the given ID, if present
    pub fn remove_by_id(&self, id: ExpenseId) -> Option<ExpenseRecord> {
        let mut records = self.write();
        let removed = records
            .iter()
            .position(|r| r.id == id)
            .map(|p| records.remove(p));

        debug!(%id, found = removed.is_some(), "removing expense");
        self.persist(&records);
        removed
    }

    /// Remove every record
    pub fn clear(&self) -> Vec<ExpenseRecord> {
        let mut records = self.write();
        let removed = std::mem::take(&mut *records);
        debug!(removed = removed.len(), "ledger reset");
        self.persist(&records);
        removed
    }

    /// Sum of all amounts; 0 for an empty ledger
    pub fn total(&self) -> f64 {
        self.read().iter().map(|r| r.amount).sum()
    }

    /// Snapshot of the records in insertion order
    pub fn items(&self) -> Vec<ExpenseRecord> {
        self.read().clone()
    }

    pub fn get(&self, id: ExpenseId) -> Option<ExpenseRecord> {
        self.read().iter().find(|r| r.id == id).cloned()
    }

    /// Find a record from a user-typed reference (short or full ID)
    pub fn find(&self, reference: &str) -> Option<ExpenseRecord> {
        self.read().iter().find(|r| r.id.matches(reference)).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use crate::storage::expenses::{JsonLedgerStore, MemoryLedgerStore};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn tracked_ledger() -> (Arc<MemoryLedgerStore>, Ledger) {
        let store = Arc::new(MemoryLedgerStore::new());
        let ledger = Ledger::new(Arc::clone(&store));
        (store, ledger)
    }

    fn groceries(amount: f64) -> ExpenseRecord {
        ExpenseRecord::new("Groceries run", ExpenseCategory::Groceries, amount)
    }

    #[test]
    fn test_empty_ledger() {
        let (store, ledger) = tracked_ledger();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);
        assert!(ledger.items().is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_add_preserves_order_and_persists_once() {
        let (store, ledger) = tracked_ledger();
        let first = groceries(300.0);
        let second = groceries(200.0);

        ledger.add(first.clone()).unwrap();
        assert_eq!(store.save_count(), 1);
        ledger.add(second.clone()).unwrap();
        assert_eq!(store.save_count(), 2);

        assert_eq!(ledger.items(), vec![first.clone(), second.clone()]);
        assert_eq!(store.stored(), vec![first, second]);
        assert_eq!(ledger.total(), 500.0);
    }

    #[test]
    fn test_add_rejects_malformed_record_without_persisting() {
        let (store, ledger) = tracked_ledger();
        let mut bad = groceries(10.0);
        bad.name = "  ".into();

        assert_eq!(ledger.add(bad), Err(ValidationError::EmptyName));
        assert!(matches!(
            ledger.add(groceries(-5.0)),
            Err(ValidationError::InvalidAmount(_))
        ));
        assert!(ledger.is_empty());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_total_is_order_independent() {
        let amounts = [12.5, 300.0, 0.25, 99.0, 1000.0];

        let (_, forward) = tracked_ledger();
        for amount in amounts {
            forward.add(groceries(amount)).unwrap();
        }
        let (_, backward) = tracked_ledger();
        for amount in amounts.iter().rev() {
            backward.add(groceries(*amount)).unwrap();
        }

        assert_eq!(forward.total(), 1411.75);
        assert_eq!(forward.total(), backward.total());
    }

    #[test]
    fn test_remove_at_uses_positions_before_removal() {
        let (store, ledger) = tracked_ledger();
        let records: Vec<_> = (0..5).map(|i| groceries(i as f64)).collect();
        for r in &records {
            ledger.add(r.clone()).unwrap();
        }

        let removed = ledger.remove_at([3, 1, 42]);
        assert_eq!(removed, vec![records[1].clone(), records[3].clone()]);
        assert_eq!(
            ledger.items(),
            vec![records[0].clone(), records[2].clone(), records[4].clone()]
        );
        assert_eq!(store.save_count(), 6);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let (store, ledger) = tracked_ledger();
        ledger.add(groceries(1.0)).unwrap();

        assert!(ledger.remove_at([7]).is_empty());
        assert_eq!(ledger.len(), 1);
        // The call still persists once
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn test_remove_by_id_is_idempotent() {
        let (store, ledger) = tracked_ledger();
        let keep = groceries(1.0);
        let gone = groceries(2.0);
        ledger.add(keep.clone()).unwrap();
        ledger.add(gone.clone()).unwrap();

        assert_eq!(ledger.remove_by_id(gone.id), Some(gone.clone()));
        assert_eq!(ledger.remove_by_id(gone.id), None);
        assert_eq!(ledger.items(), vec![keep]);
        assert_eq!(store.save_count(), 4);
    }

    #[test]
    fn test_clear_returns_everything() {
        let (store, ledger) = tracked_ledger();
        ledger.add(groceries(1.0)).unwrap();
        ledger.add(groceries(2.0)).unwrap();

        assert_eq!(ledger.clear().len(), 2);
        assert!(ledger.is_empty());
        assert!(store.stored().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_in_memory_state() {
        let store = Arc::new(MemoryLedgerStore::failing());
        let ledger = Ledger::new(Arc::clone(&store));

        ledger.add(groceries(5.0)).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_find_by_short_reference() {
        let (_, ledger) = tracked_ledger();
        let record = groceries(5.0);
        ledger.add(record.clone()).unwrap();

        assert_eq!(ledger.find(&record.id.short()), Some(record.clone()));
        assert_eq!(ledger.get(record.id), Some(record));
        assert!(ledger.find("exp-zzzzzzzz").is_none());
    }

    #[test]
    fn test_reload_from_json_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let ledger = Ledger::load(JsonLedgerStore::new(path.clone()));
        let a = groceries(300.0);
        let b = ExpenseRecord::new("Mug", ExpenseCategory::Other, 50.0).with_custom_label("Gift");
        ledger.add(a.clone()).unwrap();
        ledger.add(b.clone()).unwrap();
        drop(ledger);

        let reloaded = Ledger::load(JsonLedgerStore::new(path));
        assert_eq!(reloaded.items(), vec![a, b]);
    }

    #[test]
    fn test_concurrent_adds_all_land() {
        let store = Arc::new(MemoryLedgerStore::new());
        let ledger = Arc::new(Ledger::new(Arc::clone(&store)));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ledger = Arc::clone(&ledger);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        ledger.add(groceries(1.0)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.len(), 100);
        assert_eq!(ledger.total(), 100.0);
        assert_eq!(store.save_count(), 100);
        assert_eq!(store.stored().len(), 100);
    }
}
