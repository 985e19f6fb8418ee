//! Transaction store
//!
//! Owns the flat transaction list and persists it to transactions.json
//! on every mutation. `list()` returns insertion order; display order is
//! a derived sort, never a storage concern.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::FinviewError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{try_read_json, write_json_atomic};

/// State container for transactions
pub struct TransactionStore {
    path: PathBuf,
    transactions: RwLock<Vec<Transaction>>,
    loaded: AtomicBool,
}

impl TransactionStore {
    /// Create a new transaction store. Does not touch the disk; call
    /// `load()` for that.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: RwLock::new(Vec::new()),
            loaded: AtomicBool::new(false),
        }
    }

    /// Load transactions from disk.
    ///
    /// A missing or corrupt file leaves the store empty.
    pub fn load(&self) -> Result<(), FinviewError> {
        let list: Vec<Transaction> = try_read_json(&self.path)?.unwrap_or_default();

        let mut transactions = self
            .transactions
            .write()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *transactions = list;

        self.loaded.store(true, Ordering::Release);
        Ok(())
    }

    /// Whether `load()` has completed. Reads before this return the
    /// empty collection.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Get all transactions in stored (insertion) order
    pub fn list(&self) -> Result<Vec<Transaction>, FinviewError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(transactions.clone())
    }

    /// Append a transaction and persist
    pub fn add(&self, transaction: Transaction) -> Result<(), FinviewError> {
        {
            let mut transactions = self.transactions.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            transactions.push(transaction);
        }
        self.save()
    }

    /// Replace the transaction with a matching id and persist.
    /// No-op if the id is absent.
    pub fn update(&self, transaction: Transaction) -> Result<(), FinviewError> {
        let changed = {
            let mut transactions = self.transactions.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            match transactions.iter_mut().find(|t| t.id == transaction.id) {
                Some(slot) => {
                    *slot = transaction;
                    true
                }
                None => false,
            }
        };

        if changed {
            self.save()?;
        }
        Ok(())
    }

    /// Remove the transaction with a matching id and persist.
    /// No-op if the id is absent.
    pub fn delete(&self, id: &TransactionId) -> Result<(), FinviewError> {
        let changed = {
            let mut transactions = self.transactions.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let before = transactions.len();
            transactions.retain(|t| &t.id != id);
            transactions.len() != before
        };

        if changed {
            self.save()?;
        }
        Ok(())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, FinviewError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(transactions.len())
    }

    /// Persist the full current list
    fn save(&self) -> Result<(), FinviewError> {
        let transactions = self
            .transactions
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let store = TransactionStore::new(path);
        (temp_dir, store)
    }

    fn sample(description: &str, cents: i64) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            description,
            CategoryId::new("groceries"),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(!store.is_loaded());

        store.load().unwrap();
        assert!(store.is_loaded());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_reads_before_load_return_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let txn = sample("Grocery run", 1250);
        let id = txn.id.clone();
        store.add(txn.clone()).unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], txn);

        store.delete(&id).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.add(sample("first", 100)).unwrap();
        store.add(sample("second", 200)).unwrap();
        store.add(sample("third", 300)).unwrap();

        let descriptions: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        let mut txn = sample("Grocery run", 1250);
        store.add(txn.clone()).unwrap();

        txn.amount = Money::from_cents(999);
        txn.description = "Corner store".to_string();
        store.update(txn.clone()).unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].amount.cents(), 999);
        assert_eq!(list[0].description, "Corner store");
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.add(sample("kept", 100)).unwrap();
        store.update(sample("phantom", 200)).unwrap();

        let list = store.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].description, "kept");
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let (_temp_dir, store) = create_test_store();
        store.load().unwrap();

        store.add(sample("kept", 100)).unwrap();
        store.delete(&TransactionId::generate()).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_mutations_persist_across_reload() {
        let (temp_dir, store) = create_test_store();
        store.load().unwrap();

        let txn = sample("Grocery run", 1250);
        store.add(txn.clone()).unwrap();

        let store2 = TransactionStore::new(temp_dir.path().join("transactions.json"));
        store2.load().unwrap();

        let list = store2.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], txn);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let (temp_dir, store) = create_test_store();
        std::fs::write(temp_dir.path().join("transactions.json"), "{ not json").unwrap();

        store.load().unwrap();
        assert!(store.is_loaded());
        assert!(store.list().unwrap().is_empty());
    }
}
