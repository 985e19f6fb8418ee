//! Budget store
//!
//! Owns the budget list, persisted to budgets.json. `add` has upsert
//! semantics keyed on (category, month): an existing pair keeps its
//! entry identity and only its amount is overwritten. `update` is a
//! plain replace-by-id and does not re-check the pair.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::FinviewError;
use crate::models::{Budget, BudgetId};

use super::file_io::{try_read_json, write_json_atomic};

/// State container for budgets
pub struct BudgetStore {
    path: PathBuf,
    budgets: RwLock<Vec<Budget>>,
    loaded: AtomicBool,
}

impl BudgetStore {
    /// Create a new budget store. Does not touch the disk; call
    /// `load()` for that.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            budgets: RwLock::new(Vec::new()),
            loaded: AtomicBool::new(false),
        }
    }

    /// Load budgets from disk.
    ///
    /// A missing or corrupt file leaves the store empty.
    pub fn load(&self) -> Result<(), FinviewError> {
        let list: Vec<Budget> = try_read_json(&self.path)?.unwrap_or_default();

        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *budgets = list;

        self.loaded.store(true, Ordering::Release);
        Ok(())
    }

    /// Whether `load()` has completed. Reads before this return the
    /// empty collection.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Get all budgets in stored order
    pub fn list(&self) -> Result<Vec<Budget>, FinviewError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.clone())
    }

    /// Upsert a budget keyed on (category, month) and persist.
    ///
    /// An existing entry for the pair keeps its id; only the amount is
    /// overwritten. Otherwise the given budget is appended as-is.
    pub fn add(&self, budget: Budget) -> Result<(), FinviewError> {
        {
            let mut budgets = self.budgets.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            match budgets
                .iter_mut()
                .find(|b| b.matches(&budget.category_id, budget.month))
            {
                Some(existing) => existing.amount = budget.amount,
                None => budgets.push(budget),
            }
        }
        self.save()
    }

    /// Replace the budget with a matching id and persist. No-op if the
    /// id is absent. Does not re-check (category, month) uniqueness.
    pub fn update(&self, budget: Budget) -> Result<(), FinviewError> {
        let changed = {
            let mut budgets = self.budgets.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            match budgets.iter_mut().find(|b| b.id == budget.id) {
                Some(slot) => {
                    *slot = budget;
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

    /// Remove the budget with a matching id and persist.
    /// No-op if the id is absent.
    pub fn delete(&self, id: &BudgetId) -> Result<(), FinviewError> {
        let changed = {
            let mut budgets = self.budgets.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let before = budgets.len();
            budgets.retain(|b| &b.id != id);
            budgets.len() != before
        };

        if changed {
            self.save()?;
        }
        Ok(())
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, FinviewError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(budgets.len())
    }

    /// Persist the full current list
    fn save(&self) -> Result<(), FinviewError> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*budgets)
    }
}
