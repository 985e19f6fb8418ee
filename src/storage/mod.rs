//! Storage layer for finview
//!
//! Three independent JSON-file-backed state containers with atomic
//! writes. Each container is loaded explicitly; there is no cross-store
//! transaction and no referential enforcement between them.

pub mod budgets;
pub mod categories;
pub mod file_io;
pub mod transactions;

pub use budgets::BudgetStore;
pub use categories::CategoryStore;
pub use file_io::{try_read_json, write_json_atomic};
pub use transactions::TransactionStore;

use crate::config::paths::FinviewPaths;
use crate::error::FinviewError;

/// Coordinator that owns the three state containers.
///
/// Constructed explicitly and passed by reference into whatever consumes
/// it; there are no ambient singletons.
pub struct Store {
    paths: FinviewPaths,
    pub transactions: TransactionStore,
    pub categories: CategoryStore,
    pub budgets: BudgetStore,
}

impl Store {
    /// Create a new Store instance
    pub fn new(paths: FinviewPaths) -> Result<Self, FinviewError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            categories: CategoryStore::new(paths.categories_file()),
            budgets: BudgetStore::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinviewPaths {
        &self.paths
    }

    /// Load all three containers from disk
    pub fn load_all(&self) -> Result<(), FinviewError> {
        self.transactions.load()?;
        self.categories.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Whether all three containers have completed their load step
    pub fn is_loaded(&self) -> bool {
        self.transactions.is_loaded() && self.categories.is_loaded() && self.budgets.is_loaded()
    }
}
