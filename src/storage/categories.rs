//! Category store
//!
//! Owns the category set, persisted to categories.json. The default
//! eleven-entry set is seeded only when no persisted state exists;
//! a persisted set is loaded verbatim, defaults are never merged in.
//!
//! Deleting a category does not cascade to transactions or budgets
//! referencing it; `lookup` resolves such dangling references to the
//! Unknown sentinel and never fails.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::error::FinviewError;
use crate::models::{default_categories, Category, CategoryId};

use super::file_io::{try_read_json, write_json_atomic};

/// State container for categories
pub struct CategoryStore {
    path: PathBuf,
    categories: RwLock<Vec<Category>>,
    loaded: AtomicBool,
}

impl CategoryStore {
    /// Create a new category store. Does not touch the disk; call
    /// `load()` for that.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(Vec::new()),
            loaded: AtomicBool::new(false),
        }
    }

    /// Load categories from disk.
    ///
    /// When no file exists the default set is seeded and written out.
    /// A corrupt file is discarded and the defaults take its place in
    /// memory; the next mutation overwrites it.
    pub fn load(&self) -> Result<(), FinviewError> {
        let existed = self.path.exists();
        let list = match try_read_json::<Vec<Category>, _>(&self.path)? {
            Some(list) => list,
            None => {
                let defaults = default_categories();
                if !existed {
                    write_json_atomic(&self.path, &defaults)?;
                }
                defaults
            }
        };

        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *categories = list;

        self.loaded.store(true, Ordering::Release);
        Ok(())
    }

    /// Whether `load()` has completed. Reads before this return the
    /// empty collection.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Get all categories in stored order
    pub fn list(&self) -> Result<Vec<Category>, FinviewError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.clone())
    }

    /// Resolve a category id to its category, or the Unknown sentinel
    /// when no category with that id exists. Never fails.
    pub fn lookup(&self, id: &CategoryId) -> Category {
        self.categories
            .read()
            .ok()
            .and_then(|categories| categories.iter().find(|c| &c.id == id).cloned())
            .unwrap_or_else(Category::unknown)
    }

    /// Append a category and persist
    pub fn add(&self, category: Category) -> Result<(), FinviewError> {
        {
            let mut categories = self.categories.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            categories.push(category);
        }
        self.save()
    }

    /// Replace the category with a matching id and persist.
    /// No-op if the id is absent.
    pub fn update(&self, category: Category) -> Result<(), FinviewError> {
        let changed = {
            let mut categories = self.categories.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            match categories.iter_mut().find(|c| c.id == category.id) {
                Some(slot) => {
                    *slot = category;
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

    /// Remove the category with a matching id and persist. No cascade:
    /// transactions and budgets referencing it keep their dangling ids.
    pub fn delete(&self, id: &CategoryId) -> Result<(), FinviewError> {
        let changed = {
            let mut categories = self.categories.write().map_err(|e| {
                FinviewError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            let before = categories.len();
            categories.retain(|c| &c.id != id);
            categories.len() != before
        };

        if changed {
            self.save()?;
        }
        Ok(())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, FinviewError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }

    /// Persist the full current list
    fn save(&self) -> Result<(), FinviewError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinviewError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*categories)
    }
}
