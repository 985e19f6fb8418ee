//! Path management for finview
//!
//! Resolves the directory that holds settings and the three data files.
//!
//! ## Path Resolution Order
//!
//! 1. `FINVIEW_DATA_DIR` environment variable (if set)
//! 2. The platform project directory (`directories::ProjectDirs`),
//!    e.g. `~/.config/finview` on Linux

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinviewError;

/// Manages all paths used by finview
#[derive(Debug, Clone)]
pub struct FinviewPaths {
    /// Base directory for all finview data
    base_dir: PathBuf,
}

impl FinviewPaths {
    /// Create a new FinviewPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `FINVIEW_DATA_DIR` is not set.
    pub fn new() -> Result<Self, FinviewError> {
        let base_dir = if let Ok(custom) = std::env::var("FINVIEW_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "finview")
                .ok_or_else(|| {
                    FinviewError::Config("Could not determine a data directory".into())
                })?
                .config_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create FinviewPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (base/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FinviewError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinviewError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinviewError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if finview has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
