//! User settings for finview
//!
//! A small JSON settings file: display preferences only, no behavior
//! switches.

use serde::{Deserialize, Serialize};

use super::paths::FinviewPaths;
use crate::error::FinviewError;

/// User settings for finview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if none exist
    pub fn load_or_create(paths: &FinviewPaths) -> Result<Self, FinviewError> {
        let path = paths.settings_file();

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| FinviewError::Config(format!("Failed to read settings: {}", e)))?;
            // A corrupt settings file is not worth failing startup over
            Ok(serde_json::from_str(&content).unwrap_or_default())
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinviewPaths) -> Result<(), FinviewError> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FinviewError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), content)
            .map_err(|e| FinviewError::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
