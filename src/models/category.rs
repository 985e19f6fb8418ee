//! Category model
//!
//! Categories are named, colored grouping labels for transactions and
//! budgets. A fixed default set is seeded on first run; the Unknown
//! sentinel stands in for deleted categories that are still referenced.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Neutral gray used for the Unknown sentinel and as the color fallback
pub const NEUTRAL_GRAY: &str = "#9E9E9E";

/// A grouping label for transactions and budgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier (slug for defaults, generated for user entries)
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display color as a hex string, e.g. "#4CAF50"
    pub color: String,
}

impl Category {
    /// Create a new category
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// The sentinel returned for lookups of ids that no longer exist.
    ///
    /// Never persisted.
    pub fn unknown() -> Self {
        Self::new("unknown", "Unknown", NEUTRAL_GRAY)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The eleven-entry default category set seeded on first run.
///
/// `uncategorized` is the default for new transactions.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("groceries", "Groceries", "#4CAF50"),
        Category::new("housing", "Housing", "#2196F3"),
        Category::new("transportation", "Transportation", "#FF9800"),
        Category::new("utilities", "Utilities", "#9C27B0"),
        Category::new("entertainment", "Entertainment", "#F44336"),
        Category::new("healthcare", "Healthcare", "#00BCD4"),
        Category::new("dining", "Dining Out", "#795548"),
        Category::new("shopping", "Shopping", "#E91E63"),
        Category::new("personal", "Personal Care", "#607D8B"),
        Category::new("education", "Education", "#3F51B5"),
        Category::new("uncategorized", "Uncategorized", NEUTRAL_GRAY),
    ]
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 11);

        let ids: Vec<_> = defaults.iter().map(|c| c.id.as_str()).collect();
        assert!(ids.contains(&"groceries"));
        assert!(ids.contains(&"uncategorized"));
        assert!(!ids.contains(&"unknown"));
    }

    #[test]
    fn test_unknown_sentinel() {
        let unknown = Category::unknown();
        assert_eq!(unknown.id.as_str(), "unknown");
        assert_eq!(unknown.name, "Unknown");
        assert_eq!(unknown.color, NEUTRAL_GRAY);
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("custom", "Custom", "#112233");
        assert!(category.validate().is_ok());

        category.name = String::new();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_serialization() {
        let category = Category::new("dining", "Dining Out", "#795548");
        let json = serde_json::to_string(&category).unwrap();
        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(category, deserialized);
    }
}
