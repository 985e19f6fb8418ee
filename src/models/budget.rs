//! Budget model
//!
//! A planned spending cap for one category in one calendar month. The
//! (category, month) pair is kept unique by the store's `add` operation,
//! not by the record itself.

use serde::{Deserialize, Serialize};

use super::ids::{BudgetId, CategoryId};
use super::money::Money;
use super::month::MonthKey;

/// A planned spending cap for (category, month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this cap applies to
    pub category_id: CategoryId,

    /// The calendar month this cap applies to
    pub month: MonthKey,

    /// Budgeted amount (positive)
    pub amount: Money,
}

impl Budget {
    /// Create a new budget with a generated id
    pub fn new(category_id: CategoryId, month: MonthKey, amount: Money) -> Self {
        Self {
            id: BudgetId::generate(),
            category_id,
            month,
            amount,
        }
    }

    /// Whether this budget covers the given (category, month) pair
    pub fn matches(&self, category_id: &CategoryId, month: MonthKey) -> bool {
        &self.category_id == category_id && self.month == month
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
}

impl std::fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Budget amount must be greater than zero"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget() {
        let budget = Budget::new(
            CategoryId::new("groceries"),
            MonthKey::new(2024, 3),
            Money::from_cents(10000),
        );

        assert!(budget.matches(&CategoryId::new("groceries"), MonthKey::new(2024, 3)));
        assert!(!budget.matches(&CategoryId::new("dining"), MonthKey::new(2024, 3)));
        assert!(!budget.matches(&CategoryId::new("groceries"), MonthKey::new(2024, 4)));
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut budget = Budget::new(
            CategoryId::new("dining"),
            MonthKey::new(2024, 3),
            Money::zero(),
        );
        assert_eq!(
            budget.validate(),
            Err(BudgetValidationError::NonPositiveAmount)
        );

        budget.amount = Money::from_cents(5000);
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let budget = Budget::new(
            CategoryId::new("housing"),
            MonthKey::new(2024, 7),
            Money::from_cents(120000),
        );
        let json = serde_json::to_string(&budget).unwrap();
        assert!(json.contains("\"2024-07\""));

        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, deserialized);
    }
}
