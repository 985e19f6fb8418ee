//! Transaction model
//!
//! A single recorded expense. The category reference is not validated
//! against the category set; a dangling reference is resolved to the
//! Unknown sentinel at display time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier (caller-generated)
    pub id: TransactionId,

    /// Amount spent (positive)
    pub amount: Money,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// What the money was spent on
    pub description: String,

    /// Category reference; may dangle after a category is deleted
    pub category_id: CategoryId,
}

impl Transaction {
    /// Create a new transaction with a generated id
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            amount,
            date,
            description: description.into(),
            category_id,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount,
    EmptyDescription,
}

impl std::fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Grocery run",
            CategoryId::new("groceries"),
        )
    }

    #[test]
    fn test_new_transaction() {
        let txn = sample();
        assert_eq!(txn.amount.cents(), 1250);
        assert_eq!(txn.description, "Grocery run");
        assert_eq!(txn.category_id, CategoryId::new("groceries"));
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut txn = sample();

        txn.amount = Money::zero();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount)
        );

        txn.amount = Money::from_cents(100);
        txn.description = "   ".to_string();
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_serialization() {
        let txn = sample();
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
