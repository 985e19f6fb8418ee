//! Core data models for finview

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::Budget;
pub use category::{default_categories, Category};
pub use ids::{BudgetId, CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
pub use transaction::Transaction;
