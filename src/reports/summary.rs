//! Dashboard summary figures
//!
//! All-time totals for the summary cards: total spend, top spending
//! category, and the most recent transactions.

use crate::models::{CategoryId, Money, Transaction};

use super::spending::category_totals;

/// Number of transactions shown on the recent-transactions card
pub const RECENT_COUNT: usize = 3;

/// Sum of all transaction amounts, unfiltered by date
pub fn total_spend(transactions: &[Transaction]) -> Money {
    transactions.iter().map(|t| t.amount).sum()
}

/// The category with the maximum all-time summed amount.
///
/// Ties keep the category encountered first during the accumulation
/// pass (strict greater-than comparison over first-encountered
/// grouping order). `None` when there are no transactions.
pub fn top_category(transactions: &[Transaction]) -> Option<(CategoryId, Money)> {
    let mut top: Option<(CategoryId, Money)> = None;
    let totals = category_totals(transactions);
    for (id, total) in totals {
        match &top {
            Some((_, best)) if total <= *best => {}
            _ => top = Some((id, total)),
        }
    }

    top
}

/// The `n` transactions with the latest dates.
///
/// Sorts a copy descending by date; ties among equal dates keep their
/// relative order from the original list.
pub fn recent_transactions(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(cents: i64, category: &str, date: &str, description: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description,
            CategoryId::new(category),
        )
    }

    #[test]
    fn test_total_spend() {
        let transactions = vec![
            txn(1000, "food", "2024-03-05", "a"),
            txn(500, "dining", "2023-11-20", "b"),
            txn(700, "food", "2024-04-01", "c"),
        ];

        assert_eq!(total_spend(&transactions).cents(), 2200);
        assert!(total_spend(&[]).is_zero());
    }

    #[test]
    fn test_top_category() {
        let transactions = vec![
            txn(1000, "food", "2024-03-05", "a"),
            txn(500, "dining", "2024-03-06", "b"),
            txn(700, "dining", "2024-03-07", "c"),
        ];

        let (id, total) = top_category(&transactions).unwrap();
        assert_eq!(id.as_str(), "dining");
        assert_eq!(total.cents(), 1200);
    }

    #[test]
    fn test_top_category_tie_keeps_first_encountered() {
        let transactions = vec![
            txn(500, "dining", "2024-03-06", "a"),
            txn(500, "food", "2024-03-05", "b"),
        ];

        let (id, _) = top_category(&transactions).unwrap();
        assert_eq!(id.as_str(), "dining");
    }

    #[test]
    fn test_top_category_empty() {
        assert!(top_category(&[]).is_none());
    }

    #[test]
    fn test_recent_transactions() {
        let transactions = vec![
            txn(100, "food", "2024-01-01", "oldest"),
            txn(200, "food", "2024-03-15", "newest"),
            txn(300, "food", "2024-02-01", "middle"),
            txn(400, "food", "2024-01-15", "dropped"),
        ];

        let recent = recent_transactions(&transactions, RECENT_COUNT);
        let descriptions: Vec<_> = recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_recent_transactions_stable_on_equal_dates() {
        let transactions = vec![
            txn(100, "food", "2024-03-15", "first"),
            txn(200, "food", "2024-03-15", "second"),
            txn(300, "food", "2024-03-15", "third"),
        ];

        let recent = recent_transactions(&transactions, RECENT_COUNT);
        let descriptions: Vec<_> = recent.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }
}
