//! Spending aggregation
//!
//! Per-category spend for a calendar month and the trailing monthly
//! trend. Single-pass accumulations; grouping order is the order in
//! which categories are first encountered in the transaction list.

use crate::models::{CategoryId, Money, MonthKey, Transaction};

/// Number of months covered by the trend window
pub const TREND_MONTHS: usize = 6;

/// Sum transaction amounts for the given month, grouped by category id.
///
/// Month membership is a plain (year, month) match on the transaction
/// date. Pairs appear in first-encountered order.
pub fn category_spend(transactions: &[Transaction], month: MonthKey) -> Vec<(CategoryId, Money)> {
    let mut totals: Vec<(CategoryId, Money)> = Vec::new();

    for txn in transactions {
        if !month.contains(txn.date) {
            continue;
        }

        match totals.iter_mut().find(|(id, _)| id == &txn.category_id) {
            Some((_, total)) => *total += txn.amount,
            None => totals.push((txn.category_id.clone(), txn.amount)),
        }
    }

    totals
}

/// Sum transaction amounts over all time, grouped by category id.
///
/// Pairs appear in first-encountered order.
pub fn category_totals(transactions: &[Transaction]) -> Vec<(CategoryId, Money)> {
    let mut totals: Vec<(CategoryId, Money)> = Vec::new();

    for txn in transactions {
        match totals.iter_mut().find(|(id, _)| id == &txn.category_id) {
            Some((_, total)) => *total += txn.amount,
            None => totals.push((txn.category_id.clone(), txn.amount)),
        }
    }

    totals
}

/// Spend for one category in one month
pub fn category_spend_for(
    transactions: &[Transaction],
    category_id: &CategoryId,
    month: MonthKey,
) -> Money {
    transactions
        .iter()
        .filter(|t| &t.category_id == category_id && month.contains(t.date))
        .map(|t| t.amount)
        .sum()
}

/// Total spend per month for the `TREND_MONTHS` calendar months ending
/// at `end` (inclusive), oldest first.
///
/// Every month is initialized to zero before accumulation, so empty
/// months appear as zero entries rather than being omitted.
pub fn monthly_trend(transactions: &[Transaction], end: MonthKey) -> Vec<(MonthKey, Money)> {
    let mut buckets: Vec<(MonthKey, Money)> = MonthKey::last_n(TREND_MONTHS, end)
        .into_iter()
        .map(|m| (m, Money::zero()))
        .collect();

    for txn in transactions {
        let key = MonthKey::from_date(txn.date);
        if let Some((_, total)) = buckets.iter_mut().find(|(m, _)| *m == key) {
            *total += txn.amount;
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(cents: i64, category: &str, date: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            "test",
            CategoryId::new(category),
        )
    }

    #[test]
    fn test_category_spend_by_month() {
        let transactions = vec![
            txn(1000, "food", "2024-03-05"),
            txn(500, "food", "2024-03-20"),
            txn(700, "food", "2024-04-01"),
        ];

        let march = category_spend(&transactions, MonthKey::new(2024, 3));
        assert_eq!(march, vec![(CategoryId::new("food"), Money::from_cents(1500))]);

        let april = category_spend(&transactions, MonthKey::new(2024, 4));
        assert_eq!(april, vec![(CategoryId::new("food"), Money::from_cents(700))]);
    }

    #[test]
    fn test_category_spend_groups_in_first_encountered_order() {
        let transactions = vec![
            txn(100, "dining", "2024-03-01"),
            txn(200, "food", "2024-03-02"),
            txn(300, "dining", "2024-03-03"),
        ];

        let totals = category_spend(&transactions, MonthKey::new(2024, 3));
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0], (CategoryId::new("dining"), Money::from_cents(400)));
        assert_eq!(totals[1], (CategoryId::new("food"), Money::from_cents(200)));
    }

    #[test]
    fn test_category_spend_for() {
        let transactions = vec![
            txn(1000, "food", "2024-03-05"),
            txn(700, "dining", "2024-03-05"),
        ];

        let spent =
            category_spend_for(&transactions, &CategoryId::new("food"), MonthKey::new(2024, 3));
        assert_eq!(spent.cents(), 1000);

        let none =
            category_spend_for(&transactions, &CategoryId::new("food"), MonthKey::new(2024, 4));
        assert!(none.is_zero());
    }

    #[test]
    fn test_monthly_trend_includes_empty_months() {
        let transactions = vec![
            txn(1000, "food", "2024-02-10"),
            txn(500, "dining", "2024-04-02"),
        ];

        let trend = monthly_trend(&transactions, MonthKey::new(2024, 4));
        assert_eq!(trend.len(), TREND_MONTHS);
        assert_eq!(trend[0].0, MonthKey::new(2023, 11));
        assert_eq!(trend[5].0, MonthKey::new(2024, 4));

        // Empty months are zero entries, not omissions
        assert!(trend[0].1.is_zero());
        assert_eq!(trend[3].1.cents(), 1000); // 2024-02
        assert!(trend[4].1.is_zero()); // 2024-03
        assert_eq!(trend[5].1.cents(), 500); // 2024-04
    }

    #[test]
    fn test_monthly_trend_ignores_out_of_window_dates() {
        let transactions = vec![
            txn(1000, "food", "2020-01-01"),
            txn(500, "food", "2024-04-02"),
        ];

        let trend = monthly_trend(&transactions, MonthKey::new(2024, 4));
        let total: Money = trend.iter().map(|(_, m)| *m).sum();
        assert_eq!(total.cents(), 500);
    }
}
