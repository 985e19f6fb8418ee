//! Transaction table filtering and sorting
//!
//! Case-insensitive search over description or resolved category name,
//! and the column-sort state machine for the transaction table.

use crate::models::{Category, Transaction};

/// Resolve a category reference against a snapshot, falling back to the
/// Unknown sentinel for dangling ids
fn resolve_name(categories: &[Category], transaction: &Transaction) -> String {
    categories
        .iter()
        .find(|c| c.id == transaction.category_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| Category::unknown().name)
}

/// Filter transactions by a case-insensitive substring match against
/// the description or the resolved category name
pub fn search(
    transactions: &[Transaction],
    categories: &[Category],
    query: &str,
) -> Vec<Transaction> {
    let needle = query.to_lowercase();

    transactions
        .iter()
        .filter(|t| {
            t.description.to_lowercase().contains(&needle)
                || resolve_name(categories, t).to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Sortable columns of the transaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Description,
    Category,
    Amount,
}

impl SortField {
    /// Column label shown in the table header
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Amount => "Amount",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Arrow indicator for the active column header
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Current sort configuration for the transaction table.
///
/// Toggling the active field flips the direction; selecting a new field
/// resets to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Apply a sort request for the given field
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Sort transactions in place by the configured field and direction.
///
/// Comparison is the natural ordering of the field's value; the
/// category column sorts by raw category id, not display name.
pub fn sort_transactions(transactions: &mut [Transaction], state: SortState) {
    transactions.sort_by(|a, b| {
        let ordering = match state.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Description => a.description.cmp(&b.description),
            SortField::Category => a.category_id.as_str().cmp(b.category_id.as_str()),
            SortField::Amount => a.amount.cmp(&b.amount),
        };

        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use chrono::NaiveDate;

    fn txn(cents: i64, category: &str, date: &str, description: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description,
            CategoryId::new(category),
        )
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("groceries", "Groceries", "#4CAF50"),
            Category::new("dining", "Dining Out", "#795548"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let transactions = vec![
            txn(100, "groceries", "2024-03-05", "Grocery run"),
            txn(200, "dining", "2024-03-06", "Pizza night"),
        ];

        let hits = search(&transactions, &categories(), "GROC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Grocery run");
    }

    #[test]
    fn test_search_matches_resolved_category_name() {
        let transactions = vec![
            txn(100, "groceries", "2024-03-05", "Weekly shop"),
            txn(200, "dining", "2024-03-06", "Pizza night"),
        ];

        let hits = search(&transactions, &categories(), "dining out");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Pizza night");
    }

    #[test]
    fn test_search_resolves_dangling_reference_to_unknown() {
        let transactions = vec![txn(100, "deleted-cat", "2024-03-05", "Orphan")];

        let hits = search(&transactions, &categories(), "unknown");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let transactions = vec![
            txn(100, "groceries", "2024-03-05", "a"),
            txn(200, "dining", "2024-03-06", "b"),
        ];

        assert_eq!(search(&transactions, &categories(), "").len(), 2);
    }

    #[test]
    fn test_default_sort_is_date_descending() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::Date);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let mut state = SortState {
            field: SortField::Amount,
            direction: SortDirection::Ascending,
        };

        state.toggle(SortField::Amount);
        assert_eq!(state.direction, SortDirection::Descending);

        state.toggle(SortField::Amount);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_new_field_resets_to_ascending() {
        let mut state = SortState {
            field: SortField::Amount,
            direction: SortDirection::Descending,
        };

        state.toggle(SortField::Date);
        assert_eq!(state.field, SortField::Date);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_by_amount() {
        let mut transactions = vec![
            txn(300, "a", "2024-03-01", "x"),
            txn(100, "b", "2024-03-02", "y"),
            txn(200, "c", "2024-03-03", "z"),
        ];

        let mut state = SortState {
            field: SortField::Amount,
            direction: SortDirection::Ascending,
        };
        sort_transactions(&mut transactions, state);
        let cents: Vec<_> = transactions.iter().map(|t| t.amount.cents()).collect();
        assert_eq!(cents, vec![100, 200, 300]);

        state.toggle(SortField::Amount);
        sort_transactions(&mut transactions, state);
        let cents: Vec<_> = transactions.iter().map(|t| t.amount.cents()).collect();
        assert_eq!(cents, vec![300, 200, 100]);
    }

    #[test]
    fn test_sort_by_category_uses_raw_id() {
        // "dining" < "groceries" by id even though the names would sort
        // "Dining Out" < "Groceries" as well; use ids that diverge
        let mut transactions = vec![
            txn(100, "zz-first-by-name", "2024-03-01", "x"),
            txn(200, "aa-last-by-name", "2024-03-02", "y"),
        ];

        sort_transactions(
            &mut transactions,
            SortState {
                field: SortField::Category,
                direction: SortDirection::Ascending,
            },
        );
        assert_eq!(transactions[0].category_id.as_str(), "aa-last-by-name");
    }

    #[test]
    fn test_sort_by_date() {
        let mut transactions = vec![
            txn(100, "a", "2024-03-15", "mid"),
            txn(200, "b", "2024-01-01", "old"),
            txn(300, "c", "2024-06-30", "new"),
        ];

        sort_transactions(
            &mut transactions,
            SortState {
                field: SortField::Date,
                direction: SortDirection::Descending,
            },
        );
        let descriptions: Vec<_> = transactions.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["new", "mid", "old"]);
    }
}
