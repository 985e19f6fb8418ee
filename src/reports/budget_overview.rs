//! Budget-vs-actual reconciliation
//!
//! For a selected month, pairs every category's budgeted amount with its
//! actual spend. Every category flows through the computation; rows
//! where both figures are zero are omitted from the returned table only.

use crate::models::{Budget, BudgetId, Category, Money, MonthKey, Transaction};

use super::spending::category_spend_for;

/// One category's budget-vs-actual figures for a month
#[derive(Debug, Clone)]
pub struct BudgetRow {
    /// The category
    pub category: Category,
    /// Id of the backing budget entry, if one exists for the month
    pub budget_id: Option<BudgetId>,
    /// Budgeted amount, zero when no budget is set
    pub budgeted: Money,
    /// Actual spend in the month
    pub spent: Money,
    /// budgeted - spent; negative means over budget
    pub remaining: Money,
}

impl BudgetRow {
    /// Whether this row is in the over-budget alert state
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

/// Compute budget-vs-actual rows for the given month.
///
/// Rows where both budgeted and spent are zero are dropped from the
/// result; the underlying computation still covers every category.
pub fn rows(
    transactions: &[Transaction],
    budgets: &[Budget],
    categories: &[Category],
    month: MonthKey,
) -> Vec<BudgetRow> {
    categories
        .iter()
        .map(|category| {
            let budget = budgets.iter().find(|b| b.matches(&category.id, month));
            let budgeted = budget.map(|b| b.amount).unwrap_or_default();
            let spent = category_spend_for(transactions, &category.id, month);

            BudgetRow {
                category: category.clone(),
                budget_id: budget.map(|b| b.id.clone()),
                budgeted,
                spent,
                remaining: budgeted - spent,
            }
        })
        .filter(|row| !(row.budgeted.is_zero() && row.spent.is_zero()))
        .collect()
}
