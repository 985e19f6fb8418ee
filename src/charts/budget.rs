//! Budget-vs-actual chart
//!
//! Grouped bar series for the selected month: one group per category,
//! a budget bar beside an actual bar. Rows where both are zero are
//! excluded upstream.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::reports::BudgetRow;

/// One category's pair of bars
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetBar {
    /// Category name
    pub name: String,
    /// Budgeted amount for the month
    pub budgeted: Money,
    /// Actual spend for the month
    pub spent: Money,
}

/// Build the grouped series from the month's budget-vs-actual rows
pub fn view(rows: &[BudgetRow]) -> Vec<BudgetBar> {
    rows.iter()
        .map(|row| BudgetBar {
            name: row.category.name.clone(),
            budgeted: row.budgeted,
            spent: row.spent,
        })
        .collect()
}

/// Render the grouped budget-vs-actual bar chart
pub fn render(frame: &mut Frame, area: Rect, bars: &[BudgetBar]) {
    let block = Block::default()
        .title(" Budget vs Actual ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if bars.is_empty() {
        let text = Paragraph::new("No budgets or spending for this month")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(8)
        .bar_gap(1)
        .group_gap(3);

    for bar in bars {
        let pair = [
            Bar::default()
                .value(bar.budgeted.units().max(0) as u64)
                .text_value(bar.budgeted.to_string())
                .style(Style::default().fg(Color::Blue)),
            Bar::default()
                .value(bar.spent.units().max(0) as u64)
                .text_value(bar.spent.to_string())
                .style(Style::default().fg(Color::Red)),
        ];

        chart = chart.data(
            BarGroup::default()
                .label(Line::from(bar.name.clone()))
                .bars(&pair),
        );
    }

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, CategoryId, MonthKey, Transaction};
    use crate::reports::budget_overview;
    use chrono::NaiveDate;

    #[test]
    fn test_view_from_overview_rows() {
        let march = MonthKey::new(2024, 3);
        let categories = vec![
            Category::new("food", "Food", "#4CAF50"),
            Category::new("rent", "Rent", "#2196F3"),
        ];
        let budgets = vec![Budget::new(
            CategoryId::new("food"),
            march,
            Money::from_cents(10000),
        )];
        let transactions = vec![Transaction::new(
            Money::from_cents(2500),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            "groceries",
            CategoryId::new("food"),
        )];

        let rows = budget_overview::rows(&transactions, &budgets, &categories, march);
        let bars = view(&rows);

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].name, "Food");
        assert_eq!(bars[0].budgeted.cents(), 10000);
        assert_eq!(bars[0].spent.cents(), 2500);
    }
}
