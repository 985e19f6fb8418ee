//! Monthly expenses chart
//!
//! Bar series of total spend per month for the trailing six months.
//! Empty months render as zero bars, not gaps.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Money, MonthKey, Transaction};
use crate::reports::spending::monthly_trend;

/// One bar of the monthly trend
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBar {
    /// Month label, e.g. "Mar 2024"
    pub label: String,
    /// Total spend in the month
    pub total: Money,
}

/// Build the monthly bar series for the six months ending at `end`
pub fn view(transactions: &[Transaction], end: MonthKey) -> Vec<MonthlyBar> {
    monthly_trend(transactions, end)
        .into_iter()
        .map(|(month, total)| MonthlyBar {
            label: month.label(),
            total,
        })
        .collect()
}

/// Render the monthly trend as a bar chart
pub fn render(frame: &mut Frame, area: Rect, bars: &[MonthlyBar]) {
    let block = Block::default()
        .title(" Monthly Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if bars.iter().all(|b| b.total.is_zero()) {
        let text = Paragraph::new("No transaction data available")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let chart_bars: Vec<Bar> = bars
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.total.units().max(0) as u64)
                .text_value(b.total.to_string())
                .label(Line::from(b.label.clone()))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(10)
        .bar_gap(2)
        .data(BarGroup::default().bars(&chart_bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;
    use chrono::NaiveDate;

    fn txn(cents: i64, date: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            "test",
            CategoryId::new("food"),
        )
    }

    #[test]
    fn test_view_has_six_labeled_bars() {
        let transactions = vec![txn(1000, "2024-03-10")];
        let bars = view(&transactions, MonthKey::new(2024, 4));

        assert_eq!(bars.len(), 6);
        assert_eq!(bars[0].label, "Nov 2023");
        assert_eq!(bars[5].label, "Apr 2024");
        assert_eq!(bars[4].total.cents(), 1000);
    }

    #[test]
    fn test_view_zero_months_are_present() {
        let bars = view(&[], MonthKey::new(2024, 4));
        assert_eq!(bars.len(), 6);
        assert!(bars.iter().all(|b| b.total.is_zero()));
    }
}
