//! Spending-by-category chart
//!
//! Share-of-total breakdown across categories, excluding zero-amount
//! categories. Rendered as a proportional colored bar per category with
//! name, amount, and percentage, the terminal stand-in for a pie chart.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, Money, Transaction};
use crate::reports::spending::category_totals;

use super::hex_color;

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// Resolved category name ("Unknown" for dangling references)
    pub name: String,
    /// Category display color (hex)
    pub color: String,
    /// All-time spend for the category
    pub total: Money,
    /// Share of the grand total, 0.0-100.0
    pub share: f64,
}

/// Build the category breakdown over all transactions.
///
/// Zero-amount categories are excluded; dangling references appear
/// under the Unknown sentinel's name and color.
pub fn view(transactions: &[Transaction], categories: &[Category]) -> Vec<CategorySlice> {
    let totals = category_totals(transactions);
    let grand_total: Money = totals.iter().map(|(_, m)| *m).sum();

    totals
        .into_iter()
        .filter(|(_, total)| total.is_positive())
        .map(|(id, total)| {
            let category = categories
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .unwrap_or_else(Category::unknown);

            let share = if grand_total.is_zero() {
                0.0
            } else {
                (total.cents() as f64 / grand_total.cents() as f64) * 100.0
            };

            CategorySlice {
                name: category.name,
                color: category.color,
                total,
                share,
            }
        })
        .collect()
}

/// Render the breakdown as proportional colored bars with a legend
pub fn render(frame: &mut Frame, area: Rect, slices: &[CategorySlice]) {
    let block = Block::default()
        .title(" Spending by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if slices.is_empty() {
        let text = Paragraph::new("No transaction data available")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Widest bar spans the inner width minus the legend column
    let bar_width = (area.width.saturating_sub(30)).max(10) as f64;

    let lines: Vec<Line> = slices
        .iter()
        .map(|slice| {
            let filled = ((slice.share / 100.0) * bar_width).round().max(1.0) as usize;
            Line::from(vec![
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(hex_color(&slice.color)),
                ),
                Span::raw(" "),
                Span::styled(slice.name.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {} ({:.0}%)", slice.total, slice.share),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
