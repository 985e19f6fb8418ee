//! Dashboard tab
//!
//! Summary cards above the monthly trend and category breakdown charts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::charts;
use crate::models::MonthKey;
use crate::reports::summary::{recent_transactions, top_category, total_spend, RECENT_COUNT};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

/// Render the Dashboard tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = DashboardLayout::new(area);

    let transactions = app.store.transactions.list().unwrap_or_default();
    let categories = app.categories();
    let symbol = &app.settings.currency_symbol;

    // Total expenses card
    let total = total_spend(&transactions);
    render_card(
        frame,
        layout.total_card,
        "Total Expenses",
        vec![
            big_line(total.format_with_symbol(symbol)),
            dim_line("All time".to_string()),
        ],
    );

    // Top spending category card
    let top_lines = match top_category(&transactions) {
        Some((category_id, amount)) => {
            let category = app.store.categories.lookup(&category_id);
            vec![
                big_line(category.name),
                dim_line(amount.format_with_symbol(symbol)),
            ]
        }
        None => vec![
            big_line("None".to_string()),
            dim_line(format!("{}0.00", symbol)),
        ],
    };
    render_card(frame, layout.top_category_card, "Top Category", top_lines);

    // Recent transactions card
    let recent = recent_transactions(&transactions, RECENT_COUNT);
    let recent_lines: Vec<Line> = if recent.is_empty() {
        vec![dim_line("No recent transactions".to_string())]
    } else {
        recent
            .iter()
            .map(|txn| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<20}", truncate(&txn.description, 20)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        txn.amount.format_with_symbol(symbol),
                        Style::default().fg(Color::White),
                    ),
                ])
            })
            .collect()
    };
    render_card(frame, layout.recent_card, "Recent Transactions", recent_lines);

    // Charts
    let monthly = charts::monthly::view(&transactions, MonthKey::current());
    charts::monthly::render(frame, layout.monthly_chart, &monthly);

    let slices = charts::category::view(&transactions, &categories);
    charts::category::render(frame, layout.category_chart, &slices);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn big_line(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn dim_line(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
