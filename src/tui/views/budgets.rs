//! Budgets tab
//!
//! Month selector, budget form, budget-vs-actual chart, and the summary
//! table with per-row edit.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::charts;
use crate::tui::app::{App, BudgetsFocus};
use crate::tui::forms;
use crate::tui::layout::BudgetsLayout;

/// Render the Budgets tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = BudgetsLayout::new(area);

    render_month_header(frame, app, layout.header);

    let categories = app.categories();
    forms::budget::render(
        frame,
        layout.form,
        &app.budget_form,
        &categories,
        app.budgets_focus == BudgetsFocus::Form,
    );

    let rows = app.budget_rows();
    let bars = charts::budget::view(&rows);
    charts::budget::render(frame, layout.chart, &bars);

    render_summary_table(frame, app, layout.table);
}

/// Render the month selector header
fn render_month_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Budget Management ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled("◀ [ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.selected_month.label(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ] ▶", Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled("[ / ] change month", Style::default().fg(Color::Yellow)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the budget summary table for the selected month
fn render_summary_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.budgets_focus == BudgetsFocus::Overview;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Budget Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let rows_data = app.budget_rows();

    if rows_data.is_empty() {
        let text = Paragraph::new("No budgets or spending for this month. Press 'b' to set one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        ratatui::layout::Constraint::Min(16),    // Category
        ratatui::layout::Constraint::Length(12), // Budgeted
        ratatui::layout::Constraint::Length(12), // Spent
        ratatui::layout::Constraint::Length(12), // Remaining
        ratatui::layout::Constraint::Length(8),  // Actions
    ];

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from("Budgeted"),
        Cell::from("Spent"),
        Cell::from("Remaining"),
        Cell::from(""),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let rows: Vec<Row> = rows_data
        .iter()
        .map(|row| {
            let remaining_style = if row.is_over_budget() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };

            // Edit is offered only for rows backed by a budget entry
            let action = if row.budget_id.is_some() { "e:Edit" } else { "" };

            Row::new(vec![
                Cell::from(row.category.name.clone()),
                Cell::from(row.budgeted.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.spent.format_with_symbol(symbol))
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(row.remaining.format_with_symbol(symbol)).style(remaining_style),
                Cell::from(action).style(Style::default().fg(Color::Yellow)),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_budget_row));

    frame.render_stateful_widget(table, area, &mut state);
}
