//! Transactions tab
//!
//! Add/edit form beside the searchable, sortable transaction table.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::reports::filter::SortField;
use crate::tui::app::{App, TransactionsFocus};
use crate::tui::forms;
use crate::tui::layout::TransactionsLayout;

/// Render the Transactions tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = TransactionsLayout::new(area);

    let categories = app.categories();
    forms::transaction::render(
        frame,
        layout.form,
        &app.transaction_form,
        &categories,
        app.transactions_focus == TransactionsFocus::Form,
    );

    render_search(frame, app, layout.search);
    render_table(frame, app, layout.table);
}

/// Render the search box
fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.transactions_focus == TransactionsFocus::Search;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.search_input, inner);
}

/// Column header with the sort indicator on the active column
fn header_label(app: &App, field: SortField) -> String {
    if app.sort_state.field == field {
        format!("{} {}", field.label(), app.sort_state.direction.indicator())
    } else {
        field.label().to_string()
    }
}

/// Render the transaction table
fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.transactions_focus == TransactionsFocus::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Transaction History ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let transactions = app.visible_transactions();

    if transactions.is_empty() {
        let text = Paragraph::new("No transactions found.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        ratatui::layout::Constraint::Length(12), // Date
        ratatui::layout::Constraint::Min(20),    // Description
        ratatui::layout::Constraint::Length(16), // Category
        ratatui::layout::Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from(header_label(app, SortField::Date)),
        Cell::from(header_label(app, SortField::Description)),
        Cell::from(header_label(app, SortField::Category)),
        Cell::from(header_label(app, SortField::Amount)),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let date_format = &app.settings.date_format;
    let rows: Vec<Row> = transactions
        .iter()
        .map(|txn| {
            // Dangling category references resolve to Unknown here
            let category = app.store.categories.lookup(&txn.category_id);

            Row::new(vec![
                Cell::from(txn.date.format(date_format).to_string())
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(truncate(&txn.description, 30)),
                Cell::from(truncate(&category.name, 16))
                    .style(Style::default().fg(Color::DarkGray)),
                Cell::from(txn.amount.format_with_symbol(symbol)),
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
    state.select(Some(app.selected_transaction_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
