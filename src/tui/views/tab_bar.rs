//! Tab bar
//!
//! Transactions / Dashboard / Budgets, switched with the number keys

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::{ActiveTab, App};

/// Render the tab bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = ActiveTab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("[{}] {}", i + 1, tab.title()))
        .collect();

    let selected = ActiveTab::all()
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" finview ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);

    frame.render_widget(tabs, area);
}
