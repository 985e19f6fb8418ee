//! Status bar
//!
//! One line of key hints for the active tab, replaced by transient
//! status messages when one is set.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveTab, App, TransactionsFocus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = &app.status_message {
        let paragraph =
            Paragraph::new(message.as_str()).style(Style::default().fg(Color::Yellow));
        frame.render_widget(paragraph, area);
        return;
    }

    let hints = match app.active_tab {
        ActiveTab::Transactions => match app.transactions_focus {
            TransactionsFocus::Table => {
                "a:Add  e:Edit  x:Delete  /:Search  d/n/c/m:Sort  j/k:Move  1-3:Tabs  q:Quit"
            }
            TransactionsFocus::Form => "Tab:Next field  ←/→:Category  Enter:Save  Esc:Back",
            TransactionsFocus::Search => "Type to filter  Enter/Esc:Back",
        },
        ActiveTab::Dashboard => "1-3:Tabs  q:Quit",
        ActiveTab::Budgets => "[/]:Month  b:Set budget  e:Edit  j/k:Move  1-3:Tabs  q:Quit",
    };

    let paragraph = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
