//! TUI views
//!
//! The three tabs plus shared chrome (tab bar, status bar).

pub mod budgets;
pub mod dashboard;
pub mod status_bar;
pub mod tab_bar;
pub mod transactions;

use ratatui::{
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    tab_bar::render(frame, app, layout.tab_bar);

    if !app.store.is_loaded() {
        // First frame: stores are read only after this has been drawn
        let loading = Paragraph::new("Loading your data...")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(loading, layout.main);
        status_bar::render(frame, app, layout.status_bar);
        return;
    }

    match app.active_tab {
        ActiveTab::Transactions => transactions::render(frame, app, layout.main),
        ActiveTab::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveTab::Budgets => budgets::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if let ActiveDialog::ConfirmDelete(_) = &app.active_dialog {
        dialogs::confirm::render(frame, "Delete this transaction?");
    }
}
