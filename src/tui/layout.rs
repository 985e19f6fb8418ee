//! Layout definitions for the TUI
//!
//! Tab bar on top, main content, status bar at the bottom; per-tab
//! layouts below that.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct AppLayout {
    /// Tab bar at the top
    pub tab_bar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(10),   // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the Transactions tab: form beside the table
pub struct TransactionsLayout {
    /// Add/edit form panel
    pub form: Rect,
    /// Search input above the table
    pub search: Rect,
    /// Transaction table
    pub table: Rect,
}

impl TransactionsLayout {
    /// Calculate Transactions tab layout
    pub fn new(area: Rect) -> Self {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(40), // Form panel
                Constraint::Min(40),    // Table side
            ])
            .split(area);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(5),    // Table
            ])
            .split(horizontal[1]);

        Self {
            form: horizontal[0],
            search: right[0],
            table: right[1],
        }
    }
}

/// Layout for the Dashboard tab: summary cards above two charts
pub struct DashboardLayout {
    /// Total expenses card
    pub total_card: Rect,
    /// Top category card
    pub top_category_card: Rect,
    /// Recent transactions card
    pub recent_card: Rect,
    /// Monthly trend chart
    pub monthly_chart: Rect,
    /// Category breakdown chart
    pub category_chart: Rect,
}

impl DashboardLayout {
    /// Calculate Dashboard tab layout
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Summary cards
                Constraint::Min(10),   // Charts
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(vertical[0]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            total_card: cards[0],
            top_category_card: cards[1],
            recent_card: cards[2],
            monthly_chart: charts[0],
            category_chart: charts[1],
        }
    }
}

/// Layout for the Budgets tab
pub struct BudgetsLayout {
    /// Month selector header
    pub header: Rect,
    /// Budget form line
    pub form: Rect,
    /// Budget-vs-actual chart
    pub chart: Rect,
    /// Budget summary table
    pub table: Rect,
}

impl BudgetsLayout {
    /// Calculate Budgets tab layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Month header
                Constraint::Length(3), // Form
                Constraint::Min(8),    // Chart
                Constraint::Min(8),    // Table
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            chart: chunks[2],
            table: chunks[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
