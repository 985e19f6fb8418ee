//! Terminal User Interface module
//!
//! A tabbed full-screen dashboard built on ratatui: a transaction
//! register with search and sort, a summary dashboard with charts, and
//! a monthly budget view.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Forms
pub mod forms;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
