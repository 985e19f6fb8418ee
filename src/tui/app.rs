//! Application state for the TUI
//!
//! The App struct holds all transient UI state: active tab, focus,
//! forms, search/sort parameters, and the selected month. None of it is
//! persisted; the three injected stores own the durable data.

use crate::config::settings::Settings;
use crate::models::{Category, MonthKey, Transaction, TransactionId};
use crate::reports::budget_overview::{self, BudgetRow};
use crate::reports::filter::{search, sort_transactions, SortField, SortState};
use crate::storage::Store;

use super::forms::{BudgetFormState, TransactionFormState};
use super::widgets::TextInput;

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Transactions,
    Dashboard,
    Budgets,
}

impl ActiveTab {
    /// All tabs in display order
    pub fn all() -> &'static [Self] {
        &[Self::Transactions, Self::Dashboard, Self::Budgets]
    }

    /// Tab title for the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Self::Transactions => "Transactions",
            Self::Dashboard => "Dashboard",
            Self::Budgets => "Budgets",
        }
    }
}

/// Focus within the Transactions tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionsFocus {
    #[default]
    Table,
    Form,
    Search,
}

/// Focus within the Budgets tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetsFocus {
    #[default]
    Overview,
    Form,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Confirm deletion of a transaction
    ConfirmDelete(TransactionId),
}

/// Main application state
pub struct App<'a> {
    /// The injected storage coordinator
    pub store: &'a Store,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Transient status message shown in the status bar
    pub status_message: Option<String>,

    /// Focus within the Transactions tab
    pub transactions_focus: TransactionsFocus,

    /// Transaction add/edit form state
    pub transaction_form: TransactionFormState,

    /// Search input over the transaction table
    pub search_input: TextInput,

    /// Current sort configuration for the transaction table
    pub sort_state: SortState,

    /// Selected row in the (filtered, sorted) transaction table
    pub selected_transaction_index: usize,

    /// Focus within the Budgets tab
    pub budgets_focus: BudgetsFocus,

    /// Budget form state (Idle / Editing)
    pub budget_form: BudgetFormState,

    /// Month shown on the Budgets tab
    pub selected_month: MonthKey,

    /// Selected row in the budget overview table
    pub selected_budget_row: usize,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: &'a Store, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_tab: ActiveTab::default(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
            transactions_focus: TransactionsFocus::default(),
            transaction_form: TransactionFormState::new(),
            search_input: TextInput::new().placeholder("Search transactions..."),
            sort_state: SortState::default(),
            selected_transaction_index: 0,
            budgets_focus: BudgetsFocus::default(),
            budget_form: BudgetFormState::new(),
            selected_month: MonthKey::current(),
            selected_budget_row: 0,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different tab
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.clear_status();
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Current category snapshot
    pub fn categories(&self) -> Vec<Category> {
        self.store.categories.list().unwrap_or_default()
    }

    /// The transaction table contents: search filter applied, then the
    /// configured sort
    pub fn visible_transactions(&self) -> Vec<Transaction> {
        let transactions = self.store.transactions.list().unwrap_or_default();
        let categories = self.categories();

        let mut visible = search(&transactions, &categories, self.search_input.value());
        sort_transactions(&mut visible, self.sort_state);
        visible
    }

    /// The transaction currently selected in the table
    pub fn selected_transaction(&self) -> Option<Transaction> {
        self.visible_transactions()
            .get(self.selected_transaction_index)
            .cloned()
    }

    /// Budget-vs-actual rows for the selected month
    pub fn budget_rows(&self) -> Vec<BudgetRow> {
        let transactions = self.store.transactions.list().unwrap_or_default();
        let budgets = self.store.budgets.list().unwrap_or_default();
        let categories = self.categories();

        budget_overview::rows(&transactions, &budgets, &categories, self.selected_month)
    }

    /// Apply a sort request to the transaction table
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort_state.toggle(field);
        self.selected_transaction_index = 0;
    }

    /// Move the selection up in the active table
    pub fn move_up(&mut self) {
        match self.active_tab {
            ActiveTab::Transactions => {
                self.selected_transaction_index =
                    self.selected_transaction_index.saturating_sub(1);
            }
            ActiveTab::Budgets => {
                self.selected_budget_row = self.selected_budget_row.saturating_sub(1);
            }
            ActiveTab::Dashboard => {}
        }
    }

    /// Move the selection down in the active table
    pub fn move_down(&mut self) {
        match self.active_tab {
            ActiveTab::Transactions => {
                let max = self.visible_transactions().len();
                if self.selected_transaction_index + 1 < max {
                    self.selected_transaction_index += 1;
                }
            }
            ActiveTab::Budgets => {
                let max = self.budget_rows().len();
                if self.selected_budget_row + 1 < max {
                    self.selected_budget_row += 1;
                }
            }
            ActiveTab::Dashboard => {}
        }
    }

    /// Show the previous month on the Budgets tab
    pub fn prev_month(&mut self) {
        self.selected_month = self.selected_month.prev();
        self.selected_budget_row = 0;
    }

    /// Show the next month on the Budgets tab
    pub fn next_month(&mut self) {
        self.selected_month = self.selected_month.next();
        self.selected_budget_row = 0;
    }
}
