//! Event handler for the TUI
//!
//! Routes keyboard events based on the active tab, focus, and dialog
//! state. All store mutations happen here, synchronously, in response
//! to user actions; storage failures surface on the status line.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::reports::filter::SortField;

use super::app::{ActiveDialog, ActiveTab, App, BudgetsFocus, TransactionsFocus};
use super::event::Event;
use super::forms::budget::BudgetField;
use super::forms::transaction::TransactionField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Messages live until the next key press
    app.clear_status();

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.active_tab {
        ActiveTab::Transactions => handle_transactions_key(app, key),
        ActiveTab::Dashboard => handle_dashboard_key(app, key),
        ActiveTab::Budgets => handle_budgets_key(app, key),
    }
}

/// Keys that work on any tab outside of text entry.
///
/// Returns true when the key was consumed.
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            true
        }
        KeyCode::Char('1') => {
            app.switch_tab(ActiveTab::Transactions);
            true
        }
        KeyCode::Char('2') => {
            app.switch_tab(ActiveTab::Dashboard);
            true
        }
        KeyCode::Char('3') => {
            app.switch_tab(ActiveTab::Budgets);
            true
        }
        _ => false,
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if let ActiveDialog::ConfirmDelete(id) = app.active_dialog.clone() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                match app.store.transactions.delete(&id) {
                    Ok(()) => {
                        app.set_status("Transaction deleted");
                        let max = app.visible_transactions().len();
                        app.selected_transaction_index =
                            app.selected_transaction_index.min(max.saturating_sub(1));
                    }
                    Err(e) => app.set_status(format!("Storage error: {}", e)),
                }
                app.close_dialog();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Declined: no state change
                app.close_dialog();
            }
            _ => {}
        }
    }
    Ok(())
}

/// Handle keys on the Dashboard tab
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    handle_global_key(app, key);
    Ok(())
}

/// Handle keys on the Transactions tab
fn handle_transactions_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.transactions_focus {
        TransactionsFocus::Table => handle_transaction_table_key(app, key),
        TransactionsFocus::Form => handle_transaction_form_key(app, key),
        TransactionsFocus::Search => handle_search_key(app, key),
    }
}

/// Handle keys when the transaction table is focused
fn handle_transaction_table_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if handle_global_key(app, key) {
        return Ok(());
    }

    match key.code {
        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Add a new transaction
        KeyCode::Char('a') => {
            let categories = app.categories();
            app.transaction_form.reset(&categories);
            app.transactions_focus = TransactionsFocus::Form;
        }

        // Edit the selected transaction
        KeyCode::Char('e') => {
            if let Some(txn) = app.selected_transaction() {
                let categories = app.categories();
                app.transaction_form.load(&txn, &categories);
                app.transactions_focus = TransactionsFocus::Form;
            }
        }

        // Delete (with confirmation)
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(txn) = app.selected_transaction() {
                app.active_dialog = ActiveDialog::ConfirmDelete(txn.id);
            }
        }

        // Search
        KeyCode::Char('/') => {
            app.transactions_focus = TransactionsFocus::Search;
            app.search_input.focused = true;
        }

        // Column sorting
        KeyCode::Char('d') => app.toggle_sort(SortField::Date),
        KeyCode::Char('n') => app.toggle_sort(SortField::Description),
        KeyCode::Char('c') => app.toggle_sort(SortField::Category),
        KeyCode::Char('m') => app.toggle_sort(SortField::Amount),

        _ => {}
    }
    Ok(())
}

/// Handle keys when the transaction form is focused
fn handle_transaction_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let category_focused = app.transaction_form.focused_field == TransactionField::Category;
    let category_count = app.categories().len();

    match key.code {
        KeyCode::Esc => {
            let categories = app.categories();
            app.transaction_form.reset(&categories);
            app.transactions_focus = TransactionsFocus::Table;
        }
        KeyCode::Tab | KeyCode::Down => app.transaction_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.transaction_form.prev_field(),
        KeyCode::Enter => submit_transaction(app),
        KeyCode::Left if category_focused => {
            app.transaction_form.category_prev(category_count);
        }
        KeyCode::Right if category_focused => {
            app.transaction_form.category_next(category_count);
        }
        KeyCode::Left => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.transaction_form.focused_input() {
                input.move_right();
            }
        }
        KeyCode::Backspace => app.transaction_form.backspace(),
        KeyCode::Char(c) => app.transaction_form.insert_char(c),
        _ => {}
    }
    Ok(())
}

/// Handle keys when the search box is focused
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.transactions_focus = TransactionsFocus::Table;
            app.search_input.focused = false;
        }
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.selected_transaction_index = 0;
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.selected_transaction_index = 0;
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        _ => {}
    }
    Ok(())
}

/// Validate and save the transaction form
fn submit_transaction(app: &mut App) {
    if !app.transaction_form.validate() {
        return;
    }

    let categories = app.categories();
    let transaction = match app.transaction_form.build(&categories) {
        Ok(txn) => txn,
        Err(e) => {
            app.set_status(format!("Invalid input: {}", e));
            return;
        }
    };

    let editing = app.transaction_form.editing.is_some();
    let result = if editing {
        app.store.transactions.update(transaction)
    } else {
        app.store.transactions.add(transaction)
    };

    match result {
        Ok(()) => {
            app.set_status(if editing {
                "Transaction updated"
            } else {
                "Transaction added"
            });
            app.transaction_form.reset(&categories);
            if editing {
                app.transactions_focus = TransactionsFocus::Table;
            }
        }
        Err(e) => app.set_status(format!("Storage error: {}", e)),
    }
}

/// Handle keys on the Budgets tab
fn handle_budgets_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.budgets_focus {
        BudgetsFocus::Overview => handle_budget_overview_key(app, key),
        BudgetsFocus::Form => handle_budget_form_key(app, key),
    }
}

/// Handle keys when the budget overview is focused
fn handle_budget_overview_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if handle_global_key(app, key) {
        return Ok(());
    }

    match key.code {
        // Month navigation
        KeyCode::Char('[') => app.prev_month(),
        KeyCode::Char(']') => app.next_month(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Set a new budget
        KeyCode::Char('b') | KeyCode::Char('a') => {
            app.budget_form.reset();
            app.budgets_focus = BudgetsFocus::Form;
        }

        // Edit the selected row's budget entry
        KeyCode::Char('e') => {
            let rows = app.budget_rows();
            let budget_id = rows
                .get(app.selected_budget_row)
                .and_then(|row| row.budget_id.clone());
            if let Some(id) = budget_id {
                let budgets = app.store.budgets.list().unwrap_or_default();
                if let Some(budget) = budgets.iter().find(|b| b.id == id) {
                    let categories = app.categories();
                    app.budget_form.start_edit(budget, &categories);
                    app.budgets_focus = BudgetsFocus::Form;
                }
            }
        }

        _ => {}
    }
    Ok(())
}

/// Handle keys when the budget form is focused
fn handle_budget_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let category_focused = app.budget_form.focused_field == BudgetField::Category;
    let category_count = app.categories().len();

    match key.code {
        KeyCode::Esc => {
            // Cancel: Editing returns to Idle
            app.budget_form.reset();
            app.budgets_focus = BudgetsFocus::Overview;
        }
        KeyCode::Tab | KeyCode::BackTab => app.budget_form.next_field(),
        KeyCode::Enter => submit_budget(app),
        KeyCode::Left | KeyCode::Up if category_focused => {
            app.budget_form.category_prev(category_count);
        }
        KeyCode::Right | KeyCode::Down if category_focused => {
            app.budget_form.category_next(category_count);
        }
        KeyCode::Left => app.budget_form.amount_input.move_left(),
        KeyCode::Right => app.budget_form.amount_input.move_right(),
        KeyCode::Backspace => app.budget_form.backspace(),
        KeyCode::Char(c) => app.budget_form.insert_char(c),
        _ => {}
    }
    Ok(())
}

/// Validate and save the budget form
fn submit_budget(app: &mut App) {
    if !app.budget_form.validate() {
        return;
    }

    let categories = app.categories();
    let budget = match app.budget_form.build(&categories, app.selected_month) {
        Ok(budget) => budget,
        Err(e) => {
            app.set_status(format!("Invalid input: {}", e));
            return;
        }
    };

    let editing = app.budget_form.editing.is_some();
    let result = if editing {
        // Direct replace-by-id; does not re-check the (category, month) pair
        app.store.budgets.update(budget)
    } else {
        // Upsert on (category, month)
        app.store.budgets.add(budget)
    };

    match result {
        Ok(()) => {
            app.set_status(if editing { "Budget updated" } else { "Budget set" });
            app.budget_form.reset();
            app.budgets_focus = BudgetsFocus::Overview;
        }
        Err(e) => app.set_status(format!("Storage error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinviewPaths;
    use crate::config::settings::Settings;
    use crate::models::{CategoryId, Money, MonthKey, Transaction};
    use crate::storage::Store;
    use crate::tui::widgets::TextInput;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, Store, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinviewPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();
        store.load_all().unwrap();
        (temp_dir, store, Settings::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn txn(description: &str) -> Transaction {
        Transaction::new(
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            description,
            CategoryId::new("groceries"),
        )
    }

    #[test]
    fn test_quit_key() {
        let (_temp_dir, store, settings) = create_test_store();
        let mut app = App::new(&store, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_switching() {
        let (_temp_dir, store, settings) = create_test_store();
        let mut app = App::new(&store, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.active_tab, ActiveTab::Dashboard);

        handle_key_event(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.active_tab, ActiveTab::Budgets);

        handle_key_event(&mut app, key(KeyCode::Char('1'))).unwrap();
        assert_eq!(app.active_tab, ActiveTab::Transactions);
    }

    #[test]
    fn test_add_transaction_via_form() {
        let (_temp_dir, store, settings) = create_test_store();
        let mut app = App::new(&store, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.transactions_focus, TransactionsFocus::Form);

        app.transaction_form.amount_input = TextInput::new().content("12.50");
        app.transaction_form.date_input = TextInput::new().content("2024-03-05");
        app.transaction_form.description_input = TextInput::new().content("Lunch");

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(store.transactions.count().unwrap(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Transaction added"));

        // Form stays focused and resets for the next entry
        assert_eq!(app.transactions_focus, TransactionsFocus::Form);
        assert_eq!(app.transaction_form.amount_input.value(), "");
    }

    #[test]
    fn test_invalid_form_blocks_submission() {
        let (_temp_dir, store, settings) = create_test_store();
        let mut app = App::new(&store, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        app.transaction_form.amount_input = TextInput::new().content("-5");

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(store.transactions.count().unwrap(), 0);
        assert!(app.transaction_form.amount_error.is_some());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_temp_dir, store, settings) = create_test_store();
        store.transactions.add(txn("doomed")).unwrap();

        let mut app = App::new(&store, &settings);
        handle_key_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.has_dialog());
        assert_eq!(store.transactions.count().unwrap(), 1);

        // Declining leaves the transaction in place
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert!(!app.has_dialog());
        assert_eq!(store.transactions.count().unwrap(), 1);

        // Confirming deletes it
        handle_key_event(&mut app, key(KeyCode::Char('x'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert_eq!(store.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_sort_keys_drive_state_machine() {
        let (_temp_dir, store, settings) = create_test_store();
        let mut app = App::new(&store, &settings);

        handle_key_event(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(app.sort_state.field, SortField::Amount);
        assert_eq!(
            app.sort_state.direction,
            crate::reports::SortDirection::Ascending
        );

        handle_key_event(&mut app, key(KeyCode::Char('m'))).unwrap();
        assert_eq!(
            app.sort_state.direction,
            crate::reports::SortDirection::Descending
        );
    }

    #[test]
    fn test_search_focus_and_typing() {
        let (_temp_dir, store, settings) = create_test_store();
        store.transactions.add(txn("Grocery run")).unwrap();
        store.transactions.add(txn("Pizza night")).unwrap();

        let mut app = App::new(&store, &settings);
        handle_key_event(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.transactions_focus, TransactionsFocus::Search);

        for c in "pizza".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.visible_transactions().len(), 1);

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.transactions_focus, TransactionsFocus::Table);
    }

    #[test]
    fn test_budget_submit_upserts_for_selected_month() {
        let (_temp_dir, store, settings) = create_test_store();
        let mut app = App::new(&store, &settings);
        app.switch_tab(ActiveTab::Budgets);
        app.selected_month = MonthKey::new(2024, 3);

        handle_key_event(&mut app, key(KeyCode::Char('b'))).unwrap();
        assert_eq!(app.budgets_focus, BudgetsFocus::Form);

        app.budget_form.amount_input = TextInput::new().content("100");
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(store.budgets.count().unwrap(), 1);
        assert_eq!(app.budgets_focus, BudgetsFocus::Overview);

        // Same category and month again: amount overwritten in place
        handle_key_event(&mut app, key(KeyCode::Char('b'))).unwrap();
        app.budget_form.amount_input = TextInput::new().content("150");
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(store.budgets.count().unwrap(), 1);
        assert_eq!(store.budgets.list().unwrap()[0].amount.cents(), 15000);
    }

    #[test]
    fn test_budget_edit_flow_state_machine() {
        let (_temp_dir, store, settings) = create_test_store();
        let march = MonthKey::new(2024, 3);
        store
            .budgets
            .add(crate::models::Budget::new(
                CategoryId::new("groceries"),
                march,
                Money::from_cents(10000),
            ))
            .unwrap();

        let mut app = App::new(&store, &settings);
        app.switch_tab(ActiveTab::Budgets);
        app.selected_month = march;

        // Idle -> Editing
        handle_key_event(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert_eq!(app.budgets_focus, BudgetsFocus::Form);
        assert!(app.budget_form.editing.is_some());

        // Explicit cancel -> Idle
        handle_key_event(&mut app, key(KeyCode::Esc)).unwrap();
        assert!(app.budget_form.editing.is_none());
        assert_eq!(app.budgets_focus, BudgetsFocus::Overview);
    }
}
