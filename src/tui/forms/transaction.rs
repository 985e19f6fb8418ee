//! Transaction entry/edit form
//!
//! Inline panel with amount, date, description, and category fields.
//! Validation errors are reported next to the offending field and block
//! submission; nothing is saved partially.

use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Category, CategoryId, Money, Transaction, TransactionId};
use crate::tui::widgets::TextInput;

/// Category id pre-selected for new transactions
const DEFAULT_CATEGORY: &str = "uncategorized";

/// Which field is currently focused in the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Amount,
    Date,
    Description,
    Category,
}

impl TransactionField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Category => Self::Description,
        }
    }
}

/// State for the transaction form
#[derive(Debug, Clone)]
pub struct TransactionFormState {
    /// Currently focused field
    pub focused_field: TransactionField,

    /// Amount input
    pub amount_input: TextInput,

    /// Date input
    pub date_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Index of the selected category in the category list
    pub category_index: usize,

    /// Id of the transaction being edited, if any
    pub editing: Option<TransactionId>,

    /// Per-field validation errors
    pub amount_error: Option<String>,
    pub date_error: Option<String>,
    pub description_error: Option<String>,
}

impl Default for TransactionFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionFormState {
    /// Create a fresh form, dated today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: TransactionField::Amount,
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD")
                .content(today.format("%Y-%m-%d").to_string()),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Grocery shopping"),
            category_index: 0,
            editing: None,
            amount_error: None,
            date_error: None,
            description_error: None,
        }
    }

    /// Reset to a fresh add form, defaulting the category selector to
    /// "uncategorized" when it is present in the list
    pub fn reset(&mut self, categories: &[Category]) {
        *self = Self::new();
        self.category_index = categories
            .iter()
            .position(|c| c.id.as_str() == DEFAULT_CATEGORY)
            .unwrap_or(0);
        self.update_focus();
    }

    /// Pre-populate the form from an existing transaction
    pub fn load(&mut self, transaction: &Transaction, categories: &[Category]) {
        *self = Self::new();
        self.editing = Some(transaction.id.clone());
        self.amount_input = TextInput::new().label("Amount").content(format!(
            "{}.{:02}",
            transaction.amount.units(),
            transaction.amount.cents_part()
        ));
        self.date_input = TextInput::new()
            .label("Date")
            .content(transaction.date.format("%Y-%m-%d").to_string());
        self.description_input = TextInput::new()
            .label("Description")
            .content(transaction.description.clone());
        self.category_index = categories
            .iter()
            .position(|c| c.id == transaction.category_id)
            .unwrap_or(0);
        self.update_focus();
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Update which input has focus
    pub fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == TransactionField::Amount;
        self.date_input.focused = self.focused_field == TransactionField::Date;
        self.description_input.focused = self.focused_field == TransactionField::Description;
    }

    /// Get the currently focused text input, if the focused field has one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            TransactionField::Amount => Some(&mut self.amount_input),
            TransactionField::Date => Some(&mut self.date_input),
            TransactionField::Description => Some(&mut self.description_input),
            TransactionField::Category => None,
        }
    }

    /// Type a character into the focused field, clearing its error
    pub fn insert_char(&mut self, c: char) {
        let field = self.focused_field;
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
        self.clear_error(field);
    }

    /// Backspace in the focused field, clearing its error
    pub fn backspace(&mut self) {
        let field = self.focused_field;
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
        self.clear_error(field);
    }

    fn clear_error(&mut self, field: TransactionField) {
        match field {
            TransactionField::Amount => self.amount_error = None,
            TransactionField::Date => self.date_error = None,
            TransactionField::Description => self.description_error = None,
            TransactionField::Category => {}
        }
    }

    /// Select the previous category
    pub fn category_prev(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.category_index = self
            .category_index
            .checked_sub(1)
            .unwrap_or(category_count - 1);
    }

    /// Select the next category
    pub fn category_next(&mut self, category_count: usize) {
        if category_count == 0 {
            return;
        }
        self.category_index = (self.category_index + 1) % category_count;
    }

    /// Validate all fields, recording per-field errors.
    ///
    /// Returns true when the form is submittable.
    pub fn validate(&mut self) -> bool {
        self.amount_error = match Money::parse(self.amount_input.value()) {
            Ok(amount) if amount.is_positive() => None,
            _ => Some("Please enter a valid amount".to_string()),
        };

        self.date_error =
            match NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d") {
                Ok(_) => None,
                Err(_) => Some("Please enter a valid date".to_string()),
            };

        self.description_error = if self.description_input.value().trim().is_empty() {
            Some("Please enter a description".to_string())
        } else {
            None
        };

        self.amount_error.is_none() && self.date_error.is_none() && self.description_error.is_none()
    }

    /// Build the transaction from a validated form.
    ///
    /// Editing keeps the existing id; adding generates one. Call only
    /// after `validate()` returns true.
    pub fn build(&self, categories: &[Category]) -> Result<Transaction, String> {
        let amount =
            Money::parse(self.amount_input.value()).map_err(|_| "invalid amount".to_string())?;
        let date = NaiveDate::parse_from_str(self.date_input.value().trim(), "%Y-%m-%d")
            .map_err(|_| "invalid date".to_string())?;

        let category_id = categories
            .get(self.category_index)
            .map(|c| c.id.clone())
            .unwrap_or_else(|| CategoryId::new(DEFAULT_CATEGORY));

        let mut transaction = Transaction::new(
            amount,
            date,
            self.description_input.value().to_string(),
            category_id,
        );
        if let Some(id) = &self.editing {
            transaction.id = id.clone();
        }

        transaction.validate().map_err(|e| e.to_string())?;
        Ok(transaction)
    }
}

/// Render the transaction form panel
pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &TransactionFormState,
    categories: &[Category],
    focused: bool,
) {
    let title = if form.editing.is_some() {
        " Edit Transaction "
    } else {
        " Add Transaction "
    };
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Amount error
            Constraint::Length(1), // Date
            Constraint::Length(1), // Date error
            Constraint::Length(1), // Description
            Constraint::Length(1), // Description error
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit hint
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(&form.amount_input, chunks[0]);
    render_error(frame, chunks[1], &form.amount_error);
    frame.render_widget(&form.date_input, chunks[2]);
    render_error(frame, chunks[3], &form.date_error);
    frame.render_widget(&form.description_input, chunks[4]);
    render_error(frame, chunks[5], &form.description_error);

    // Category selector
    let category_name = categories
        .get(form.category_index)
        .map(|c| c.name.as_str())
        .unwrap_or("(none)");
    let category_focused = focused && form.focused_field == TransactionField::Category;
    let category_style = if category_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let category_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(category_name, category_style),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(category_line), chunks[6]);

    let submit_label = if form.editing.is_some() {
        "[Enter] Update  [Esc] Cancel"
    } else {
        "[Enter] Add  [Esc] Back"
    };
    let hint = Paragraph::new(submit_label).style(Style::default().fg(Color::Yellow));
    frame.render_widget(hint, chunks[8]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &Option<String>) {
    if let Some(message) = error {
        let text = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(text, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new("groceries", "Groceries", "#4CAF50"),
            Category::new("uncategorized", "Uncategorized", "#9E9E9E"),
        ]
    }

    #[test]
    fn test_reset_selects_uncategorized() {
        let mut form = TransactionFormState::new();
        form.reset(&categories());
        assert_eq!(form.category_index, 1);
        assert!(form.editing.is_none());
    }

    #[test]
    fn test_validate_flags_each_field() {
        let mut form = TransactionFormState::new();
        form.reset(&categories());
        form.amount_input = TextInput::new().content("-5");
        form.date_input = TextInput::new().content("not-a-date");

        assert!(!form.validate());
        assert!(form.amount_error.is_some());
        assert!(form.date_error.is_some());
        assert!(form.description_error.is_some());
    }

    #[test]
    fn test_validate_clears_stale_errors() {
        let mut form = TransactionFormState::new();
        form.reset(&categories());
        assert!(!form.validate());

        form.amount_input = TextInput::new().content("12.50");
        form.description_input = TextInput::new().content("Lunch");
        assert!(form.validate());
        assert!(form.amount_error.is_none());
        assert!(form.description_error.is_none());
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut form = TransactionFormState::new();
        form.reset(&categories());
        form.validate();
        assert!(form.amount_error.is_some());

        form.focused_field = TransactionField::Amount;
        form.insert_char('5');
        assert!(form.amount_error.is_none());
    }

    #[test]
    fn test_build_new_transaction() {
        let mut form = TransactionFormState::new();
        form.reset(&categories());
        form.amount_input = TextInput::new().content("12.50");
        form.date_input = TextInput::new().content("2024-03-05");
        form.description_input = TextInput::new().content("Lunch");
        form.category_index = 0;

        assert!(form.validate());
        let txn = form.build(&categories()).unwrap();
        assert_eq!(txn.amount.cents(), 1250);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(txn.category_id, CategoryId::new("groceries"));
    }

    #[test]
    fn test_build_edit_keeps_id() {
        let cats = categories();
        let original = Transaction::new(
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            "Before",
            CategoryId::new("groceries"),
        );

        let mut form = TransactionFormState::new();
        form.load(&original, &cats);
        form.description_input = TextInput::new().content("After");

        assert!(form.validate());
        let updated = form.build(&cats).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.description, "After");
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut form = TransactionFormState::new();
        form.category_index = 0;

        form.category_prev(2);
        assert_eq!(form.category_index, 1);
        form.category_next(2);
        assert_eq!(form.category_index, 0);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(TransactionField::Amount.next(), TransactionField::Date);
        assert_eq!(TransactionField::Category.next(), TransactionField::Amount);
        assert_eq!(TransactionField::Amount.prev(), TransactionField::Category);
    }
}
