//! Budget entry/edit form
//!
//! Sets the spending cap for one category in the selected month. The
//! edit flow is a two-state machine: Idle, or Editing an existing
//! budget entry; a new edit replaces any edit in progress, and
//! submit-success or cancel returns to Idle.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Budget, BudgetId, Category, CategoryId, Money, MonthKey};
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the budget form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetField {
    #[default]
    Category,
    Amount,
}

impl BudgetField {
    /// The other field (the form only has two)
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the budget form
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    /// Currently focused field
    pub focused_field: BudgetField,

    /// Index of the selected category in the category list
    pub category_index: usize,

    /// Amount input
    pub amount_input: TextInput,

    /// Id of the budget being edited; None means Idle (new budgets
    /// upsert by (category, month))
    pub editing: Option<BudgetId>,

    /// Amount validation error
    pub amount_error: Option<String>,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetFormState {
    /// Create a fresh form in the Idle state
    pub fn new() -> Self {
        Self {
            focused_field: BudgetField::Category,
            category_index: 0,
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            editing: None,
            amount_error: None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::new();
        self.update_focus();
    }

    /// Enter the Editing state for an existing budget, discarding any
    /// edit in progress
    pub fn start_edit(&mut self, budget: &Budget, categories: &[Category]) {
        *self = Self::new();
        self.editing = Some(budget.id.clone());
        self.focused_field = BudgetField::Amount;
        self.category_index = categories
            .iter()
            .position(|c| c.id == budget.category_id)
            .unwrap_or(0);
        self.amount_input = TextInput::new().label("Amount").content(format!(
            "{}.{:02}",
            budget.amount.units(),
            budget.amount.cents_part()
        ));
        self.update_focus();
    }

    /// Toggle between the two fields
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Update which input has focus
    pub fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == BudgetField::Amount;
    }

    /// Type a character into the amount field, clearing its error
    pub fn insert_char(&mut self, c: char) {
        if self.focused_field == BudgetField::Amount {
            self.amount_input.insert(c);
            self.amount_error = None;
        }
    }

    /// Backspace in the amount field, clearing its error
    pub fn backspace(&mut self) {
        if self.focused_field == BudgetField::Amount {
            self.amount_input.backspace();
            self.amount_error = None;
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

    /// Validate the amount, recording the error.
    ///
    /// Returns true when the form is submittable.
    pub fn validate(&mut self) -> bool {
        self.amount_error = match Money::parse(self.amount_input.value()) {
            Ok(amount) if amount.is_positive() => None,
            _ => Some("Please enter a valid budget amount".to_string()),
        };
        self.amount_error.is_none()
    }

    /// Build the budget from a validated form for the given month.
    ///
    /// Editing keeps the existing id; a new entry generates one. Call
    /// only after `validate()` returns true.
    pub fn build(&self, categories: &[Category], month: MonthKey) -> Result<Budget, String> {
        let amount =
            Money::parse(self.amount_input.value()).map_err(|_| "invalid amount".to_string())?;

        let category_id = categories
            .get(self.category_index)
            .map(|c| c.id.clone())
            .unwrap_or_else(|| CategoryId::new("uncategorized"));

        let mut budget = Budget::new(category_id, month, amount);
        if let Some(id) = &self.editing {
            budget.id = id.clone();
        }

        budget.validate().map_err(|e| e.to_string())?;
        Ok(budget)
    }
}

/// Render the budget form line
pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &BudgetFormState,
    categories: &[Category],
    focused: bool,
) {
    let title = if form.editing.is_some() {
        " Update Budget "
    } else {
        " Set Budget "
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
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Category selector
            Constraint::Length(26), // Amount input
            Constraint::Min(20),    // Error / hint
        ])
        .split(inner);

    // Category selector
    let category_name = categories
        .get(form.category_index)
        .map(|c| c.name.as_str())
        .unwrap_or("(none)");
    let category_focused = focused && form.focused_field == BudgetField::Category;
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
    frame.render_widget(Paragraph::new(category_line), chunks[0]);

    frame.render_widget(&form.amount_input, chunks[1]);

    let trailing = if let Some(error) = &form.amount_error {
        Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red))
    } else if form.editing.is_some() {
        Paragraph::new("[Enter] Update  [Esc] Cancel").style(Style::default().fg(Color::Yellow))
    } else {
        Paragraph::new("[Enter] Set  [Esc] Back").style(Style::default().fg(Color::Yellow))
    };
    frame.render_widget(trailing, chunks[2]);
}
