//! Text input widget
//!
//! A single-line text input field with cursor support

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset, kept on a char boundary)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .chars()
            .next_back()
            .map(|c| self.cursor - c.len_utf8())
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.len() + 2
        };

        let input_start = area.x + label_width as u16;

        // Render label if present
        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        // Determine display text
        let display_text = if self.content.is_empty() && !self.focused {
            self.placeholder.as_str()
        } else {
            self.content.as_str()
        };

        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        buf.set_string(input_start, area.y, display_text, text_style);

        // Render cursor if focused
        if self.focused {
            let cursor_col = self.content[..self.cursor].chars().count() as u16;
            let cursor_x = input_start + cursor_col;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content[self.cursor..].chars().next().unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
