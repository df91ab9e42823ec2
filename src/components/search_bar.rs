//! Search input field
//!
//! Holds the text the user is typing. `read` is the single place the pipeline
//! gets its input from.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Type a dish name, e.g. Arrabiata";

#[derive(Debug, Default)]
pub struct SearchBar {
    value: String,
    /// Cursor position in chars
    cursor: usize,
    pub focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: true,
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current input with surrounding whitespace removed
    pub fn read(&self) -> String {
        self.value.trim().to_string()
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.value.remove(idx);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Display width of the text left of the cursor
    fn cursor_column(&self) -> u16 {
        self.value[..self.byte_index()].width() as u16
    }
}

impl Component for SearchBar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('u') if ctrl => Some(Action::InputClear),
            KeyCode::Char('a') if ctrl => Some(Action::CursorHome),
            KeyCode::Char('e') if ctrl => Some(Action::CursorEnd),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Action::InputChar(c))
            }
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Delete => Some(Action::InputDelete),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Home => Some(Action::CursorHome),
            KeyCode::End => Some(Action::CursorEnd),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusResults),
            KeyCode::Esc => Some(Action::DismissStatus),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::InputChar(c) => self.insert(c),
            Action::InputBackspace => self.backspace(),
            Action::InputDelete => self.delete(),
            Action::InputClear => self.clear(),
            Action::CursorLeft => self.move_left(),
            Action::CursorRight => self.move_right(),
            Action::CursorHome => self.move_home(),
            Action::CursorEnd => self.move_end(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let inner_width = area.width.saturating_sub(2);

        // Scroll horizontally so the cursor stays inside the box
        let cursor_col = self.cursor_column();
        let offset = cursor_col.saturating_sub(inner_width.saturating_sub(1));

        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.value.clone())
        };

        let paragraph = Paragraph::new(line)
            .scroll((0, offset))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Search recipes ")
                    .title_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(paragraph, area);

        if self.focused && area.height >= 3 {
            frame.set_cursor_position((area.x + 1 + cursor_col - offset, area.y + 1));
        }
        Ok(())
    }
}
