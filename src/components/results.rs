//! Result card grid
//!
//! One card per record with thumbnail link, name, area and category. The grid
//! reflows between one and three columns and scrolls by whole card rows.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{card_rects, grid_columns, visible_rows};
use crate::model::Recipe;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug)]
pub struct ResultsComponent {
    /// Highlighted card
    pub selected: usize,
    /// Number of cards in the current grid
    len: usize,
    /// Columns used by the last draw
    columns: usize,
    /// First visible card row
    first_row: usize,
    /// Card areas from the last draw, for mouse hits
    card_areas: Vec<(usize, Rect)>,
}

impl Default for ResultsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self {
            selected: 0,
            len: 0,
            columns: 1,
            first_row: 0,
            card_areas: Vec::new(),
        }
    }

    /// Start over for a new result set
    pub fn reset(&mut self, len: usize) {
        self.selected = 0;
        self.first_row = 0;
        self.len = len;
        self.card_areas.clear();
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let target = self.selected + self.columns;
        if target < self.len {
            self.selected = target;
        } else if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.columns);
    }

    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(column, row)))
            .map(|(index, _)| *index)
    }

    /// Keep the selected card's row on screen
    fn scroll_to_selection(&mut self, rows: usize) {
        let selected_row = self.selected / self.columns;
        if selected_row < self.first_row {
            self.first_row = selected_row;
        } else if selected_row >= self.first_row + rows {
            self.first_row = selected_row + 1 - rows;
        }
    }

    /// Draw the grid for `recipes`
    pub fn render(&mut self, frame: &mut Frame, area: Rect, recipes: &[Recipe], focused: bool) {
        self.len = recipes.len();
        if self.selected >= self.len {
            self.selected = self.len.saturating_sub(1);
        }
        self.columns = grid_columns(area.width);
        self.scroll_to_selection(visible_rows(area.height));
        self.card_areas = card_rects(area, recipes.len(), self.columns, self.first_row);

        for &(index, rect) in &self.card_areas {
            let highlighted = focused && index == self.selected;
            let border_style = if highlighted {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let card = Paragraph::new(card_lines(&recipes[index], rect.width.saturating_sub(2)))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border_style),
                );
            frame.render_widget(card, rect);
        }
    }
}

/// Text lines of one card, truncated to `width`
pub fn card_lines(recipe: &Recipe, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    let label = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC);

    vec![
        Line::from(Span::styled(
            truncate(&recipe.thumbnail, width),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(
            truncate(&recipe.name, width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(vec![
            Span::styled("Area: ", label),
            Span::raw(truncate(&recipe.area, width.saturating_sub(6))),
        ]),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(truncate(&recipe.category, width.saturating_sub(10))),
        ]),
    ]
}

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl Component for ResultsComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('l') | KeyCode::Right => Some(Action::CardRight),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::CardLeft),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CardDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CardUp),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::OpenSelected),
            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusInput),
            KeyCode::Esc => Some(Action::DismissStatus),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self.card_at(mouse.column, mouse.row).map(Action::OpenCard))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::CardRight => self.move_right(),
            Action::CardLeft => self.move_left(),
            Action::CardDown => self.move_down(),
            Action::CardUp => self.move_up(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawn through `render`, which needs the current records
        Ok(())
    }
}
