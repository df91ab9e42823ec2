//! Navigation shortcut bar

use crate::action::Action;
use crate::component::Component;
use crate::model::Shortcut;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Default)]
pub struct NavBar {
    /// Clickable area of each shortcut from the last draw
    hit_areas: Vec<(Rect, Shortcut)>,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shortcut_at(&self, column: u16, row: u16) -> Option<Shortcut> {
        self.hit_areas
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, shortcut)| *shortcut)
    }
}

/// Key label and text of one shortcut, as drawn
fn shortcut_parts(shortcut: Shortcut) -> (String, String) {
    (
        format!(" F{} ", shortcut.function_key()),
        format!("{}  ", shortcut.label()),
    )
}

impl Component for NavBar {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        Ok(self
            .shortcut_at(mouse.column, mouse.row)
            .map(|s| Action::Navigate(s.id().to_string())))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.hit_areas.clear();

        let mut spans = Vec::new();
        let mut x = area.x;

        for shortcut in Shortcut::ALL {
            let (key, label) = shortcut_parts(shortcut);
            let width = (key.width() + label.width()) as u16;
            let clipped = width.min((area.x + area.width).saturating_sub(x));
            if clipped > 0 {
                self.hit_areas
                    .push((Rect::new(x, area.y, clipped, 1), shortcut));
            }
            x = x.saturating_add(width);

            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(label));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
        Ok(())
    }
}
