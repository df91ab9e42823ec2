//! Recipe detail panel
//!
//! Expanded view of one record: thumbnail link, name, area, category, the
//! assembled ingredient list and the instructions.

use crate::action::Action;
use crate::component::Component;
use crate::model::Recipe;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Detail panel component for displaying one recipe
pub struct DetailComponent {
    /// Current scroll offset in lines
    scroll: usize,
    /// Rendered lines for the current recipe
    content: Vec<Line<'static>>,
    /// Identifier of the recipe on display
    recipe_id: Option<String>,
}

impl Default for DetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailComponent {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            content: Vec::new(),
            recipe_id: None,
        }
    }

    /// Show a recipe, scrolled to the top of the panel
    pub fn set_recipe(&mut self, recipe: &Recipe) {
        self.content = detail_lines(recipe);
        self.recipe_id = Some(recipe.id.clone());
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.recipe_id = None;
        self.scroll = 0;
    }

    #[cfg(test)]
    pub fn recipe_id(&self) -> Option<&str> {
        self.recipe_id.as_deref()
    }

    #[cfg(test)]
    pub fn scroll(&self) -> usize {
        self.scroll
    }
}

fn heading(text: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(RULE, Style::default().fg(Color::DarkGray))),
    ]
}

/// All lines of the expanded panel
pub fn detail_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD | Modifier::ITALIC);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        recipe.thumbnail.clone(),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        recipe.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled("Area: ", label),
        Span::raw(recipe.area.clone()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Category: ", label),
        Span::raw(recipe.category.clone()),
    ]));
    lines.push(Line::from(""));

    lines.extend(heading("Ingredients:"));
    let ingredients = recipe.ingredient_list();
    if ingredients.is_empty() {
        lines.push(Line::from(Span::styled(
            "No ingredients listed.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(ingredients));
    }
    lines.push(Line::from(""));

    lines.extend(heading("Instructions:"));
    let paragraphs = recipe.instruction_paragraphs();
    if paragraphs.is_empty() {
        lines.push(Line::from(Span::styled(
            "No instructions provided.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, paragraph) in paragraphs.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(paragraph.to_string()));
    }

    lines
}

impl Component for DetailComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('d') if ctrl => Some(Action::PageDown),
            KeyCode::Char('u') if ctrl => Some(Action::PageUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::CloseDetail),
            KeyCode::Tab | KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusInput),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let max_scroll = self.content.len().saturating_sub(1);

        match action {
            Action::ScrollDown => {
                if self.scroll < max_scroll {
                    self.scroll += 1;
                }
            }
            Action::ScrollUp => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::PageDown => {
                self.scroll = (self.scroll + 20).min(max_scroll);
            }
            Action::PageUp => {
                self.scroll = self.scroll.saturating_sub(20);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let visible_height = area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(self.content.clone())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Recipe ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll as u16, 0));

        frame.render_widget(paragraph, area);

        let total = self.content.len();
        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}
