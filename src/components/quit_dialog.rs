//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Quit confirmation dialog
#[derive(Debug, Default)]
pub struct QuitDialog {
    /// Set by the app while a request is still running
    pub loading: bool,
}

impl QuitDialog {
    fn content(&self) -> Vec<Line<'static>> {
        let mut content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Are you sure you want to quit?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        if self.loading {
            content.push(Line::from(Span::styled(
                "A request is still loading.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            content.push(Line::from(""));
        }
        content.push(Line::from(vec![
            Span::styled(
                " y ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Yes, quit  "),
            Span::styled(
                " n/Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("No, cancel"),
        ]));
        content
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 40, 7);

        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(self.content())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit? ")
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_text;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Char('y'), Some(Action::ForceQuit))]
    #[case(KeyCode::Enter, Some(Action::ForceQuit))]
    #[case(KeyCode::Char('n'), Some(Action::CloseModal))]
    #[case(KeyCode::Esc, Some(Action::CloseModal))]
    #[case(KeyCode::Char('x'), None)]
    fn test_keys(#[case] code: KeyCode, #[case] expected: Option<Action>) {
        let mut dialog = QuitDialog::default();
        let action = dialog
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, expected);
    }

    #[test]
    fn test_mentions_running_request() {
        let mut dialog = QuitDialog { loading: true };
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                dialog.draw(frame, area).unwrap();
            })
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("still loading"));
    }
}
