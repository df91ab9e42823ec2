//! Status bar and key hints
//!
//! The status bar holds at most one message at a time, so repeating a failing
//! action replaces the line instead of stacking a second one.

use crate::model::{Focus, Severity, UiStatus};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar needs from the app
pub struct StatusBarContext<'a> {
    pub status: &'a UiStatus,
    pub loading: bool,
    pub last_response_at: Option<DateTime<Local>>,
    /// Config problem reported at startup
    pub notice: Option<&'a str>,
}

/// Left side of the status bar
pub fn status_spans(ctx: &StatusBarContext) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    if ctx.loading {
        spans.push(Span::styled(
            " Loading… ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    if let Some(line) = ctx.status.status_line() {
        let color = match line.severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        };
        spans.push(Span::styled(
            format!("{} ", line.label),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(line.text, Style::default().fg(color)));
        spans.push(Span::styled(
            "  (Esc to dismiss)",
            Style::default().fg(Color::DarkGray),
        ));
    } else if let Some(notice) = ctx.notice {
        spans.push(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    } else if let UiStatus::Showing(recipes) = ctx.status {
        let noun = if recipes.len() == 1 { "recipe" } else { "recipes" };
        spans.push(Span::styled(
            format!("{} {}", recipes.len(), noun),
            Style::default().fg(Color::Green),
        ));
    }

    spans
}

/// Right side of the status bar
pub fn updated_text(last_response_at: Option<DateTime<Local>>) -> Option<String> {
    last_response_at.map(|at| format!("Updated {} ", at.format("%H:%M:%S")))
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, ctx: &StatusBarContext) {
    let updated = updated_text(ctx.last_response_at).unwrap_or_default();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(updated.chars().count() as u16),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(status_spans(ctx))), chunks[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(updated, Style::default().fg(Color::DarkGray))),
        chunks[1],
    );
}

/// Key hints for whichever area has focus
pub fn hint_pairs(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Input => &[
            ("Enter", "Search"),
            ("Tab", "Results"),
            ("F2-F4", "Browse"),
            ("Esc", "Dismiss"),
            ("F1", "Help"),
            ("Ctrl+C", "Quit"),
        ],
        Focus::Results => &[
            ("hjkl", "Move"),
            ("Enter", "Open"),
            ("/", "Search"),
            ("F2-F4", "Browse"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        Focus::Detail => &[
            ("j/k", "Scroll"),
            ("Esc", "Back"),
            ("/", "Search"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    }
}

pub fn draw_key_hints(frame: &mut Frame, area: Rect, focus: Focus) {
    let mut spans = vec![Span::styled(
        format!(" {} ", focus.name()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    for (key, description) in hint_pairs(focus) {
        spans.push(Span::styled(
            format!(" {}", key),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {} ", description),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::buffer_text;
    use crate::model::recipe::fixtures::recipe;
    use chrono::TimeZone;
    use ratatui::{backend::TestBackend, Terminal};

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn ctx(status: &UiStatus) -> StatusBarContext<'_> {
        StatusBarContext {
            status,
            loading: false,
            last_response_at: None,
            notice: None,
        }
    }

    #[test]
    fn test_idle_is_blank() {
        assert!(status_spans(&ctx(&UiStatus::Idle)).is_empty());
    }

    #[test]
    fn test_error_line() {
        let line = text(&status_spans(&ctx(&UiStatus::Error)));
        assert!(line.starts_with("Error: Input field empty"));
    }

    #[test]
    fn test_warning_line() {
        let line = text(&status_spans(&ctx(&UiStatus::Warning)));
        assert!(line.starts_with("Warning: No recipes found"));
    }

    #[test]
    fn test_fault_line_carries_detail() {
        let status = UiStatus::Fault("HTTP status 500".to_string());
        let line = text(&status_spans(&ctx(&status)));
        assert!(line.contains("Could not load recipes (HTTP status 500)"));
    }

    #[test]
    fn test_loading_indicator() {
        let status = UiStatus::Idle;
        let mut ctx = ctx(&status);
        ctx.loading = true;
        assert!(text(&status_spans(&ctx)).contains("Loading…"));
    }

    #[test]
    fn test_message_wins_over_notice() {
        let status = UiStatus::Warning;
        let mut ctx = ctx(&status);
        ctx.notice = Some("Config ignored");
        assert!(!text(&status_spans(&ctx)).contains("Config ignored"));

        let idle = UiStatus::Idle;
        ctx.status = &idle;
        assert_eq!(text(&status_spans(&ctx)), "Config ignored");
    }

    #[test]
    fn test_result_count() {
        let status = UiStatus::Showing(vec![recipe("1", "A"), recipe("2", "B")]);
        assert_eq!(text(&status_spans(&ctx(&status))), "2 recipes");
    }

    #[test]
    fn test_updated_text() {
        assert_eq!(updated_text(None), None);
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).unwrap();
        assert_eq!(updated_text(Some(at)).as_deref(), Some("Updated 09:05:07 "));
    }

    #[test]
    fn test_single_status_line_drawn() {
        let status = UiStatus::Error;
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        for _ in 0..2 {
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    draw_status_bar(frame, area, &ctx(&status));
                })
                .unwrap();
        }
        let drawn = buffer_text(terminal.backend().buffer());
        assert_eq!(drawn.matches("Input field empty").count(), 1);
    }
}
