//! UI status state machine
//!
//! Exactly one status is active. Every triggering action resets to `Idle`
//! before its request goes out; the completion moves it on from there.

use super::recipe::Recipe;

/// What the output region currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiStatus {
    #[default]
    Idle,
    /// Submission with an empty input field
    Error,
    /// The service answered with the no-results sentinel
    Warning,
    /// Transport failure, malformed body or failed lookup
    Fault(String),
    Showing(Vec<Recipe>),
    ShowingDetail(Box<Recipe>),
}

/// Severity of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single status line to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub severity: Severity,
    pub label: &'static str,
    pub text: String,
}

impl UiStatus {
    /// Status line for the message states, `None` otherwise
    pub fn status_line(&self) -> Option<StatusLine> {
        match self {
            UiStatus::Error => Some(StatusLine {
                severity: Severity::Error,
                label: "Error:",
                text: "Input field empty".to_string(),
            }),
            UiStatus::Warning => Some(StatusLine {
                severity: Severity::Warning,
                label: "Warning:",
                text: "No recipes found".to_string(),
            }),
            UiStatus::Fault(detail) => Some(StatusLine {
                severity: Severity::Error,
                label: "Error:",
                text: format!("Could not load recipes ({})", detail),
            }),
            _ => None,
        }
    }

    /// Records to render as cards
    pub fn cards(&self) -> &[Recipe] {
        match self {
            UiStatus::Showing(recipes) => recipes.as_slice(),
            _ => &[],
        }
    }

    pub fn detail(&self) -> Option<&Recipe> {
        match self {
            UiStatus::ShowingDetail(recipe) => Some(recipe.as_ref()),
            _ => None,
        }
    }

    /// Error, warning and fault wait for the next triggering action or a dismissal
    pub fn is_message(&self) -> bool {
        matches!(self, UiStatus::Error | UiStatus::Warning | UiStatus::Fault(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::recipe::fixtures::recipe;

    #[test]
    fn test_status_lines() {
        assert_eq!(UiStatus::Idle.status_line(), None);
        assert_eq!(
            UiStatus::Error.status_line().unwrap().text,
            "Input field empty"
        );
        let warning = UiStatus::Warning.status_line().unwrap();
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.text, "No recipes found");

        let fault = UiStatus::Fault("timeout".to_string()).status_line().unwrap();
        assert_eq!(fault.severity, Severity::Error);
        assert!(fault.text.contains("timeout"));
    }

    #[test]
    fn test_cards_only_in_showing() {
        let recipes = vec![recipe("1", "A"), recipe("2", "B")];
        assert_eq!(UiStatus::Showing(recipes.clone()).cards().len(), 2);
        assert!(UiStatus::ShowingDetail(Box::new(recipes[0].clone()))
            .cards()
            .is_empty());
        assert!(UiStatus::Warning.cards().is_empty());
    }
}
