//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App applies them.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick, drains finished requests
    Tick,
    Resize(u16, u16),
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Input Field
    // ─────────────────────────────────────────────────────────────────────────
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputClear,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // ─────────────────────────────────────────────────────────────────────────
    // Triggering Actions
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit the input field
    Submit,
    /// Navigation shortcut by identifier
    Navigate(String),
    /// Open the card at this index of the current grid
    OpenCard(usize),
    /// Open the highlighted card
    OpenSelected,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus & Grid Navigation
    // ─────────────────────────────────────────────────────────────────────────
    FocusInput,
    FocusResults,
    CardLeft,
    CardRight,
    CardUp,
    CardDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Detail Panel
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    CloseDetail,

    // ─────────────────────────────────────────────────────────────────────────
    // Status & Modals
    // ─────────────────────────────────────────────────────────────────────────
    DismissStatus,
    OpenQuitDialog,
    OpenHelp,
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::InputChar(c) => write!(f, "InputChar('{}')", c),
            Action::Navigate(id) => write!(f, "Navigate({})", id),
            Action::OpenCard(index) => write!(f, "OpenCard({})", index),
            other => write!(f, "{:?}", other),
        }
    }
}
