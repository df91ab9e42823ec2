//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod detail;
pub mod help_dialog;
pub mod layout;
pub mod nav_bar;
pub mod quit_dialog;
pub mod results;
pub mod search_bar;
pub mod status_bar;

pub use detail::DetailComponent;
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use nav_bar::NavBar;
pub use quit_dialog::QuitDialog;
pub use results::ResultsComponent;
pub use search_bar::SearchBar;
pub use status_bar::{draw_key_hints, draw_status_bar, StatusBarContext};

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::buffer::Buffer;

    /// Buffer contents as text, one line per row
    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
