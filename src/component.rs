//! Component trait - Interface for UI components
//!
//! Each component keeps its own presentation state, maps events to Actions
//! and draws itself. Search state lives in the pipeline, not here.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` - map events to Actions
/// 2. `update` - apply an Action to local state
/// 3. `draw` - render into the given area
pub trait Component {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Map a key event to an Action without touching state
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Apply an Action; may return a follow-up Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
