//! Component trait - Interface for UI components
//!
//! Each screen and dialog encapsulates its own state, key handling and
//! rendering. Components talk to the rest of the app through Actions
//! rather than reaching into each other's state.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` - translate a key press into an Action
/// 2. `update` - apply an Action to local state, optionally emitting another
/// 3. `draw` - render
pub trait Component {
    /// Called once before the first draw
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    ///
    /// Should not change state beyond what is purely local to input
    /// handling; state changes belong in `update`.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame. No state changes here.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
