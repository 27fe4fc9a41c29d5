//! Central event handler that routes terminal events to actions.

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

/// Central event handler for the application.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event (keyboard or mouse) and return an action.
    pub fn handle_event(app: &App, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(&app.dialog, *key),
            Event::Mouse(mouse) => handle_mouse_event(&app.interactions, *mouse),
            _ => Action::None,
        }
    }
}
