//! Event handling module for keyboard and mouse events.
//!
//! Handlers translate crossterm events into `Action`s; the dialog applies
//! them to its state.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
