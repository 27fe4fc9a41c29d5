//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `wheel_column` - One scrolling wheel with center band and edge fade
//! - `date_dialog` - Modal dialog with title, three wheels, and buttons

mod date_dialog;
mod wheel_column;

// Re-export all render functions for use in ui.rs
pub use date_dialog::{render_date_dialog, POPUP_HEIGHT, POPUP_WIDTH, WHEEL_HEIGHT};
pub use wheel_column::{render_wheel_column, row_slot, RowSlot};
