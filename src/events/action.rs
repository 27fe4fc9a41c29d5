//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that the dialog applies to its state.

use crate::dialog::{Column, Focus};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do
    None,

    // === Focus ===
    /// Move focus to the next column or button
    FocusNext,
    /// Move focus to the previous column or button
    FocusPrev,
    /// Focus a specific column or button
    Focus(Focus),

    // === Wheels ===
    /// Animate the focused wheel by n items
    StepFocused(i32),
    /// Scroll a wheel by mouse wheel notches (negative = up)
    ScrollColumn { column: Column, notches: i32 },
    /// Animate a clicked item onto the center band
    CenterItem { column: Column, index: usize },

    // === Buttons ===
    /// Activate the focused element (Enter)
    Activate,
    /// Report the selected date and close
    Confirm,
    /// Close without reporting a date
    Cancel,
}
