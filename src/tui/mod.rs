//! Terminal rendering: theme, components, and mouse hit testing.

pub mod components;
pub mod interaction;
pub mod theme;
pub mod ui;
