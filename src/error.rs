//! Domain error types for the wheel date picker
//!
//! The picker has very few failure modes:
//! - `PickerError::EmptyRange` for a wheel configured without items
//! - `PickerError::InvalidDate` for a date that cannot exist
//! - terminal, config, and IO failures from the runner

use thiserror::Error;

/// Top-level error type for the date picker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Selectable range for {0} is empty")]
    EmptyRange(&'static str),

    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;
