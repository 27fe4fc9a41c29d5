//! A wheel-style date picker for the terminal.
//!
//! Three scrolling wheels (day, month, year) sit in a modal dialog. Each wheel
//! resolves its centered item from the scroll position, reports changes, and
//! snaps to the nearest item when scrolling stops. The dialog keeps the
//! selected day valid for the selected month and year.
//!
//! ```rust,ignore
//! let outcome = wheel_datepicker::open_date_picker(
//!     DatePickerOptions::default(),
//!     |date| println!("{}", date),
//!     || {},
//! )
//! .await?;
//! ```

pub mod app;
pub mod config;
pub mod date;
pub mod dialog;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod runner;
pub mod scroll;
pub mod tui;

pub use dialog::{Column, DatePickerOptions, DialogOutcome, Focus, WheelDatePickerDialog};
pub use error::{PickerError, Result};
pub use picker::{Picker, WheelMetrics, WheelPicker};
pub use runner::open_date_picker;
