//! Generic picker module
//!
//! Provides the list-selection trait and the wheel picker that implements it
//! with scroll-offset resolution and snap animation.

mod traits;
mod wheel;

pub use traits::Picker;
pub use wheel::{
    ScrollPosition, WheelMetrics, WheelPicker, resolve_center_index, DEFAULT_ITEM_HEIGHT,
    DEFAULT_SCROLL_STEP, DEFAULT_SNAP_MS,
};
