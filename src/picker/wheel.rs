//! Wheel picker: a scrolling column with one centered, selected item.
//!
//! The scroll position is a continuous pixel offset where item `i` sits
//! exactly on the center anchor at `scroll == i * item_height`. Every position
//! update re-resolves the centered item and reports it only when the value
//! changes, so a continuous scroll produces one notification per item crossed.
//! When a scroll gesture stops, the column animates to the nearest item.

use std::fmt;
use std::time::{Duration, Instant};

use crate::error::{PickerError, Result};
use crate::log;
use crate::scroll::{ScrollTracker, DEFAULT_IDLE_MS};

use super::Picker;

/// Logical height of one item
pub const DEFAULT_ITEM_HEIGHT: f32 = 48.0;
/// Pixels moved per mouse wheel notch; one notch moves one item
pub const DEFAULT_SCROLL_STEP: f32 = DEFAULT_ITEM_HEIGHT;
/// Length of the snap animation
pub const DEFAULT_SNAP_MS: u64 = 180;

/// Geometry and timing shared by the wheels of one dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelMetrics {
    pub item_height: f32,
    pub scroll_step: f32,
    pub snap_duration: Duration,
    pub scroll_idle_ms: u64,
}

impl Default for WheelMetrics {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            scroll_step: DEFAULT_SCROLL_STEP,
            snap_duration: Duration::from_millis(DEFAULT_SNAP_MS),
            scroll_idle_ms: DEFAULT_IDLE_MS,
        }
    }
}

/// Scroll position as (topmost item at or above the anchor, pixels past it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub first_index: usize,
    pub offset: f32,
}

/// Resolve the centered index for a scroll position.
///
/// `first_index + round(offset / item_height)`, rounding half up, clamped to
/// `0..len`. Positions outside the list resolve to the nearest end. Only an
/// empty list has no centered index.
pub fn resolve_center_index(
    first_index: usize,
    offset: f32,
    item_height: f32,
    len: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let steps = if item_height > 0.0 {
        (offset / item_height).round() as i64
    } else {
        0
    };
    let raw = (first_index as i64).saturating_add(steps);
    Some(raw.clamp(0, len as i64 - 1) as usize)
}

/// Animation from one scroll offset to another.
#[derive(Debug, Clone, Copy)]
struct SnapAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl SnapAnimation {
    /// Offset at `now`, and whether the animation has finished.
    fn value_at(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// A vertically scrolling column over an ordered list of values.
pub struct WheelPicker<T> {
    label: &'static str,
    items: Vec<T>,
    formatter: Box<dyn Fn(&T) -> String>,
    metrics: WheelMetrics,
    scroll: f32,
    /// Last reported centered value
    resolved: T,
    tracker: ScrollTracker,
    snap: Option<SnapAnimation>,
}

impl<T: fmt::Debug> fmt::Debug for WheelPicker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WheelPicker")
            .field("label", &self.label)
            .field("len", &self.items.len())
            .field("scroll", &self.scroll)
            .field("resolved", &self.resolved)
            .finish()
    }
}

impl<T: Clone + PartialEq + fmt::Display + 'static> WheelPicker<T> {
    /// Create a wheel that displays items with their `Display` form.
    pub fn new(label: &'static str, items: Vec<T>, selected: &T, metrics: WheelMetrics) -> Result<Self> {
        Self::with_formatter(label, items, selected, |item: &T| item.to_string(), metrics)
    }
}

impl<T: Clone + PartialEq> WheelPicker<T> {
    /// Create a wheel with a custom display formatter.
    ///
    /// Starts centered on `selected`, or on the first item when `selected`
    /// is not in the list.
    pub fn with_formatter(
        label: &'static str,
        items: Vec<T>,
        selected: &T,
        formatter: impl Fn(&T) -> String + 'static,
        metrics: WheelMetrics,
    ) -> Result<Self> {
        let index = items.iter().position(|item| item == selected).unwrap_or(0);
        let resolved = items.get(index).cloned().ok_or(PickerError::EmptyRange(label))?;

        Ok(Self {
            label,
            items,
            formatter: Box::new(formatter),
            metrics,
            scroll: index as f32 * metrics.item_height,
            resolved,
            tracker: ScrollTracker::new(metrics.scroll_idle_ms),
            snap: None,
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn metrics(&self) -> WheelMetrics {
        self.metrics
    }

    /// Display text for an item
    pub fn format(&self, item: &T) -> String {
        (self.formatter)(item)
    }

    /// Current scroll offset in pixels
    pub fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    /// Current scroll position split into (first index, offset)
    pub fn position(&self) -> ScrollPosition {
        let height = self.metrics.item_height;
        let first_index = if height > 0.0 {
            (self.scroll / height).floor().max(0.0) as usize
        } else {
            0
        };
        ScrollPosition {
            first_index,
            offset: self.scroll - first_index as f32 * height,
        }
    }

    /// Index of the item currently on the center anchor
    pub fn centered_index(&self) -> usize {
        let pos = self.position();
        resolve_center_index(pos.first_index, pos.offset, self.metrics.item_height, self.items.len())
            .unwrap_or(0)
    }

    /// The item last reported as centered
    pub fn centered_item(&self) -> &T {
        &self.resolved
    }

    /// Distance of an item from the center anchor, in items
    pub fn relative_position(&self, index: usize) -> f32 {
        let height = self.metrics.item_height;
        if height > 0.0 {
            (index as f32 * height - self.scroll) / height
        } else {
            0.0
        }
    }

    /// Item drawn `row` rows away from the center row, if any
    pub fn index_at_relative_row(&self, row: i32) -> Option<usize> {
        let height = self.metrics.item_height;
        let center = if height > 0.0 { self.scroll / height } else { 0.0 };
        let index = (center + row as f32).round();
        if index < 0.0 || index >= self.items.len() as f32 {
            None
        } else {
            Some(index as usize)
        }
    }

    /// Whether a scroll gesture or snap animation is still running
    pub fn is_animating(&self) -> bool {
        self.snap.is_some() || self.tracker.is_pending()
    }

    /// Scroll by a pixel delta as part of a user gesture.
    ///
    /// Cancels any running snap. Returns the newly centered item if it changed.
    pub fn scroll_by(&mut self, delta: f32, now: Instant) -> Option<T> {
        self.snap = None;
        self.tracker.record(now);
        self.update_position(self.scroll + delta)
    }

    /// Scroll by whole mouse wheel notches.
    pub fn scroll_notches(&mut self, notches: i32, now: Instant) -> Option<T> {
        self.scroll_by(notches as f32 * self.metrics.scroll_step, now)
    }

    /// Animate to the item `delta` positions away from the current target.
    pub fn step(&mut self, delta: i32, now: Instant) {
        let base = match self.snap {
            Some(snap) => self.index_for_offset(snap.to),
            None => self.centered_index(),
        };
        let target = (base as i64 + delta as i64).max(0) as usize;
        self.animate_to_index(target, now);
    }

    /// Animate the given item onto the center anchor.
    pub fn scroll_to_index(&mut self, index: usize, now: Instant) {
        self.animate_to_index(index, now);
    }

    /// Move the given item onto the center anchor without animating.
    pub fn jump_to_index(&mut self, index: usize) -> Option<T> {
        self.snap = None;
        self.tracker.reset();
        let index = index.min(self.items.len().saturating_sub(1));
        self.update_position(index as f32 * self.metrics.item_height)
    }

    /// Start the snap to the nearest item boundary.
    pub fn start_snap(&mut self, now: Instant) {
        let target = self.centered_index();
        log::log(&format!("{} wheel snapping to index {}", self.label, target));
        self.animate_to_index(target, now);
    }

    /// Advance gesture tracking and the snap animation to `now`.
    ///
    /// Returns the newly centered item if it changed.
    pub fn tick(&mut self, now: Instant) -> Option<T> {
        if self.tracker.poll_stopped(now) {
            self.start_snap(now);
        }

        let snap = self.snap?;
        let (value, done) = snap.value_at(now);
        if done {
            self.snap = None;
        }
        self.update_position(value)
    }

    /// Replace the items, centering `selected` or the nearest valid index.
    pub fn set_items(&mut self, items: Vec<T>, selected: &T) -> Result<()> {
        if items.is_empty() {
            return Err(PickerError::EmptyRange(self.label));
        }
        let index = items
            .iter()
            .position(|item| item == selected)
            .unwrap_or_else(|| self.centered_index().min(items.len() - 1));

        self.items = items;
        self.snap = None;
        self.tracker.reset();
        self.scroll = index as f32 * self.metrics.item_height;
        self.resolved = self.items[index].clone();
        Ok(())
    }

    fn animate_to_index(&mut self, index: usize, now: Instant) {
        let index = index.min(self.items.len().saturating_sub(1));
        let to = index as f32 * self.metrics.item_height;
        self.tracker.reset();
        if (to - self.scroll).abs() < f32::EPSILON {
            self.scroll = to;
            self.snap = None;
            return;
        }
        self.snap = Some(SnapAnimation {
            from: self.scroll,
            to,
            start: now,
            duration: self.metrics.snap_duration,
        });
    }

    fn index_for_offset(&self, offset: f32) -> usize {
        let height = self.metrics.item_height;
        let first_index = if height > 0.0 { (offset / height).floor().max(0.0) as usize } else { 0 };
        let rest = offset - first_index as f32 * height;
        resolve_center_index(first_index, rest, height, self.items.len()).unwrap_or(0)
    }

    /// Set the scroll offset, clamped to the list, and re-resolve the center.
    fn update_position(&mut self, scroll: f32) -> Option<T> {
        let max = self.items.len().saturating_sub(1) as f32 * self.metrics.item_height;
        self.scroll = scroll.clamp(0.0, max);

        let item = self.items.get(self.centered_index())?;
        if *item == self.resolved {
            return None;
        }
        self.resolved = item.clone();
        log::log_event(&format!("{} wheel centered on {}", self.label, self.format(item)));
        Some(item.clone())
    }
}

impl<T: Clone + PartialEq> Picker for WheelPicker<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        &self.items
    }

    fn selected_index(&self) -> usize {
        self.centered_index()
    }
}
