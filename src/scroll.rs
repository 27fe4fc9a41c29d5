//! Scroll-in-progress tracking for wheel columns.
//!
//! Terminals report mouse wheel notches as discrete events with no "scroll
//! ended" signal. A column counts as scrolling while notches keep arriving
//! within an idle window; the first poll after the window elapses reports
//! the in-progress to stopped transition, which is what triggers the snap.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut tracker = ScrollTracker::default();
//!
//! // On every mouse wheel notch:
//! tracker.record(Instant::now());
//!
//! // On every frame:
//! if tracker.poll_stopped(Instant::now()) {
//!     wheel.start_snap(now);
//! }
//! ```

use std::time::{Duration, Instant};

/// Default idle window after which scrolling is considered stopped
pub const DEFAULT_IDLE_MS: u64 = 150;

/// Tracks whether a scroll gesture is still in progress.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    /// Time of last scroll event
    last_event: Option<Instant>,
    /// Quiet period that ends a gesture
    idle: Duration,
    /// Whether a gesture is currently running
    in_progress: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_MS)
    }
}

impl ScrollTracker {
    /// Create a tracker that ends a gesture after `idle_ms` without events.
    pub fn new(idle_ms: u64) -> Self {
        Self {
            last_event: None,
            idle: Duration::from_millis(idle_ms),
            in_progress: false,
        }
    }

    /// Record a scroll event at `now`, starting or extending a gesture.
    pub fn record(&mut self, now: Instant) {
        self.last_event = Some(now);
        self.in_progress = true;
    }

    /// Whether a gesture is running at `now`.
    pub fn is_in_progress(&self, now: Instant) -> bool {
        match self.last_event {
            Some(last) if self.in_progress => now.saturating_duration_since(last) < self.idle,
            _ => false,
        }
    }

    /// Returns true exactly once per gesture, on the first poll after the
    /// idle window has elapsed.
    pub fn poll_stopped(&mut self, now: Instant) -> bool {
        if self.in_progress && !self.is_in_progress(now) {
            self.in_progress = false;
            true
        } else {
            false
        }
    }

    /// Whether a gesture has started and not yet been reported as stopped.
    pub fn is_pending(&self) -> bool {
        self.in_progress
    }

    /// Forget any running gesture without reporting a stop.
    pub fn reset(&mut self) {
        self.last_event = None;
        self.in_progress = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_within_idle_window() {
        let mut tracker = ScrollTracker::new(100);
        let start = Instant::now();

        tracker.record(start);
        assert!(tracker.is_in_progress(start + Duration::from_millis(50)));
        assert!(!tracker.poll_stopped(start + Duration::from_millis(50)));
    }

    #[test]
    fn test_stop_reported_once() {
        let mut tracker = ScrollTracker::new(100);
        let start = Instant::now();

        tracker.record(start);
        let later = start + Duration::from_millis(150);
        assert!(tracker.poll_stopped(later));
        assert!(!tracker.poll_stopped(later));
        assert!(!tracker.is_pending());
    }

    #[test]
    fn test_new_event_extends_gesture() {
        let mut tracker = ScrollTracker::new(100);
        let start = Instant::now();

        tracker.record(start);
        tracker.record(start + Duration::from_millis(80));
        assert!(!tracker.poll_stopped(start + Duration::from_millis(150)));
        assert!(tracker.poll_stopped(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_idle_tracker_never_stops() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.poll_stopped(Instant::now()));

        tracker.record(Instant::now());
        tracker.reset();
        assert!(!tracker.poll_stopped(Instant::now() + Duration::from_secs(1)));
    }
}
