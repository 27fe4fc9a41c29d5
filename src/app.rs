use std::time::{Duration, Instant};

use crossterm::event::Event;

use crate::dialog::WheelDatePickerDialog;
use crate::error::Result;
use crate::events::{Action, EventHandler};
use crate::log;
use crate::tui::interaction::InteractionRegistry;

/// Frame interval while a wheel is moving
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);
/// Frame interval while everything is at rest
pub const IDLE_FRAME: Duration = Duration::from_millis(250);

/// Application state: the open dialog plus this frame's mouse regions.
pub struct App {
    pub dialog: WheelDatePickerDialog,
    pub interactions: InteractionRegistry,
}

impl App {
    pub fn new(dialog: WheelDatePickerDialog) -> Self {
        Self {
            dialog,
            interactions: InteractionRegistry::new(),
        }
    }

    /// Translate a terminal event into an action and apply it.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Result<()> {
        let action = EventHandler::handle_event(self, event);
        if action != Action::None {
            log::log_event(&format!("{:?}", action));
        }
        self.dialog.dispatch(action, now)
    }

    /// Advance wheel animations.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        self.dialog.tick(now)
    }

    pub fn should_quit(&self) -> bool {
        self.dialog.is_closed()
    }

    /// How long the event loop may wait before the next frame
    pub fn frame_interval(&self) -> Duration {
        if self.dialog.is_animating() {
            ANIMATION_FRAME
        } else {
            IDLE_FRAME
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::dialog::{DatePickerOptions, DialogOutcome};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keyboard_flow_confirms_changed_date() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let picked = Rc::new(RefCell::new(None));
        let picked_cb = picked.clone();
        let dialog = WheelDatePickerDialog::open(
            DatePickerOptions::default(),
            today,
            move |date| *picked_cb.borrow_mut() = Some(date),
            || {},
        )
        .unwrap();
        let mut app = App::new(dialog);
        let now = Instant::now();
        let snap = app.dialog.month_wheel().metrics().snap_duration;

        app.handle_event(&press(KeyCode::Tab), now).unwrap();
        app.handle_event(&press(KeyCode::Down), now).unwrap();
        assert_eq!(app.frame_interval(), ANIMATION_FRAME);

        app.tick(now + snap).unwrap();
        assert_eq!(app.frame_interval(), IDLE_FRAME);

        app.handle_event(&press(KeyCode::Enter), now + snap).unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(*picked.borrow(), Some(expected));
        assert_eq!(app.dialog.outcome(), Some(DialogOutcome::Confirmed(expected)));
        assert!(app.should_quit());
    }

    #[test]
    fn test_escape_dismisses() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let dialog =
            WheelDatePickerDialog::open(DatePickerOptions::default(), today, |_| {}, || {}).unwrap();
        let mut app = App::new(dialog);

        app.handle_event(&press(KeyCode::Esc), Instant::now()).unwrap();
        assert_eq!(app.dialog.outcome(), Some(DialogOutcome::Dismissed));
    }
}
