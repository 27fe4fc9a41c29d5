//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::dialog::WheelDatePickerDialog;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(dialog: &WheelDatePickerDialog, key: KeyEvent) -> Action {
    if dialog.is_closed() {
        return Action::None;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Cancel,
        KeyCode::Enter => Action::Activate,

        // Focus movement
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::FocusPrev,

        // Wheel stepping - vim style
        KeyCode::Up | KeyCode::Char('k') => Action::StepFocused(-1),
        KeyCode::Down | KeyCode::Char('j') => Action::StepFocused(1),
        KeyCode::PageUp => Action::StepFocused(-5),
        KeyCode::PageDown => Action::StepFocused(5),

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::dialog::DatePickerOptions;

    fn dialog() -> WheelDatePickerDialog {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        WheelDatePickerDialog::open(DatePickerOptions::default(), today, |_| {}, || {}).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        let dialog = dialog();
        assert_eq!(handle_key_event(&dialog, key(KeyCode::Esc)), Action::Cancel);
        assert_eq!(handle_key_event(&dialog, key(KeyCode::Enter)), Action::Activate);
        assert_eq!(handle_key_event(&dialog, key(KeyCode::Char('j'))), Action::StepFocused(1));
        assert_eq!(handle_key_event(&dialog, key(KeyCode::Up)), Action::StepFocused(-1));
        assert_eq!(handle_key_event(&dialog, key(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(handle_key_event(&dialog, key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let dialog = dialog();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&dialog, event), Action::Cancel);
    }

    #[test]
    fn test_closed_dialog_ignores_keys() {
        let mut dialog = dialog();
        dialog.cancel();
        assert_eq!(handle_key_event(&dialog, key(KeyCode::Enter)), Action::None);
    }
}
