use ratatui::Frame;

use crate::app::App;
use super::components::render_date_dialog;

/// Render one frame, rebuilding the interaction registry.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let App { dialog, interactions } = app;

    interactions.clear();
    render_date_dialog(frame, area, dialog, interactions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::{Terminal, backend::TestBackend};

    use crate::dialog::{DatePickerOptions, WheelDatePickerDialog};
    use crate::events::Action;

    fn app_at(year: i32, month: u32, day: u32) -> App {
        let today = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let dialog =
            WheelDatePickerDialog::open(DatePickerOptions::default(), today, |_| {}, || {}).unwrap();
        App::new(dialog)
    }

    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn test_render_shows_title_wheels_and_buttons() {
        let mut app = app_at(2024, 5, 17);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let screen = rows(&terminal).join("\n");
        assert!(screen.contains("Select Date"));
        assert!(screen.contains("MAY"));
        assert!(screen.contains("2024"));
        assert!(screen.contains("17"));
        assert!(screen.contains("Cancel"));
        assert!(screen.contains("OK"));
    }

    #[test]
    fn test_render_registers_regions() {
        let mut app = app_at(2024, 5, 17);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        assert!(!app.interactions.is_empty());
        // Outside the popup dismisses, inside is swallowed
        assert_eq!(app.interactions.handle_click(0, 0), Action::Cancel);
        assert_ne!(app.interactions.handle_click(30, 10), Action::Cancel);
    }

    #[test]
    fn test_centered_row_holds_selection() {
        let mut app = app_at(2023, 11, 3);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let screen = rows(&terminal);
        let center = screen.iter().find(|row| row.contains("NOV")).unwrap();
        assert!(center.contains("2023"));
        assert!(center.contains('3'));
    }
}
