//! Full-screen runner: terminal setup, the event loop, and teardown.

use std::io::{stdout, Stdout};
use std::time::Instant;

use chrono::{Local, NaiveDate};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;

use crate::app::App;
use crate::dialog::{DatePickerOptions, DialogOutcome, WheelDatePickerDialog};
use crate::error::{PickerError, Result};
use crate::log;
use crate::tui;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Open the date picker full-screen and run it until it closes.
///
/// `on_date_selected` fires once on confirm, `on_dismiss` once on any close.
/// Returns how the dialog ended. The terminal is restored on every path.
pub async fn open_date_picker(
    options: DatePickerOptions,
    on_date_selected: impl FnMut(NaiveDate) + 'static,
    on_dismiss: impl FnMut() + 'static,
) -> Result<DialogOutcome> {
    let today = Local::now().date_naive();
    let dialog = WheelDatePickerDialog::open(options, today, on_date_selected, on_dismiss)?;
    let mut app = App::new(dialog);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app).await;

    restore_terminal();
    terminal.show_cursor()?;

    result?;
    Ok(app.dialog.outcome().unwrap_or(DialogOutcome::Dismissed))
}

fn setup_terminal() -> Result<CrosstermTerminal> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    // Raw mode is on from here; undo it if the rest of setup fails
    restore_on_error(execute!(stdout, EnterAlternateScreen, EnableMouseCapture), restore_terminal)?;
    let backend = CrosstermBackend::new(stdout);
    restore_on_error(Terminal::new(backend), restore_terminal)
}

fn restore_on_error<T>(result: std::io::Result<T>, restore: impl FnOnce()) -> Result<T> {
    result.map_err(|e| {
        log::log(&format!("Terminal setup failed: {}", e));
        restore();
        e.into()
    })
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

/// Drive one dialog session on any backend until the dialog closes.
pub async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();

    while !app.should_quit() {
        terminal
            .draw(|frame| tui::ui::render(frame, app))
            .map_err(|e| PickerError::Terminal(e.to_string()))?;

        let wait = app.frame_interval();

        // Handle events with timeout so animations keep moving
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => app.handle_event(&event, Instant::now())?,
                    Some(Err(e)) => {
                        log::log(&format!("Event stream error: {}", e));
                        return Err(e.into());
                    }
                    None => {
                        log::log("Event stream closed");
                        app.dialog.cancel();
                    }
                }
            }
            _ = tokio::time::sleep(wait) => {}
        }

        app.tick(Instant::now())?;
    }

    Ok(())
}
