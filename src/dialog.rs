//! The wheel date picker dialog.
//!
//! Owns the three wheels and the `DateSelection`. Wheel position updates flow
//! back in through `apply_day`/`apply_month`/`apply_year`, which enforce the
//! day clamp and rebuild the day wheel's range before anything else reads it.

use std::ops::RangeInclusive;
use std::time::Instant;

use chrono::NaiveDate;

use crate::date::{short_month_name, DateSelection};
use crate::error::{PickerError, Result};
use crate::events::Action;
use crate::log;
use crate::picker::{Picker, WheelMetrics, WheelPicker};

/// One of the three wheel columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Day,
    Month,
    Year,
}

/// Element holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Wheel(Column),
    Cancel,
    Ok,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Wheel(Column::Day),
        Focus::Wheel(Column::Month),
        Focus::Wheel(Column::Year),
        Focus::Cancel,
        Focus::Ok,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// How a closed dialog ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed(NaiveDate),
    Dismissed,
}

/// Caller configuration for a dialog
#[derive(Debug, Clone)]
pub struct DatePickerOptions {
    pub title: String,
    pub years: RangeInclusive<i32>,
    pub ok_label: String,
    pub cancel_label: String,
    pub metrics: WheelMetrics,
}

impl Default for DatePickerOptions {
    fn default() -> Self {
        Self {
            title: "Select Date".to_string(),
            years: 2010..=2100,
            ok_label: "OK".to_string(),
            cancel_label: "Cancel".to_string(),
            metrics: WheelMetrics::default(),
        }
    }
}

/// A modal day/month/year picker.
pub struct WheelDatePickerDialog {
    title: String,
    ok_label: String,
    cancel_label: String,
    selection: DateSelection,
    day_wheel: WheelPicker<u32>,
    month_wheel: WheelPicker<u32>,
    year_wheel: WheelPicker<i32>,
    focus: Focus,
    on_date_selected: Box<dyn FnMut(NaiveDate)>,
    on_dismiss: Box<dyn FnMut()>,
    outcome: Option<DialogOutcome>,
}

impl WheelDatePickerDialog {
    /// Open a dialog initialized to `today`.
    ///
    /// Fails with `PickerError::EmptyRange` when the year range is empty.
    pub fn open(
        options: DatePickerOptions,
        today: NaiveDate,
        on_date_selected: impl FnMut(NaiveDate) + 'static,
        on_dismiss: impl FnMut() + 'static,
    ) -> Result<Self> {
        let DatePickerOptions { title, years, ok_label, cancel_label, metrics } = options;
        if years.is_empty() {
            return Err(PickerError::EmptyRange("year"));
        }

        let mut selection = DateSelection::from_date(today);
        let year_wheel = WheelPicker::new("year", years.clone().collect(), &selection.year(), metrics)?;
        // Out-of-range years fall back to the wheel's first item
        selection.set_year(*year_wheel.centered_item());
        selection.take_clamped();

        let month_wheel = WheelPicker::with_formatter(
            "month",
            (1..=12).collect(),
            &selection.month(),
            |month| short_month_name(*month),
            metrics,
        )?;
        let day_wheel = WheelPicker::new("day", (1..=selection.max_day()).collect(), &selection.day(), metrics)?;

        log::log_event(&format!(
            "Opened date picker \"{}\" years {}..={} at {:04}-{:02}-{:02}",
            title,
            years.start(),
            years.end(),
            selection.year(),
            selection.month(),
            selection.day()
        ));

        Ok(Self {
            title,
            ok_label,
            cancel_label,
            selection,
            day_wheel,
            month_wheel,
            year_wheel,
            focus: Focus::Wheel(Column::Day),
            on_date_selected: Box::new(on_date_selected),
            on_dismiss: Box::new(on_dismiss),
            outcome: None,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn ok_label(&self) -> &str {
        &self.ok_label
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn day_wheel(&self) -> &WheelPicker<u32> {
        &self.day_wheel
    }

    pub fn month_wheel(&self) -> &WheelPicker<u32> {
        &self.month_wheel
    }

    pub fn year_wheel(&self) -> &WheelPicker<i32> {
        &self.year_wheel
    }

    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.outcome
    }

    pub fn is_closed(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether any wheel still needs frames
    pub fn is_animating(&self) -> bool {
        self.day_wheel.is_animating() || self.month_wheel.is_animating() || self.year_wheel.is_animating()
    }

    /// Day wheel reported a new centered day
    pub fn apply_day(&mut self, day: u32) {
        self.selection.set_day(day);
    }

    /// Month wheel reported a new centered month
    pub fn apply_month(&mut self, month: u32) -> Result<()> {
        self.selection.set_month(month);
        self.sync_day_range()
    }

    /// Year wheel reported a new centered year
    pub fn apply_year(&mut self, year: i32) -> Result<()> {
        self.selection.set_year(year);
        self.sync_day_range()
    }

    /// Rebuild the day wheel once the clamp has run.
    fn sync_day_range(&mut self) -> Result<()> {
        if let Some(max_day) = self.selection.take_clamped() {
            if self.day_wheel.len() != max_day as usize {
                self.day_wheel
                    .set_items((1..=max_day).collect(), &self.selection.day())?;
            }
        }
        Ok(())
    }

    /// Advance all wheels to `now`, applying any selection changes.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        if let Some(day) = self.day_wheel.tick(now) {
            self.apply_day(day);
        }
        if let Some(month) = self.month_wheel.tick(now) {
            self.apply_month(month)?;
        }
        if let Some(year) = self.year_wheel.tick(now) {
            self.apply_year(year)?;
        }
        Ok(())
    }

    /// Apply a user action. Ignored once the dialog is closed.
    pub fn dispatch(&mut self, action: Action, now: Instant) -> Result<()> {
        if self.is_closed() {
            return Ok(());
        }

        match action {
            Action::None => {}
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Focus(focus) => self.focus = focus,
            Action::StepFocused(delta) => {
                if let Focus::Wheel(column) = self.focus {
                    self.step_column(column, delta, now);
                }
            }
            Action::ScrollColumn { column, notches } => {
                self.focus = Focus::Wheel(column);
                self.scroll_column(column, notches, now)?;
            }
            Action::CenterItem { column, index } => {
                self.focus = Focus::Wheel(column);
                match column {
                    Column::Day => self.day_wheel.scroll_to_index(index, now),
                    Column::Month => self.month_wheel.scroll_to_index(index, now),
                    Column::Year => self.year_wheel.scroll_to_index(index, now),
                }
            }
            Action::Activate => match self.focus {
                Focus::Cancel => self.cancel(),
                Focus::Ok | Focus::Wheel(_) => self.confirm()?,
            },
            Action::Confirm => self.confirm()?,
            Action::Cancel => self.cancel(),
        }
        Ok(())
    }

    fn step_column(&mut self, column: Column, delta: i32, now: Instant) {
        match column {
            Column::Day => self.day_wheel.step(delta, now),
            Column::Month => self.month_wheel.step(delta, now),
            Column::Year => self.year_wheel.step(delta, now),
        }
    }

    fn scroll_column(&mut self, column: Column, notches: i32, now: Instant) -> Result<()> {
        match column {
            Column::Day => {
                if let Some(day) = self.day_wheel.scroll_notches(notches, now) {
                    self.apply_day(day);
                }
            }
            Column::Month => {
                if let Some(month) = self.month_wheel.scroll_notches(notches, now) {
                    self.apply_month(month)?;
                }
            }
            Column::Year => {
                if let Some(year) = self.year_wheel.scroll_notches(notches, now) {
                    self.apply_year(year)?;
                }
            }
        }
        Ok(())
    }

    /// Report the selected date, then dismiss.
    pub fn confirm(&mut self) -> Result<()> {
        if self.is_closed() {
            return Ok(());
        }
        let date = self.selection.to_date()?;
        log::log_event(&format!("Date confirmed: {}", date));
        self.outcome = Some(DialogOutcome::Confirmed(date));
        (self.on_date_selected)(date);
        (self.on_dismiss)();
        Ok(())
    }

    /// Dismiss without reporting a date.
    pub fn cancel(&mut self) {
        if self.is_closed() {
            return;
        }
        log::log_event("Date picker dismissed");
        self.outcome = Some(DialogOutcome::Dismissed);
        (self.on_dismiss)();
    }
}
