//! Calendar helpers and the owned day/month/year selection.
//!
//! `DateSelection` keeps `1 <= day <= days_in_month(year, month)` after every
//! mutation. A month or year change marks the day range stale and resolves it
//! in the same call, so the clamped day is visible before anyone can read the
//! new maximum.

use chrono::{Datelike, NaiveDate};

use crate::error::{PickerError, Result};
use crate::log;

const SHORT_MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Number of days in a month (1-12) of a year, per chrono's calendar
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(31)
}

/// Three-letter uppercase month name, e.g. `JAN`
pub fn short_month_name(month: u32) -> String {
    SHORT_MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .map(|name| name.to_string())
        .unwrap_or_else(|| month.to_string())
}

/// Where the day range stands relative to the latest month/year change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRange {
    /// Day range matches month/year and has been handed out
    Idle,
    /// Month or year changed, max day not recomputed yet
    Stale,
    /// Max day recomputed and day clamped; range not yet rebuilt
    Clamped { max_day: u32 },
}

/// Selected day, month, and year of an open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSelection {
    day: u32,
    month: u32,
    year: i32,
    range: DayRange,
}

impl DateSelection {
    /// Build a selection, clamping month to 1-12 and day to the month.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let month = month.clamp(1, 12);
        let day = day.clamp(1, days_in_month(year, month));
        Self { day, month, year, range: DayRange::Idle }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn range(&self) -> DayRange {
        self.range
    }

    /// Maximum valid day for the selected month and year
    pub fn max_day(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Select a day, clamped into `1..=max_day`.
    pub fn set_day(&mut self, day: u32) {
        self.day = day.clamp(1, self.max_day());
    }

    /// Select a month and re-apply the day clamp.
    pub fn set_month(&mut self, month: u32) {
        let month = month.clamp(1, 12);
        if month != self.month {
            self.month = month;
            self.range = DayRange::Stale;
            self.resolve_range();
        }
    }

    /// Select a year and re-apply the day clamp.
    pub fn set_year(&mut self, year: i32) {
        if year != self.year {
            self.year = year;
            self.range = DayRange::Stale;
            self.resolve_range();
        }
    }

    /// Take the new max day after a month/year change, returning to idle.
    ///
    /// `None` when the day range has not changed since the last take.
    pub fn take_clamped(&mut self) -> Option<u32> {
        if self.range == DayRange::Stale {
            self.resolve_range();
        }
        match self.range {
            DayRange::Clamped { max_day } => {
                self.range = DayRange::Idle;
                Some(max_day)
            }
            _ => None,
        }
    }

    /// Build the calendar date for the current selection
    pub fn to_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(PickerError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }

    fn resolve_range(&mut self) {
        let max_day = self.max_day();
        if self.day > max_day {
            log::log(&format!(
                "Clamping day {} to {} for {:04}-{:02}",
                self.day, max_day, self.year, self.month
            ));
            self.day = max_day;
        }
        self.range = DayRange::Clamped { max_day };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn test_month_lengths() {
        let lengths: Vec<u32> = (1..=12).map(|month| days_in_month(2023, month)).collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(days_in_month(1999, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn test_clamp_holds_for_all_months() {
        for year in [2023, 2024] {
            for month in 1..=12 {
                let mut selection = DateSelection::new(2024, 1, 31);
                selection.set_year(year);
                selection.set_month(month);
                assert!(selection.day() >= 1);
                assert!(selection.day() <= days_in_month(year, month));
                assert!(selection.to_date().is_ok());
            }
        }
    }

    #[test]
    fn test_day_31_clamps_to_new_max() {
        let mut selection = DateSelection::new(2023, 1, 31);
        selection.set_month(4);
        assert_eq!(selection.day(), 30);

        let mut selection = DateSelection::new(2023, 3, 31);
        selection.set_month(2);
        assert_eq!(selection.day(), 28);

        let mut selection = DateSelection::new(2024, 2, 29);
        selection.set_year(2023);
        assert_eq!(selection.day(), 28);
    }

    #[test]
    fn test_range_state_machine() {
        let mut selection = DateSelection::new(2024, 1, 31);
        assert_eq!(selection.range(), DayRange::Idle);
        assert_eq!(selection.take_clamped(), None);

        selection.set_month(2);
        assert_eq!(selection.range(), DayRange::Clamped { max_day: 29 });
        assert_eq!(selection.take_clamped(), Some(29));
        assert_eq!(selection.range(), DayRange::Idle);

        // Same month again is not a change
        selection.set_month(2);
        assert_eq!(selection.take_clamped(), None);
    }

    #[test]
    fn test_set_day_clamped() {
        let mut selection = DateSelection::new(2023, 2, 1);
        selection.set_day(31);
        assert_eq!(selection.day(), 28);
        selection.set_day(0);
        assert_eq!(selection.day(), 1);
    }

    #[test]
    fn test_short_month_names() {
        assert_eq!(short_month_name(1), "JAN");
        assert_eq!(short_month_name(12), "DEC");
        assert_eq!(short_month_name(13), "13");
        assert_eq!(short_month_name(0), "0");
    }
}
