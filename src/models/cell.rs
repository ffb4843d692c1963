use serde::Serialize;

use crate::error::{CalendarError, CalendarResult};
use crate::models::hijri::{HijriDate, MAX_YEAR, MIN_YEAR};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// The (year, month) a month view displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthAnchor {
    pub year: i32,
    pub month: u8,
}

impl MonthAnchor {
    pub fn new(year: i32, month: u8) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidDate {
                year,
                month,
                date: 1,
            });
        }
        Ok(Self { year, month })
    }

    /// The month before this one. Stays put at the first supported month.
    pub fn previous(self) -> Self {
        match self.month {
            1 if self.year <= MIN_YEAR => self,
            1 => Self {
                year: self.year - 1,
                month: 12,
            },
            m => Self {
                year: self.year,
                month: m - 1,
            },
        }
    }

    /// The month after this one. Stays put at the last supported month.
    pub fn next(self) -> Self {
        match self.month {
            12 if self.year >= MAX_YEAR => self,
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            m => Self {
                year: self.year,
                month: m + 1,
            },
        }
    }
}

impl From<&HijriDate> for MonthAnchor {
    fn from(date: &HijriDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

/// One position in a rendered month view. `month`/`year` name the month the
/// date belongs to, which differs from the anchor for spillover cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: u8,
    pub month: u8,
    pub year: i32,
    pub is_current_month: bool,
}

impl CalendarCell {
    pub fn is(&self, date: &HijriDate) -> bool {
        self.year == date.year() && self.month == date.month() && self.date == date.date()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub anchor: MonthAnchor,
    pub days_in_month: u8,
    /// Weekday (0 = Sunday) of day 1, which is also the leading spillover count.
    pub first_weekday: u8,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn leading(&self) -> &[CalendarCell] {
        &self.cells[..usize::from(self.first_weekday)]
    }

    pub fn current(&self) -> &[CalendarCell] {
        let start = usize::from(self.first_weekday);
        &self.cells[start..start + usize::from(self.days_in_month)]
    }

    pub fn trailing(&self) -> &[CalendarCell] {
        &self.cells[usize::from(self.first_weekday) + usize::from(self.days_in_month)..]
    }

    /// Grid index of `date` within the anchor month.
    pub fn position_of(&self, date: u8) -> Option<usize> {
        if date == 0 || date > self.days_in_month {
            return None;
        }
        Some(usize::from(self.first_weekday) + usize::from(date) - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_wraps_to_last_month_of_prior_year() {
        let anchor = MonthAnchor::new(1445, 1).expect("valid anchor");
        assert_eq!(anchor.previous(), MonthAnchor { year: 1444, month: 12 });
        assert_eq!(
            MonthAnchor::new(1445, 7).expect("valid anchor").previous(),
            MonthAnchor { year: 1445, month: 6 }
        );
    }

    #[test]
    fn next_wraps_to_first_month_of_following_year() {
        let anchor = MonthAnchor::new(1445, 12).expect("valid anchor");
        assert_eq!(anchor.next(), MonthAnchor { year: 1446, month: 1 });
        assert_eq!(anchor.next().previous(), anchor);
    }

    #[test]
    fn navigation_saturates_at_range_edges() {
        let first = MonthAnchor::new(MIN_YEAR, 1).expect("valid anchor");
        assert_eq!(first.previous(), first);
        let last = MonthAnchor::new(MAX_YEAR, 12).expect("valid anchor");
        assert_eq!(last.next(), last);
    }

    #[test]
    fn anchor_rejects_bad_month() {
        assert_eq!(MonthAnchor::new(1445, 13), Err(CalendarError::InvalidMonth(13)));
        assert_eq!(MonthAnchor::new(1445, 0), Err(CalendarError::InvalidMonth(0)));
        assert!(MonthAnchor::new(0, 1).is_err());
    }
}
