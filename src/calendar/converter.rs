//! Tabular Hijri arithmetic.
//!
//! Both calendars are mapped onto the Rata Die day count (0001-01-01
//! proleptic Gregorian = day 1), which is what chrono's `num_days_from_ce`
//! returns. The Hijri side uses the 30-year intercalation cycle with leap
//! years 2, 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 (the civil / Kuwaiti
//! variant with a Friday epoch).

use chrono::{Datelike, NaiveDate};

use crate::error::{CalendarError, CalendarResult};
use crate::models::hijri::{HijriDate, MAX_YEAR, MIN_YEAR};

/// RD of 1 Muharram 1 AH (Friday 622-07-19 proleptic Gregorian).
pub const ISLAMIC_EPOCH: i64 = 227_015;

const CYCLE_YEARS: i64 = 30;
const CYCLE_DAYS: i64 = 10_631;
const COMMON_YEAR_DAYS: i64 = 354;

pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(CYCLE_YEARS) < 11
}

/// Month length assuming `month` is already in 1..=12.
pub(crate) fn month_length(year: i32, month: u8) -> u8 {
    if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
        30
    } else {
        29
    }
}

pub fn days_in_month(year: i32, month: u8) -> CalendarResult<u8> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(month_length(year, month))
}

pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 355 } else { 354 }
}

pub(crate) fn validate(year: i32, month: u8, date: u8) -> CalendarResult<()> {
    let in_range = (MIN_YEAR..=MAX_YEAR).contains(&year)
        && (1..=12).contains(&month)
        && date >= 1
        && date <= month_length(year, month);
    if in_range {
        Ok(())
    } else {
        Err(CalendarError::InvalidDate { year, month, date })
    }
}

/// RD of a Hijri date. Inputs are not validated.
pub(crate) fn fixed_from_hijri(year: i32, month: u8, date: u8) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    ISLAMIC_EPOCH - 1
        + COMMON_YEAR_DAYS * (y - 1)
        + (3 + 11 * y).div_euclid(CYCLE_YEARS)
        + 29 * (m - 1)
        + m / 2
        + i64::from(date)
}

/// Inverse of [`fixed_from_hijri`]. Returns `(year, month, date)`.
pub(crate) fn hijri_from_fixed(rd: i64) -> (i64, u8, u8) {
    let year = (CYCLE_YEARS * (rd - ISLAMIC_EPOCH) + 10_646).div_euclid(CYCLE_DAYS);
    let year_start = ISLAMIC_EPOCH - 1
        + COMMON_YEAR_DAYS * (year - 1)
        + (3 + 11 * year).div_euclid(CYCLE_YEARS)
        + 1;
    let prior_days = rd - year_start;
    let month = ((11 * prior_days + 330).div_euclid(325)).clamp(1, 12);
    let month_start = year_start + 29 * (month - 1) + month / 2;
    let date = rd - month_start + 1;
    // month is clamped to 1..=12 and date to a single month's span
    (year, month as u8, date as u8)
}

/// RD 1 was a Monday, so `rd mod 7` counts from Sunday.
pub(crate) fn weekday_of_fixed(rd: i64) -> u8 {
    rd.rem_euclid(7) as u8
}

pub(crate) fn gregorian_from_fixed(rd: i64) -> CalendarResult<NaiveDate> {
    i32::try_from(rd)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(CalendarError::OutOfRange(rd))
}

pub fn gregorian_to_hijri(date: NaiveDate) -> CalendarResult<HijriDate> {
    let rd = i64::from(date.num_days_from_ce());
    if rd < ISLAMIC_EPOCH {
        return Err(CalendarError::BeforeEpoch(date));
    }
    let (year, month, day) = hijri_from_fixed(rd);
    let year = i32::try_from(year)
        .ok()
        .filter(|y| *y <= MAX_YEAR)
        .ok_or(CalendarError::OutOfRange(rd))?;
    HijriDate::new(year, month, day)
}

pub fn hijri_to_gregorian(year: i32, month: u8, date: u8) -> CalendarResult<NaiveDate> {
    HijriDate::new(year, month, date)?.to_gregorian()
}

/// Weekday index (0 = Sunday .. 6 = Saturday) of a Hijri date.
pub fn weekday(year: i32, month: u8, date: u8) -> CalendarResult<u8> {
    Ok(HijriDate::new(year, month, date)?.day())
}
