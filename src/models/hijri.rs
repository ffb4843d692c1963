use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::calendar::clock::Clock;
use crate::calendar::converter;
use crate::error::{CalendarError, CalendarResult};

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Islamic month names in English (index 0 = Muharram = month 1)
const MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const MONTH_NAMES_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// The other supported locale, used for the secondary line under a title.
    pub fn alternate(&self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            _ => Err(CalendarError::UnknownLocale(s.to_string())),
        }
    }
}

pub fn month_name(month: u8, locale: Locale) -> CalendarResult<&'static str> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    let idx = usize::from(month - 1);
    Ok(match locale {
        Locale::En => MONTH_NAMES_EN[idx],
        Locale::Ar => MONTH_NAMES_AR[idx],
    })
}

/// A validated day in the tabular Hijri calendar.
///
/// `day` is the weekday (0 = Sunday .. 6 = Saturday) of the equivalent
/// Gregorian date and is derived at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HijriDate {
    year: i32,
    month: u8,
    date: u8,
    day: u8,
}

impl HijriDate {
    pub fn new(year: i32, month: u8, date: u8) -> CalendarResult<Self> {
        converter::validate(year, month, date)?;
        let day = converter::weekday_of_fixed(converter::fixed_from_hijri(year, month, date));
        Ok(Self {
            year,
            month,
            date,
            day,
        })
    }

    /// Today's Hijri date according to `clock`.
    pub fn today<C: Clock + ?Sized>(clock: &C) -> CalendarResult<Self> {
        converter::gregorian_to_hijri(clock.today())
    }

    /// Today's Hijri date after shifting the Gregorian date by `offset_days`,
    /// for users whose local sighting runs a day ahead of or behind the table.
    pub fn today_with_offset<C: Clock + ?Sized>(clock: &C, offset_days: i32) -> CalendarResult<Self> {
        let today = clock.today();
        let adjusted = today
            .checked_add_signed(Duration::days(i64::from(offset_days)))
            .ok_or_else(|| {
                CalendarError::OutOfRange(
                    i64::from(today.num_days_from_ce()) + i64::from(offset_days),
                )
            })?;
        converter::gregorian_to_hijri(adjusted)
    }

    pub fn from_gregorian(date: NaiveDate) -> CalendarResult<Self> {
        converter::gregorian_to_hijri(date)
    }

    pub fn to_gregorian(&self) -> CalendarResult<NaiveDate> {
        converter::gregorian_from_fixed(self.fixed())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn date(&self) -> u8 {
        self.date
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn days_in_month(&self) -> u8 {
        converter::month_length(self.year, self.month)
    }

    pub fn is_leap_year(&self) -> bool {
        converter::is_leap_year(self.year)
    }

    pub fn month_name(&self, locale: Locale) -> &'static str {
        let idx = usize::from(self.month - 1);
        match locale {
            Locale::En => MONTH_NAMES_EN[idx],
            Locale::Ar => MONTH_NAMES_AR[idx],
        }
    }

    /// "9 Ramadan 1445" style label.
    pub fn formatted(&self, locale: Locale) -> String {
        format!("{} {} {}", self.date, self.month_name(locale), self.year)
    }

    /// Day count on the Rata Die scale shared with the Gregorian side.
    pub(crate) fn fixed(&self) -> i64 {
        converter::fixed_from_hijri(self.year, self.month, self.date)
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::clock::FixedClock;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid gregorian date")
    }

    #[test]
    fn construct_validates_bounds() {
        assert!(HijriDate::new(1445, 9, 30).is_ok());
        assert_eq!(
            HijriDate::new(1445, 13, 1),
            Err(CalendarError::InvalidDate {
                year: 1445,
                month: 13,
                date: 1
            })
        );
        assert!(HijriDate::new(1445, 0, 1).is_err());
        assert!(HijriDate::new(1445, 2, 30).is_err());
        assert!(HijriDate::new(1445, 2, 0).is_err());
        assert!(HijriDate::new(0, 1, 1).is_err());
        assert!(HijriDate::new(MAX_YEAR + 1, 1, 1).is_err());
    }

    #[test]
    fn dhu_al_hijjah_30_only_in_leap_years() {
        // 1445 is year 5 of its cycle, 1446 is year 6
        assert!(HijriDate::new(1445, 12, 30).is_ok());
        assert!(HijriDate::new(1446, 12, 30).is_err());
    }

    #[test]
    fn ramadan_1445_scenario() {
        let d = HijriDate::new(1445, 9, 1).expect("valid date");
        assert_eq!(d.days_in_month(), 30);
        assert!(d.is_leap_year());
        assert_eq!(d.to_gregorian(), Ok(greg(2024, 3, 11)));
        // Monday
        assert_eq!(d.day(), 1);
    }

    #[test]
    fn today_reads_injected_clock() {
        let clock = FixedClock(greg(2024, 3, 11));
        let today = HijriDate::today(&clock).expect("after epoch");
        assert_eq!((today.year(), today.month(), today.date()), (1445, 9, 1));

        let shifted = HijriDate::today_with_offset(&clock, -1).expect("after epoch");
        assert_eq!((shifted.month(), shifted.date()), (8, 29));
    }

    #[test]
    fn month_names_per_locale() {
        assert_eq!(month_name(9, Locale::En), Ok("Ramadan"));
        assert_eq!(month_name(9, Locale::Ar), Ok("رمضان"));
        assert_eq!(month_name(13, Locale::En), Err(CalendarError::InvalidMonth(13)));

        let d = HijriDate::new(1446, 1, 10).expect("valid date");
        assert_eq!(d.formatted(Locale::En), "10 Muharram 1446");
        assert_eq!(d.to_string(), "1446-01-10");
    }

    #[test]
    fn locale_parses_keys() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("AR".parse::<Locale>(), Ok(Locale::Ar));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::En.alternate(), Locale::Ar);
    }
}
