use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid Hijri date {year}-{month:02}-{date:02}")]
    InvalidDate { year: i32, month: u8, date: u8 },

    #[error("invalid Hijri month {0} (expected 1-12)")]
    InvalidMonth(u8),

    #[error("{0} is before the Hijri epoch (622-07-19)")]
    BeforeEpoch(NaiveDate),

    #[error("day count {0} is outside the supported calendar range")]
    OutOfRange(i64),

    #[error("unknown locale '{0}' (expected 'en' or 'ar')")]
    UnknownLocale(String),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
