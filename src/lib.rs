//! Tabular Hijri calendar engine: date conversion, month grids and the
//! Islamic event registry, plus the config and assistant-context helpers the
//! `taqwim` binary builds on.

pub mod assistant;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

pub use calendar::{
    days_in_month, days_in_year, generate_grid, gregorian_to_hijri, hijri_to_gregorian,
    is_leap_year, weekday, Clock, EventRegistry, FixedClock, SystemClock,
};
pub use error::{CalendarError, CalendarResult};
pub use models::{CalendarCell, HijriDate, IslamicEvent, Locale, MonthAnchor, MonthGrid};
