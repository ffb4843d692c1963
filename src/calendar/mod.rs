pub mod clock;
pub mod converter;
pub mod events;
pub mod grid;

pub use clock::{Clock, FixedClock, SystemClock};
pub use converter::{
    days_in_month, days_in_year, gregorian_to_hijri, hijri_to_gregorian, is_leap_year, weekday,
};
pub use events::EventRegistry;
pub use grid::generate_grid;
