pub mod cell;
pub mod event;
pub mod hijri;

pub use cell::{CalendarCell, MonthAnchor, MonthGrid};
pub use event::{EventCategory, EventOccurrence, IslamicEvent};
pub use hijri::{HijriDate, Locale};
