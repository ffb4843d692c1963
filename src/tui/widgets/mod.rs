pub mod day_events;
pub mod header;
pub mod month;
pub mod next_event;
pub mod statusbar;
