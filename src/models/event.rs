use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

use crate::models::hijri::HijriDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Holiday,
    Significant,
    Historical,
    Night,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Holiday => "holiday",
            EventCategory::Significant => "significant",
            EventCategory::Historical => "historical",
            EventCategory::Night => "night",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventCategory::Holiday => "Holiday",
            EventCategory::Significant => "Significant day",
            EventCategory::Historical => "Historical",
            EventCategory::Night => "Night observance",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for EventCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "holiday" => Ok(EventCategory::Holiday),
            "significant" => Ok(EventCategory::Significant),
            "historical" => Ok(EventCategory::Historical),
            "night" => Ok(EventCategory::Night),
            _ => Err(anyhow::anyhow!("Unknown event category: {}", s)),
        }
    }
}

/// A fixed observance anchored on a Hijri (month, day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IslamicEvent {
    pub month: u8,
    pub day: u8,
    pub name: &'static str,
    pub localized_name: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
}

/// An event resolved to the concrete day it next falls on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventOccurrence<'a> {
    pub event: &'a IslamicEvent,
    pub date: HijriDate,
    pub gregorian: NaiveDate,
}

impl EventOccurrence<'_> {
    /// Whole days from "today" to this occurrence. `today` is the unshifted
    /// Gregorian date; the sighting offset moves it the same way it moves the
    /// Hijri "today" the occurrence was resolved from.
    pub fn days_away(&self, today: NaiveDate, hijri_offset: i32) -> i64 {
        (self.gregorian - today).num_days() - i64::from(hijri_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for cat in [
            EventCategory::Holiday,
            EventCategory::Significant,
            EventCategory::Historical,
            EventCategory::Night,
        ] {
            assert_eq!(cat.as_str().parse::<EventCategory>().ok(), Some(cat));
        }
        assert!("feast".parse::<EventCategory>().is_err());
    }

    #[test]
    fn days_away_follows_the_sighting_offset() {
        use crate::calendar::{Clock, EventRegistry, FixedClock};

        // 26 Ramadan 1445; Laylat al-Qadr (27 Ramadan) is 2024-04-06
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 4, 5).expect("valid date"));
        let registry = EventRegistry::builtin();

        let days = |offset: i32| {
            let today = HijriDate::today_with_offset(&clock, offset).expect("after epoch");
            let occ = registry.next_occurrence(&today).expect("non-empty registry");
            assert_eq!(occ.event.name, "Laylat al-Qadr");
            occ.days_away(clock.today(), offset)
        };

        assert_eq!(days(0), 1);
        // A day ahead puts "today" on 27 Ramadan itself
        assert_eq!(days(1), 0);
        assert_eq!(days(-1), 2);
    }
}
