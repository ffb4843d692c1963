use crate::models::event::{EventCategory, EventOccurrence, IslamicEvent};
use crate::models::hijri::HijriDate;

const BUILTIN_EVENTS: &[IslamicEvent] = &[
    IslamicEvent {
        month: 1,
        day: 1,
        name: "Islamic New Year",
        localized_name: "رأس السنة الهجرية",
        description: "The beginning of the Islamic lunar year, marking the Hijra of Prophet Muhammad from Mecca to Medina.",
        category: EventCategory::Holiday,
    },
    IslamicEvent {
        month: 1,
        day: 10,
        name: "Day of Ashura",
        localized_name: "يوم عاشوراء",
        description: "A day of fasting commemorating the exodus of Moses and the Israelites from Egypt, and the martyrdom of Imam Hussein.",
        category: EventCategory::Significant,
    },
    IslamicEvent {
        month: 3,
        day: 12,
        name: "Mawlid al-Nabi",
        localized_name: "المولد النبوي",
        description: "Celebration of the birth of Prophet Muhammad.",
        category: EventCategory::Holiday,
    },
    IslamicEvent {
        month: 7,
        day: 27,
        name: "Laylat al-Miraj",
        localized_name: "ليلة المعراج",
        description: "The Night Journey and Ascension of Prophet Muhammad.",
        category: EventCategory::Night,
    },
    IslamicEvent {
        month: 8,
        day: 15,
        name: "Laylat al-Bara'ah",
        localized_name: "ليلة البراءة",
        description: "The Night of Forgiveness.",
        category: EventCategory::Night,
    },
    IslamicEvent {
        month: 9,
        day: 1,
        name: "First day of Ramadan",
        localized_name: "أول رمضان",
        description: "The beginning of the month of fasting.",
        category: EventCategory::Holiday,
    },
    IslamicEvent {
        month: 9,
        day: 27,
        name: "Laylat al-Qadr",
        localized_name: "ليلة القدر",
        description: "The Night of Power, when the first verses of the Quran were revealed.",
        category: EventCategory::Night,
    },
    IslamicEvent {
        month: 10,
        day: 1,
        name: "Eid al-Fitr",
        localized_name: "عيد الفطر",
        description: "Festival of Breaking the Fast, celebrating the end of Ramadan.",
        category: EventCategory::Holiday,
    },
    IslamicEvent {
        month: 12,
        day: 8,
        name: "Day of Arafah",
        localized_name: "يوم عرفة",
        description: "The second day of Hajj, when pilgrims gather at Mount Arafat.",
        category: EventCategory::Significant,
    },
    IslamicEvent {
        month: 12,
        day: 10,
        name: "Eid al-Adha",
        localized_name: "عيد الأضحى",
        description: "Festival of the Sacrifice, commemorating Prophet Ibrahim's willingness to sacrifice his son.",
        category: EventCategory::Holiday,
    },
    IslamicEvent {
        month: 12,
        day: 11,
        name: "Days of Tashreeq",
        localized_name: "أيام التشريق",
        description: "The three days following Eid al-Adha, part of the Hajj pilgrimage.",
        category: EventCategory::Significant,
    },
];

/// Read-only table of observances keyed by Hijri (month, day).
///
/// Lookups keep declaration order. `next_event` walks a stable
/// (month, day) ordering, so events sharing a date resolve to the one
/// declared first.
#[derive(Debug, Clone)]
pub struct EventRegistry {
    events: Vec<IslamicEvent>,
    by_date: Vec<usize>,
}

impl EventRegistry {
    pub fn new(events: Vec<IslamicEvent>) -> Self {
        let mut by_date: Vec<usize> = (0..events.len()).collect();
        by_date.sort_by_key(|&i| (events[i].month, events[i].day));
        Self { events, by_date }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_EVENTS.to_vec())
    }

    /// Events in calendar order.
    pub fn chronological(&self) -> impl Iterator<Item = &IslamicEvent> {
        self.by_date.iter().map(|&i| &self.events[i])
    }

    pub fn events_on(&self, month: u8, day: u8) -> Vec<&IslamicEvent> {
        self.events
            .iter()
            .filter(|e| e.month == month && e.day == day)
            .collect()
    }

    pub fn has_event(&self, month: u8, day: u8) -> bool {
        self.events.iter().any(|e| e.month == month && e.day == day)
    }

    pub fn events_in_month(&self, month: u8) -> Vec<&IslamicEvent> {
        self.chronological().filter(|e| e.month == month).collect()
    }

    /// First event on or after `from` within its year, wrapping to the
    /// year's first event once the last one has passed.
    pub fn next_event(&self, from: &HijriDate) -> Option<&IslamicEvent> {
        self.next_index(from).map(|(i, _)| &self.events[i])
    }

    /// Like [`next_event`](Self::next_event) but with the concrete Hijri and
    /// Gregorian dates of the occurrence.
    pub fn next_occurrence(&self, from: &HijriDate) -> Option<EventOccurrence<'_>> {
        let (idx, wrapped) = self.next_index(from)?;
        let event = &self.events[idx];
        let year = if wrapped { from.year() + 1 } else { from.year() };
        let date = HijriDate::new(year, event.month, event.day).ok()?;
        let gregorian = date.to_gregorian().ok()?;
        Some(EventOccurrence {
            event,
            date,
            gregorian,
        })
    }

    fn next_index(&self, from: &HijriDate) -> Option<(usize, bool)> {
        let key = (from.month(), from.date());
        self.by_date
            .iter()
            .copied()
            .find(|&i| (self.events[i].month, self.events[i].day) >= key)
            .map(|i| (i, false))
            .or_else(|| self.by_date.first().map(|&i| (i, true)))
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
