use crate::calendar::EventRegistry;
use crate::models::{HijriDate, Locale};

/// Plain-text calendar facts handed to an external assistant along with a
/// user question.
pub fn build_context(today: &HijriDate, registry: &EventRegistry, locale: Locale) -> String {
    let mut lines = vec![format!("Today's Hijri date is: {} AH", today.formatted(locale))];

    if let Ok(gregorian) = today.to_gregorian() {
        lines.push(format!(
            "Today's Gregorian date is: {}",
            gregorian.format("%A, %d %B %Y")
        ));
    }

    if let Some(occ) = registry.next_occurrence(today) {
        let gregorian = occ.gregorian.format("%d %B %Y");
        lines.push(format!(
            "The next upcoming Islamic event is {} ({}) on {} AH ({})",
            occ.event.name,
            occ.event.localized_name,
            occ.date.formatted(locale),
            gregorian
        ));
    } else if let Some(event) = registry.next_event(today) {
        lines.push(format!(
            "The next upcoming Islamic event is {} ({})",
            event.name, event.localized_name
        ));
    }

    lines.join("\n")
}

pub fn build_prompt(question: &str, context: &str) -> String {
    format!(
        "As an assistant specializing in the Islamic Hijri calendar, please answer the following question:\n\
         \n\
         \"{}\"\n\
         \n\
         {}\n\
         \n\
         Please provide a concise, accurate answer. If the question is about dates, \
         include both Hijri and Gregorian dates where relevant.",
        question.trim(),
        context
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventCategory, IslamicEvent};

    fn date(y: i32, m: u8, d: u8) -> HijriDate {
        HijriDate::new(y, m, d).expect("valid date")
    }

    #[test]
    fn context_names_today_and_next_event() {
        let registry = EventRegistry::builtin();
        let ctx = build_context(&date(1445, 9, 20), &registry, Locale::En);
        assert!(ctx.contains("Today's Hijri date is: 20 Ramadan 1445 AH"));
        assert!(ctx.contains("Laylat al-Qadr (ليلة القدر) on 27 Ramadan 1445 AH"));
        assert!(ctx.contains("(06 April 2024)"));
    }

    #[test]
    fn next_event_uses_its_own_month_name() {
        let registry = EventRegistry::builtin();
        let ctx = build_context(&date(1445, 11, 2), &registry, Locale::En);
        assert!(ctx.contains("Day of Arafah"));
        assert!(ctx.contains("8 Dhu al-Hijjah 1445 AH"));
    }

    #[test]
    fn arabic_locale_uses_arabic_month_names() {
        let registry = EventRegistry::new(vec![IslamicEvent {
            month: 2,
            day: 5,
            name: "Test",
            localized_name: "اختبار",
            description: "",
            category: EventCategory::Historical,
        }]);
        let ctx = build_context(&date(1446, 2, 1), &registry, Locale::Ar);
        assert!(ctx.contains("1 صفر 1446"));
        assert!(ctx.contains("5 صفر 1446"));
    }

    #[test]
    fn prompt_wraps_question_and_context() {
        let prompt = build_prompt("  When is Eid?  ", "CTX");
        assert!(prompt.contains("\"When is Eid?\""));
        assert!(prompt.contains("\n\nCTX\n\n"));
    }
}
