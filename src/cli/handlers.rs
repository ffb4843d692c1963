use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use log::debug;
use serde_json::json;

use taqwim::assistant::context::{build_context, build_prompt};
use taqwim::calendar::{
    generate_grid, gregorian_to_hijri, hijri_to_gregorian, weekday, Clock, EventRegistry,
};
use taqwim::config::{check_hijri_offset, AppConfig};
use taqwim::models::{EventCategory, HijriDate, IslamicEvent, Locale, MonthAnchor, MonthGrid};
use taqwim::models::hijri::month_name;
use taqwim::utils::format::{
    center, format_gregorian, pad_right, parse_ymd, FRIDAY, WEEKDAY_LONG, WEEKDAY_SHORT,
};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";
const RESET: &str = "\x1b[0m";

const CELL_WIDTH: usize = 5;
const GRID_WIDTH: usize = CELL_WIDTH * 7;

/// Today's Hijri date with the configured sighting offset applied.
pub fn today(clock: &dyn Clock, config: &AppConfig) -> Result<HijriDate> {
    HijriDate::today_with_offset(clock, config.calendar.hijri_offset)
        .with_context(|| format!("Deriving the Hijri date for {}", clock.today()))
}

// ─── Today ───────────────────────────────────────────────────────────────────

pub fn handle_today(
    clock: &dyn Clock,
    config: &AppConfig,
    registry: &EventRegistry,
    json: bool,
) -> Result<()> {
    let today = today(clock, config)?;
    let gregorian = clock.today();
    let next = registry.next_occurrence(&today);

    if json {
        let value = json!({
            "hijri": today,
            "gregorian": gregorian,
            "month_name": {
                "en": today.month_name(Locale::En),
                "ar": today.month_name(Locale::Ar),
            },
            "events": registry.events_on(today.month(), today.date()),
            "next_event": next,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let locale = config.calendar.locale;
    println!();
    println_colored!(GOLD, "  {} AH", today.formatted(locale));
    println_colored!(DIM, "  {}", today.formatted(locale.alternate()));
    println_colored!(DIM, "  {}", format_gregorian(gregorian));

    let todays = registry.events_on(today.month(), today.date());
    if !todays.is_empty() {
        println!();
        for event in todays {
            println_colored!(GREEN, "  ★ Today: {} ({})", event.name, event.localized_name);
        }
    }

    if let Some(occ) = next {
        println!();
        println_colored!(
            AMBER,
            "  Next: {} — {} ({})",
            occ.event.name,
            occ.date.formatted(locale),
            occ.gregorian.format("%b %d, %Y")
        );
    }
    println!();
    Ok(())
}

// ─── Month grid ──────────────────────────────────────────────────────────────

pub fn handle_month(
    clock: &dyn Clock,
    config: &AppConfig,
    registry: &EventRegistry,
    year: Option<i32>,
    month: Option<u8>,
    json: bool,
) -> Result<()> {
    let today = today(clock, config).ok();
    let anchor = match (year, month, today) {
        (Some(y), Some(m), _) => MonthAnchor::new(y, m)?,
        (None, Some(m), Some(t)) => MonthAnchor::new(t.year(), m)?,
        (None, None, Some(t)) => MonthAnchor::from(&t),
        _ => return Err(anyhow!("Could not derive today's date; pass --year and --month")),
    };
    debug!("Rendering grid for {}-{:02}", anchor.year, anchor.month);
    let grid = generate_grid(anchor);

    if json {
        let value = json!({
            "grid": grid,
            "events": registry.events_in_month(anchor.month),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!();
    for line in month_lines(&grid, today.as_ref(), registry, config.calendar.locale, true) {
        println!("  {}", line);
    }

    let events = registry.events_in_month(anchor.month);
    if !events.is_empty() {
        println!();
        for event in events {
            println!(
                "  {}{:>2}{}  {} {}({}){}",
                AMBER, event.day, RESET, event.name, DIM, event.localized_name, RESET
            );
        }
    }
    println!();
    Ok(())
}

/// Text rendering of a month grid: two title lines, the weekday header, then
/// six week rows. Event days in the viewed month carry a `*`.
pub fn month_lines(
    grid: &MonthGrid,
    today: Option<&HijriDate>,
    registry: &EventRegistry,
    locale: Locale,
    color: bool,
) -> Vec<String> {
    let paint = |code: &str, text: String| {
        if color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text
        }
    };

    let anchor = grid.anchor;
    let title = |loc: Locale| {
        let name = month_name(anchor.month, loc).unwrap_or("?");
        center(&format!("{} {}", name, anchor.year), GRID_WIDTH)
    };

    let mut lines = vec![
        paint(BOLD, title(locale)),
        paint(DIM, title(locale.alternate())),
    ];

    let header: String = WEEKDAY_SHORT
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let cell = center(name, CELL_WIDTH);
            if i == FRIDAY { paint(GREEN, cell) } else { cell }
        })
        .collect();
    lines.push(header);

    for week in grid.weeks() {
        let row: String = week
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let has_event = cell.is_current_month && registry.has_event(cell.month, cell.date);
                let marker = if has_event { '*' } else { ' ' };
                let text = pad_right(&format!(" {:>2}{}", cell.date, marker), CELL_WIDTH);
                if !cell.is_current_month {
                    paint(DIM, text)
                } else if today.is_some_and(|t| cell.is(t)) {
                    paint(&format!("{}{}", BOLD, GOLD), text)
                } else if has_event {
                    paint(AMBER, text)
                } else if i == FRIDAY {
                    paint(GREEN, text)
                } else {
                    text
                }
            })
            .collect();
        lines.push(row);
    }

    lines
}

// ─── Convert ─────────────────────────────────────────────────────────────────

pub fn handle_convert(config: &AppConfig, input: &str, to_gregorian: bool) -> Result<()> {
    let line = convert_line(input, to_gregorian, config.calendar.locale)?;
    println_colored!(GOLD, "  {}", line);
    Ok(())
}

fn convert_line(input: &str, to_gregorian: bool, locale: Locale) -> Result<String> {
    if to_gregorian {
        let (y, m, d) = parse_ymd(input)?;
        let gregorian = hijri_to_gregorian(y, m, d)?;
        let day_name = WEEKDAY_LONG[usize::from(weekday(y, m, d)?)];
        Ok(format!(
            "{} {} {} AH  →  {} ({})",
            d,
            month_name(m, locale)?,
            y,
            gregorian.format("%Y-%m-%d"),
            day_name
        ))
    } else {
        let gregorian = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|e| anyhow!("Bad date '{}': {}", input, e))?;
        let hijri = gregorian_to_hijri(gregorian)?;
        Ok(format!(
            "{}  →  {} AH ({})",
            gregorian.format("%Y-%m-%d"),
            hijri.formatted(locale),
            hijri.formatted(locale.alternate())
        ))
    }
}

// ─── Events ──────────────────────────────────────────────────────────────────

pub fn handle_events(
    config: &AppConfig,
    registry: &EventRegistry,
    month: Option<u8>,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let category = category.map(str::parse::<EventCategory>).transpose()?;
    let events = filter_events(registry, month, category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    println!();
    println_colored!(GOLD, "  Islamic Events");
    println!();
    if events.is_empty() {
        println_colored!(DIM, "  No events");
    }
    for event in &events {
        let name = month_name(event.month, config.calendar.locale)?;
        println!(
            "  {}{}{}  {}{}  {}({}){}",
            AMBER,
            pad_right(&format!("{} {}", event.day, name), 20),
            RESET,
            BOLD,
            pad_right(event.name, 22),
            DIM,
            event.category,
            RESET
        );
        println_colored!(DIM, "  {}  {}", " ".repeat(20), event.description);
    }
    println!();
    Ok(())
}

fn filter_events(
    registry: &EventRegistry,
    month: Option<u8>,
    category: Option<EventCategory>,
) -> Result<Vec<&IslamicEvent>> {
    if let Some(m) = month {
        taqwim::calendar::days_in_month(1, m)?;
    }
    Ok(registry
        .chronological()
        .filter(|e| month.is_none_or(|m| e.month == m))
        .filter(|e| category.is_none_or(|c| e.category == c))
        .collect())
}

// ─── Next ────────────────────────────────────────────────────────────────────

pub fn handle_next(clock: &dyn Clock, config: &AppConfig, registry: &EventRegistry) -> Result<()> {
    let today = today(clock, config)?;
    let locale = config.calendar.locale;
    let Some(occ) = registry.next_occurrence(&today) else {
        println_colored!(DIM, "  No upcoming events");
        return Ok(());
    };

    let days_away = occ.days_away(clock.today(), config.calendar.hijri_offset);
    println!();
    println_colored!(GOLD, "  {} ({})", occ.event.name, occ.event.localized_name);
    println_colored!(
        BOLD,
        "  {} AH  ·  {}",
        occ.date.formatted(locale),
        format_gregorian(occ.gregorian)
    );
    match days_away {
        0 => println_colored!(GREEN, "  Today"),
        1 => println_colored!(AMBER, "  Tomorrow"),
        n => println_colored!(AMBER, "  In {} days", n),
    }
    println_colored!(DIM, "  {}", occ.event.description);
    println!();
    Ok(())
}

// ─── Assistant context ───────────────────────────────────────────────────────

pub fn handle_context(
    clock: &dyn Clock,
    config: &AppConfig,
    registry: &EventRegistry,
    question: Option<&str>,
) -> Result<()> {
    let today = today(clock, config)?;
    let context = build_context(&today, registry, config.calendar.locale);
    match question {
        Some(q) if !q.trim().is_empty() => println!("{}", build_prompt(q, &context)),
        _ => println!("{}", context),
    }
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &mut AppConfig, locale: Option<&str>, offset: Option<i32>) -> Result<()> {
    if locale.is_none() && offset.is_none() {
        println!("{}", toml::to_string_pretty(config)?);
        println_colored!(DIM, "# {}", AppConfig::config_path()?.display());
        return Ok(());
    }

    if let Some(l) = locale {
        config.calendar.locale = l.parse::<Locale>()?;
    }
    if let Some(o) = offset {
        check_hijri_offset(o)?;
        config.calendar.hijri_offset = o;
    }
    let path = config.save()?;
    println_colored!(GREEN, "  ✓ Saved {}", path.display());
    Ok(())
}
