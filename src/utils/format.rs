use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

/// Short weekday headers, Sunday first to match the grid layout.
pub const WEEKDAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const WEEKDAY_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const FRIDAY: usize = 5;

/// Center `text` in `width` terminal columns (Arabic and other wide text
/// measured by display width, not bytes).
pub fn center(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    if w >= width {
        return text.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Pad `text` on the right to `width` display columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(text);
    format!("{}{}", text, " ".repeat(width.saturating_sub(w)))
}

/// Parse "YYYY-MM-DD" into raw components without calendar validation.
/// Used for Hijri input, which chrono cannot parse.
pub fn parse_ymd(s: &str) -> Result<(i32, u8, u8)> {
    let mut parts = s.trim().splitn(3, '-');
    let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(anyhow!("Expected YYYY-MM-DD, got '{}'", s));
    };
    let year: i32 = y.parse().map_err(|_| anyhow!("Bad year '{}'", y))?;
    let month: u8 = m.parse().map_err(|_| anyhow!("Bad month '{}'", m))?;
    let day: u8 = d.parse().map_err(|_| anyhow!("Bad day '{}'", d))?;
    Ok((year, month, day))
}

pub fn format_gregorian(date: NaiveDate) -> String {
    date.format("%A, %b %d, %Y").to_string()
}
