use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use taqwim::models::{HijriDate, Locale};
use crate::tui::theme;
use taqwim::utils::format::format_gregorian;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    today: Option<&HijriDate>,
    gregorian: NaiveDate,
    locale: Locale,
) {
    let title_line = Line::from(vec![
        Span::styled("  تقويم  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("taqwim", theme::gold()),
    ]);

    let date_line = match today {
        Some(t) => Line::from(vec![
            Span::styled(format!("{} AH", t.formatted(locale)), theme::amber()),
            Span::styled("  ·  ", theme::dim()),
            Span::styled(t.formatted(locale.alternate()), theme::dim()),
            Span::styled("  ·  ", theme::dim()),
            Span::styled(format_gregorian(gregorian), theme::dim()),
        ]),
        None => Line::from(vec![
            Span::styled("Hijri date unavailable", theme::amber()),
            Span::styled("  ·  ", theme::dim()),
            Span::styled(format_gregorian(gregorian), theme::dim()),
        ]),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(vec![title_line, Line::from(""), date_line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
