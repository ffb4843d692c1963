use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use taqwim::models::{HijriDate, IslamicEvent, Locale};
use crate::tui::theme;
use taqwim::utils::format::format_gregorian;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    selected: Option<&HijriDate>,
    events: &[&IslamicEvent],
    locale: Locale,
) {
    let title = match selected {
        Some(d) => format!(" {} ", d.formatted(locale)),
        None => " Selected Day ".to_string(),
    };
    let block = Block::default()
        .title(Span::styled(title, theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    if let Some(gregorian) = selected.and_then(|d| d.to_gregorian().ok()) {
        lines.push(Line::from(Span::styled(
            format!("  {}", format_gregorian(gregorian)),
            theme::dim(),
        )));
        lines.push(Line::from(""));
    }

    if events.is_empty() {
        lines.push(Line::from(Span::styled("  No events", theme::dim())));
    }
    for event in events {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", event.name),
                theme::green().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", event.localized_name), theme::dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", event.category),
            theme::amber(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", event.description),
            theme::dim(),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
