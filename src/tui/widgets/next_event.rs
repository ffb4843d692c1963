use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use taqwim::models::{EventOccurrence, Locale};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    next: Option<&EventOccurrence>,
    days_away: Option<i64>,
    locale: Locale,
) {
    let block = Block::default()
        .title(Span::styled(" Next Event ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let content: Vec<Line> = match next {
        None => vec![
            Line::from(""),
            Line::from(Span::styled("  No data", theme::dim())),
        ],
        Some(occ) => {
            let when = match days_away {
                Some(0) => "today".to_string(),
                Some(1) => "tomorrow".to_string(),
                Some(n) => format!("in {} days", n),
                None => String::new(),
            };
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(
                        format!("  {}", occ.event.name),
                        theme::gold().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!("  {}", occ.event.localized_name), theme::dim()),
                ]),
                Line::from(vec![
                    Span::styled(format!("  {}", occ.date.formatted(locale)), theme::amber()),
                    Span::styled(format!("  ·  {}", occ.gregorian.format("%b %d, %Y")), theme::dim()),
                ]),
                Line::from(Span::styled(
                    format!("  {}", when),
                    theme::amber().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(format!("  {}", occ.event.description), theme::dim())),
            ]
        }
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
