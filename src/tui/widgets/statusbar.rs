use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let hints = [
        ("[← →]", " day  "),
        ("[↑ ↓]", " week  "),
        ("[p/n]", " month  "),
        ("[t]", " today  "),
        ("[?]", " help  "),
        ("[Esc]", " quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, theme::gold()),
                Span::styled(*label, theme::dim()),
            ]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
