use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use taqwim::calendar::EventRegistry;
use taqwim::models::{CalendarCell, HijriDate, Locale, MonthGrid};
use crate::tui::theme;
use taqwim::utils::format::{FRIDAY, WEEKDAY_SHORT};

pub struct MonthView<'a> {
    pub grid: &'a MonthGrid,
    pub today: Option<&'a HijriDate>,
    pub selected: u8,
    pub registry: &'a EventRegistry,
    pub locale: Locale,
}

impl MonthView<'_> {
    fn cell_style(&self, cell: &CalendarCell, weekday: usize) -> Style {
        if !cell.is_current_month {
            return theme::spillover();
        }
        if self.today.is_some_and(|t| cell.is(t)) {
            return theme::today();
        }
        if cell.date == self.selected {
            return theme::selected();
        }
        if weekday == FRIDAY {
            theme::green()
        } else {
            theme::bold()
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let header: Vec<Span> = WEEKDAY_SHORT
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == FRIDAY { theme::green() } else { theme::dim() };
                Span::styled(format!(" {} ", name), style)
            })
            .collect();

        let mut lines = vec![Line::from(""), Line::from(header), Line::from("")];

        for week in self.grid.weeks() {
            let spans: Vec<Span> = week
                .iter()
                .enumerate()
                .flat_map(|(i, cell)| {
                    let marked = cell.is_current_month
                        && self.registry.has_event(cell.month, cell.date);
                    [
                        Span::styled(format!(" {:>2}", cell.date), self.cell_style(cell, i)),
                        if marked {
                            Span::styled("•", theme::amber().add_modifier(Modifier::BOLD))
                        } else {
                            Span::raw(" ")
                        },
                        Span::raw(" "),
                    ]
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
        lines
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &MonthView) {
    let anchor = view.grid.anchor;
    let title = |loc: Locale| {
        taqwim::models::hijri::month_name(anchor.month, loc).unwrap_or("?")
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", title(view.locale), anchor.year),
            theme::gold().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ", title(view.locale.alternate())),
                theme::dim(),
            ))
            .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold())
        .style(theme::surface());

    let paragraph = Paragraph::new(view.lines())
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
