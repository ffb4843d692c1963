use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use log::{debug, warn};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use taqwim::calendar::{generate_grid, Clock, EventRegistry};
use taqwim::config::AppConfig;
use taqwim::models::cell::DAYS_PER_WEEK;
use taqwim::models::hijri::MIN_YEAR;
use taqwim::models::{HijriDate, MonthAnchor, MonthGrid};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{day_events, header, month, next_event, statusbar};

const TICK_RATE: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Calendar,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub registry: EventRegistry,
    clock: Box<dyn Clock>,
    pub should_quit: bool,

    // Cached state (refreshed on tick/navigation)
    pub today: Option<HijriDate>,
    pub anchor: MonthAnchor,
    pub grid: MonthGrid,
    pub selected: u8,
}

impl App {
    pub fn new(config: AppConfig, registry: EventRegistry, clock: Box<dyn Clock>) -> Self {
        let today = derive_today(clock.as_ref(), &config);
        let anchor = today.as_ref().map(MonthAnchor::from).unwrap_or(MonthAnchor {
            year: MIN_YEAR,
            month: 1,
        });
        let selected = today.as_ref().map(HijriDate::date).unwrap_or(1);

        App {
            view: View::Calendar,
            config,
            registry,
            clock,
            should_quit: false,
            today,
            anchor,
            grid: generate_grid(anchor),
            selected,
        }
    }

    /// Re-derive "today". Keeps the view where the user left it.
    pub fn tick(&mut self) {
        self.today = derive_today(self.clock.as_ref(), &self.config);
    }

    pub fn selected_date(&self) -> Option<HijriDate> {
        HijriDate::new(self.anchor.year, self.anchor.month, self.selected).ok()
    }

    fn set_anchor(&mut self, anchor: MonthAnchor) {
        self.anchor = anchor;
        self.grid = generate_grid(anchor);
        self.selected = self.selected.clamp(1, self.grid.days_in_month);
    }

    fn jump_to_today(&mut self) {
        self.today = derive_today(self.clock.as_ref(), &self.config);
        if let Some(today) = self.today {
            self.selected = today.date();
            self.set_anchor(MonthAnchor::from(&today));
        }
    }

    fn step_day(&mut self, forward: bool) {
        let last = self.grid.days_in_month;
        match (forward, self.selected) {
            (true, d) if d < last => self.selected += 1,
            (false, d) if d > 1 => self.selected -= 1,
            (true, _) => {
                let next = self.anchor.next();
                if next != self.anchor {
                    self.selected = 1;
                    self.set_anchor(next);
                }
            }
            (false, _) => {
                let prev = self.anchor.previous();
                if prev != self.anchor {
                    self.set_anchor(prev);
                    self.selected = self.grid.days_in_month;
                }
            }
        }
    }

    fn step_week(&mut self, forward: bool) {
        let week = DAYS_PER_WEEK as u8;
        self.selected = if forward {
            self.selected.saturating_add(week).min(self.grid.days_in_month)
        } else {
            self.selected.saturating_sub(week).max(1)
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Some terminals also report release/repeat events
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Calendar => self.handle_calendar_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Left => self.step_day(false),
            KeyCode::Right => self.step_day(true),
            KeyCode::Up => self.step_week(false),
            KeyCode::Down => self.step_week(true),
            KeyCode::Char('p') | KeyCode::PageUp => self.set_anchor(self.anchor.previous()),
            KeyCode::Char('n') | KeyCode::PageDown => self.set_anchor(self.anchor.next()),
            KeyCode::Char('t') => self.jump_to_today(),
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Calendar;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_calendar(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_calendar(&self, frame: &mut Frame) {
        let area = frame.area();
        let locale = self.config.calendar.locale;

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            outer_chunks[0],
            self.today.as_ref(),
            self.clock.today(),
            locale,
        );
        statusbar::render(frame, outer_chunks[2]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(outer_chunks[1]);

        let view = month::MonthView {
            grid: &self.grid,
            today: self.today.as_ref(),
            selected: self.selected,
            registry: &self.registry,
            locale,
        };
        month::render(frame, columns[0], &view);

        // Right column: Next Event + Selected Day
        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // next event
                Constraint::Min(0),    // selected day
            ])
            .split(columns[1]);

        let next = self
            .today
            .as_ref()
            .and_then(|t| self.registry.next_occurrence(t));
        let days_away = next
            .as_ref()
            .map(|occ| occ.days_away(self.clock.today(), self.config.calendar.hijri_offset));
        next_event::render(frame, right_chunks[0], next.as_ref(), days_away, locale);

        let selected = self.selected_date();
        let events = self.registry.events_on(self.anchor.month, self.selected);
        day_events::render(frame, right_chunks[1], selected.as_ref(), &events, locale);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let bindings = [
            ("  [← →]        ", "Previous / next day"),
            ("  [↑ ↓]        ", "Previous / next week"),
            ("  [p] / PgUp   ", "Previous month"),
            ("  [n] / PgDn   ", "Next month"),
            ("  [t]          ", "Jump to today"),
            ("  [?]          ", "Toggle help"),
            ("  [Esc] / [q]  ", "Quit"),
        ];

        let mut help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        help_text.extend(bindings.iter().map(|(key, label)| {
            Line::from(vec![
                Span::styled(*key, theme::gold()),
                Span::styled(*label, theme::dim()),
            ])
        }));
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "  • marks a day with an Islamic event",
            theme::dim(),
        )));

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

fn derive_today(clock: &dyn Clock, config: &AppConfig) -> Option<HijriDate> {
    match HijriDate::today_with_offset(clock, config.calendar.hijri_offset) {
        Ok(today) => Some(today),
        Err(e) => {
            warn!("Could not derive today's Hijri date: {}", e);
            None
        }
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, registry: EventRegistry, clock: Box<dyn Clock>) -> Result<()> {
    let mut app = App::new(config, registry, clock);
    debug!("Starting TUI at {}-{:02}", app.anchor.year, app.anchor.month);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(TICK_RATE);

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| app.draw(frame)) {
            break Err(e.into());
        }

        match events.next() {
            Ok(Event::Key(key)) => {
                app.handle_key(key);
                if app.should_quit {
                    break Ok(());
                }
            }
            Ok(Event::Resize) => {}
            Ok(Event::Tick) => app.tick(),
            Err(e) => break Err(e.into()),
        }
    };

    ratatui::restore();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use taqwim::calendar::FixedClock;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn app_on(y: i32, m: u32, d: u32) -> App {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        App::new(
            AppConfig::default(),
            EventRegistry::builtin(),
            Box::new(FixedClock(date)),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn opens_on_today() {
        // 2024-03-11 is 1 Ramadan 1445
        let app = app_on(2024, 3, 11);
        assert_eq!(app.anchor, MonthAnchor { year: 1445, month: 9 });
        assert_eq!(app.selected, 1);
        assert_eq!(app.today.map(|t| t.date()), Some(1));
    }

    #[test]
    fn left_from_first_day_goes_to_previous_month_end() {
        let mut app = app_on(2024, 3, 11);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.anchor, MonthAnchor { year: 1445, month: 8 });
        // Sha'ban has 29 days in the tabular calendar
        assert_eq!(app.selected, 29);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.anchor, MonthAnchor { year: 1445, month: 9 });
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn week_moves_clamp_to_month() {
        let mut app = app_on(2024, 3, 11);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 1);
        for _ in 0..6 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected, 30);
        assert_eq!(app.anchor.month, 9);
    }

    #[test]
    fn month_paging_clamps_selection_and_today_returns() {
        let mut app = app_on(2024, 3, 11);
        for _ in 0..29 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected, 30);
        // Shawwal has 29 days
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.anchor, MonthAnchor { year: 1445, month: 10 });
        assert_eq!(app.selected, 29);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.anchor.month, 9);
        assert_eq!(app.selected, 29);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.anchor, MonthAnchor { year: 1445, month: 9 });
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn help_overlay_and_quit() {
        let mut app = app_on(2024, 3, 11);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.view, View::Help);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Calendar);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ignores_key_release() {
        let mut app = app_on(2024, 3, 11);
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn selected_day_events() {
        let mut app = app_on(2024, 3, 11);
        for _ in 0..26 {
            press(&mut app, KeyCode::Right);
        }
        let date = app.selected_date().expect("valid selection");
        assert_eq!(date.date(), 27);
        assert!(!app.registry.events_on(date.month(), date.date()).is_empty());
    }
}
