use crate::calc::{project, update, Action, JournalState, Marker, MarkerStyle, ValidationError};
use crate::data::{AppSettings, CalendarDate, Mood};
use crate::ui::locale::{strings, weekday_column, Strings};
use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate};
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

// #1E90FF, the selection and accent color
const ACCENT: Color = Color::Rgb(30, 144, 255);
const NOTICE_COLOR: Color = Color::Red;

const MODAL_WIDTH: u16 = 54;
const MODAL_HEIGHT: u16 = 14;

#[derive(PartialEq, Clone, Copy, Debug)]
enum Focus {
    Mood,
    Note,
}

pub struct App {
    state: JournalState,
    pub settings: AppSettings,
    strings: &'static Strings,
    today: NaiveDate,
    /// Day under the keyboard cursor; the displayed month follows it.
    cursor: NaiveDate,
    /// Which modal field receives keys.
    focus: Focus,
    /// User-visible message, cleared on the next keypress.
    notice: Option<String>,
}

impl App {
    pub fn new(settings: AppSettings, today: NaiveDate, start: NaiveDate) -> Self {
        let strings = strings(settings.locale);
        App {
            state: JournalState::default(),
            settings,
            strings,
            today,
            cursor: start,
            focus: Focus::Mood,
            notice: None,
        }
    }

    pub fn state(&self) -> &JournalState {
        &self.state
    }

    /// Runs `action` through the journal; a rejected save surfaces as a notice
    /// and leaves the state as it was.
    fn apply(&mut self, action: Action) {
        match update(&self.state, action) {
            Ok(next) => self.state = next,
            Err(ValidationError::MissingMood) => {
                self.notice = Some(self.strings.missing_mood.to_string());
            }
        }
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        self.notice = None;

        if self.state.is_modal_open() {
            self.handle_modal_key(code);
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::Char('n') | KeyCode::PageDown => self.cursor = add_months(self.cursor, 1),
            KeyCode::Char('p') | KeyCode::PageUp => self.cursor = add_months(self.cursor, -1),
            KeyCode::Char('t') => self.cursor = self.today,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.focus = Focus::Mood;
                self.apply(Action::SelectDay(CalendarDate::new(self.cursor)));
            }
            _ => {}
        }
        false
    }

    fn handle_modal_key(&mut self, code: KeyCode) {
        let (mood, note) = match self.state.draft() {
            Some(draft) => (draft.mood, draft.note.clone()),
            None => return,
        };

        match code {
            KeyCode::Esc => self.apply(Action::Cancel),
            KeyCode::Enter => self.apply(Action::Save),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Mood => Focus::Note,
                    Focus::Note => Focus::Mood,
                };
            }
            _ => match self.focus {
                Focus::Mood => match code {
                    KeyCode::Right => {
                        self.apply(Action::SetMood(mood.map_or(Mood::Elated, Mood::next)))
                    }
                    KeyCode::Left => {
                        self.apply(Action::SetMood(mood.map_or(Mood::Angry, Mood::prev)))
                    }
                    KeyCode::Backspace | KeyCode::Delete => self.apply(Action::ClearMood),
                    KeyCode::Char(c) => {
                        if let Some(m) = c
                            .to_digit(10)
                            .and_then(|n| (n as usize).checked_sub(1))
                            .and_then(Mood::from_index)
                        {
                            self.apply(Action::SetMood(m));
                        }
                    }
                    _ => {}
                },
                Focus::Note => match code {
                    KeyCode::Char(c) => {
                        let mut text = note;
                        text.push(c);
                        self.apply(Action::SetNote(text));
                    }
                    KeyCode::Backspace => {
                        let mut text = note;
                        text.pop();
                        self.apply(Action::SetNote(text));
                    }
                    _ => {}
                },
            },
        }
    }

    fn move_cursor(&mut self, days: i64) {
        self.cursor = self
            .cursor
            .checked_add_signed(Duration::days(days))
            .unwrap_or(self.cursor);
    }

    pub fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // title
                Constraint::Length(10), // month grid (header + weekdays + 6 weeks + borders)
                Constraint::Min(5),     // selected day + help
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_calendar(f, chunks[1]);
        self.render_footer(f, chunks[2]);

        if self.state.is_modal_open() {
            self.render_modal(f, size);
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            self.settings.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, area);
    }

    fn render_calendar(&self, f: &mut Frame, area: Rect) {
        let year = self.cursor.year();
        let month = self.cursor.month();
        let markers = project(self.state.store(), self.state.selected_date());

        let title = format!(" {} {} ", self.strings.month_name(month), year);
        let header: String = self
            .strings
            .weekday_header(self.settings.week_start)
            .iter()
            .map(|d| format!(" {:>2} ", d))
            .collect();

        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            header,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))];

        let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return;
        };
        let days_in_month = days_in_month(year, month);
        let start_col = weekday_column(first_of_month.weekday(), self.settings.week_start);

        let mut spans = vec![Span::raw("    "); start_col];
        let mut col = start_col;
        for day in 1..=days_in_month {
            let Some(key) = CalendarDate::from_ymd(year, month, day) else {
                continue;
            };
            let date = key.date();
            let marker = markers.get(&key).copied();
            let style = day_cell_style(marker, date == self.today, date == self.cursor);
            spans.push(Span::styled(format!(" {:>2}", day), style));
            spans.push(marker_span(marker));
            col += 1;
            if col == 7 {
                lines.push(Line::from(std::mem::take(&mut spans)));
                col = 0;
            }
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }

        let grid_width = (7 * 4 + 2) as u16;
        let rect = Rect::new(
            area.x + area.width.saturating_sub(grid_width) / 2,
            area.y,
            grid_width.min(area.width),
            area.height,
        );
        let calendar = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
                .title_alignment(Alignment::Center),
        );
        f.render_widget(calendar, rect);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        if let Some(date) = self.state.selected_date() {
            let summary = match self.state.store().lookup(date) {
                Some(record) if record.note.is_empty() => format!(
                    "{}  {} {}",
                    date,
                    record.mood,
                    self.strings.mood_label(record.mood)
                ),
                Some(record) => format!(
                    "{}  {} {}: {}",
                    date,
                    record.mood,
                    self.strings.mood_label(record.mood),
                    record.note
                ),
                None => format!("{}  -", date),
            };
            lines.push(Line::from(summary));
        }

        lines.push(Line::from(Span::styled(
            format!(
                "{}: {}    {} {}",
                self.strings.today,
                CalendarDate::new(self.today),
                self.state.store().len(),
                self.strings.entries
            ),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "←↑↓→ move   Enter select   n/p month   t today   q quit",
            Style::default().fg(Color::DarkGray),
        )));

        let footer = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(footer, area);
    }

    fn render_modal(&self, f: &mut Frame, area: Rect) {
        let (Some(date), Some(draft)) = (self.state.selected_date(), self.state.draft()) else {
            return;
        };

        let focused = |field: Focus| {
            let s = Style::default().add_modifier(Modifier::BOLD);
            if self.focus == field {
                s.add_modifier(Modifier::UNDERLINED)
            } else {
                s
            }
        };

        let mut mood_spans = Vec::new();
        for (i, mood) in Mood::ALL.iter().enumerate() {
            let style = if draft.mood == Some(*mood) {
                Style::default().bg(ACCENT).fg(Color::White)
            } else {
                Style::default()
            };
            mood_spans.push(Span::styled(format!(" {} {} ", i + 1, mood.glyph()), style));
            mood_spans.push(Span::raw(" "));
        }

        let note_line = if draft.note.is_empty() && self.focus != Focus::Note {
            Line::from(Span::styled(
                self.strings.note_placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            let cursor = if self.focus == Focus::Note { "▏" } else { "" };
            Line::from(format!("{}{}", draft.note, cursor))
        };

        let notice_line = match &self.notice {
            Some(msg) => Line::from(Span::styled(
                msg.clone(),
                Style::default()
                    .fg(NOTICE_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(""),
        };

        let lines = vec![
            Line::from(Span::styled(self.strings.mood_prompt, focused(Focus::Mood))),
            Line::from(mood_spans),
            Line::from(""),
            Line::from(Span::styled(self.strings.note_prompt, focused(Focus::Note))),
            note_line,
            Line::from(""),
            notice_line,
            Line::from(Span::styled(
                format!(
                    "[Esc] {}   [Tab] ↹   [Enter] {}",
                    self.strings.close, self.strings.save
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let rect = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        let modal = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(Span::styled(
                    format!(" {}: {} ", self.strings.day_prefix, date),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center),
        );
        f.render_widget(Clear, rect);
        f.render_widget(modal, rect);
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code, key.modifiers) {
                    break;
                }
            }
        }
    }
    Ok(())
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 0,
    }
}

pub(crate) fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let year = date.year();
    let month = date.month() as i32;
    let new_total = month - 1 + months;
    let new_month = (new_total.rem_euclid(12) + 1) as u32;
    let new_year = year + new_total.div_euclid(12);
    let max_day = days_in_month(new_year, new_month);
    let new_day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

/// Style for a day number. The selection ring wins over the dot, and the
/// keyboard cursor is layered on top of either.
pub(crate) fn day_cell_style(marker: Option<Marker>, is_today: bool, is_cursor: bool) -> Style {
    let mut s = match marker.map(Marker::style) {
        Some(MarkerStyle::Ring) => Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        Some(MarkerStyle::Dot) | None if is_today => {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        }
        Some(MarkerStyle::Dot) | None => Style::default(),
    };
    if is_cursor {
        s = s.add_modifier(Modifier::REVERSED);
    }
    s
}

/// The trailing column after a day number: a dot for days with a record.
fn marker_span(marker: Option<Marker>) -> Span<'static> {
    match marker {
        Some(m) if m.marked => Span::styled("•", Style::default().fg(ACCENT)),
        _ => Span::raw(" "),
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}
