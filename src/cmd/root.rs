use crate::data::{AppSettings, CalendarDate};
use crate::ui::calendar_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;
use tracing::info;

pub fn run(settings: AppSettings, start: Option<CalendarDate>) -> Result<()> {
    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let start = start.map(CalendarDate::date).unwrap_or(today);
    info!(%today, %start, locale = ?settings.locale, "journal screen opened");
    let mut app = App::new(settings, today, start);

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    // Records are session-scoped; nothing is written back.
    info!(
        records = app.state().store().len(),
        "journal screen closed, session discarded"
    );

    result
}
