pub mod app_settings;
pub mod calendar_date;
pub mod edit_session;
pub mod mood;
pub mod persistence;
pub mod record_store;

pub use app_settings::{AppSettings, Locale, WeekStart};
pub use calendar_date::CalendarDate;
pub use edit_session::{Draft, EditSession};
pub use mood::Mood;
pub use persistence::Persistable;
pub use record_store::{DailyRecord, RecordStore};
