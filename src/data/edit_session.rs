use crate::data::{CalendarDate, DailyRecord, Mood};

/// Scratch values for the record being edited. Never visible outside the
/// session until saved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub mood: Option<Mood>,
    pub note: String,
}

impl Draft {
    pub fn from_record(record: &DailyRecord) -> Self {
        Draft {
            mood: Some(record.mood),
            note: record.note.clone(),
        }
    }

    /// The record this draft would commit, or `None` while no mood is chosen.
    pub fn to_record(&self) -> Option<DailyRecord> {
        self.mood.map(|mood| DailyRecord::new(mood, &self.note))
    }
}

/// Selection and modal state. The modal is open exactly when the session is
/// `Editing`, which always carries a date and a draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditSession {
    Idle { selected: Option<CalendarDate> },
    Editing { date: CalendarDate, draft: Draft },
}

impl Default for EditSession {
    fn default() -> Self {
        EditSession::Idle { selected: None }
    }
}

impl EditSession {
    pub fn selected_date(&self) -> Option<CalendarDate> {
        match self {
            EditSession::Idle { selected } => *selected,
            EditSession::Editing { date, .. } => Some(*date),
        }
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditSession::Idle { .. } => None,
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            EditSession::Idle { .. } => None,
            EditSession::Editing { draft, .. } => Some(draft),
        }
    }
}
