use crate::data::{CalendarDate, Draft, EditSession, Mood, RecordStore};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing mood")]
    MissingMood,
}

/// A discrete user-interface event fed to the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectDay(CalendarDate),
    SetMood(Mood),
    ClearMood,
    SetNote(String),
    Save,
    Cancel,
}

/// Owned screen state: committed records plus the current edit session.
/// All mutation goes through the transition methods below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalState {
    store: RecordStore,
    session: EditSession,
}

impl JournalState {
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.session.selected_date()
    }

    pub fn is_modal_open(&self) -> bool {
        self.session.is_modal_open()
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.session.draft()
    }

    /// Opens the editor for `date`, replacing any unsaved draft. The draft is
    /// hydrated from the stored record when one exists.
    pub fn select_day(&mut self, date: CalendarDate) {
        let draft = self
            .store
            .lookup(date)
            .map(Draft::from_record)
            .unwrap_or_default();
        debug!(%date, hydrated = draft.mood.is_some(), "day selected");
        self.session = EditSession::Editing { date, draft };
    }

    pub fn set_draft_mood(&mut self, mood: Mood) {
        if let Some(draft) = self.session.draft_mut() {
            draft.mood = Some(mood);
        }
    }

    pub fn clear_draft_mood(&mut self) {
        if let Some(draft) = self.session.draft_mut() {
            draft.mood = None;
        }
    }

    pub fn set_draft_note(&mut self, text: &str) {
        if let Some(draft) = self.session.draft_mut() {
            draft.note = text.to_string();
        }
    }

    /// Commits the draft for the selected date and closes the editor.
    ///
    /// Without a draft mood nothing changes and `MissingMood` is returned.
    /// Outside of editing this is a no-op.
    pub fn save(&mut self) -> Result<(), ValidationError> {
        let EditSession::Editing { date, draft } = &self.session else {
            return Ok(());
        };
        let date = *date;
        let Some(record) = draft.to_record() else {
            warn!(%date, "save rejected: no mood selected");
            return Err(ValidationError::MissingMood);
        };
        debug!(%date, mood = %record.mood, note_len = record.note.len(), "record saved");
        self.store.upsert(date, record);
        self.session = EditSession::Idle {
            selected: Some(date),
        };
        Ok(())
    }

    /// Closes the editor and drops the draft. The store is never touched.
    pub fn cancel(&mut self) {
        if let EditSession::Editing { date, .. } = self.session {
            debug!(%date, "edit cancelled");
            self.session = EditSession::Idle {
                selected: Some(date),
            };
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), ValidationError> {
        match action {
            Action::SelectDay(date) => self.select_day(date),
            Action::SetMood(mood) => self.set_draft_mood(mood),
            Action::ClearMood => self.clear_draft_mood(),
            Action::SetNote(text) => self.set_draft_note(&text),
            Action::Save => return self.save(),
            Action::Cancel => self.cancel(),
        }
        Ok(())
    }
}

/// Pure transition: the next state for `action`, leaving `state` untouched.
pub fn update(state: &JournalState, action: Action) -> Result<JournalState, ValidationError> {
    let mut next = state.clone();
    next.dispatch(action)?;
    Ok(next)
}
