use crate::data::{CalendarDate, Mood};
use std::collections::HashMap;

/// The committed entry for one calendar day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyRecord {
    pub mood: Mood,
    pub note: String,
}

impl DailyRecord {
    pub fn new(mood: Mood, note: &str) -> Self {
        DailyRecord {
            mood,
            note: note.to_string(),
        }
    }
}

/// Session-scoped date → record mapping. Entries are only ever added or
/// replaced; there is no removal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: HashMap<CalendarDate, DailyRecord>,
}

impl RecordStore {
    pub fn lookup(&self, date: CalendarDate) -> Option<&DailyRecord> {
        self.records.get(&date)
    }

    /// Inserts or replaces the record for `date`. No validation happens here.
    pub fn upsert(&mut self, date: CalendarDate, record: DailyRecord) {
        self.records.insert(date, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys in no particular order.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.records.keys().copied()
    }
}
