use crate::data::{CalendarDate, RecordStore};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    Dot,
    Ring,
}

/// Highlight facts for one calendar day. Both may hold at once; the
/// selection ring is drawn over the dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Marker {
    pub marked: bool,
    pub selected: bool,
}

impl Marker {
    pub fn style(self) -> MarkerStyle {
        if self.selected {
            MarkerStyle::Ring
        } else {
            MarkerStyle::Dot
        }
    }
}

/// Builds the calendar highlight map: a dot for every stored day and a
/// selection ring for `selected`, whether or not it has a record.
pub fn project(
    store: &RecordStore,
    selected: Option<CalendarDate>,
) -> BTreeMap<CalendarDate, Marker> {
    let mut markers: BTreeMap<CalendarDate, Marker> = store
        .dates()
        .map(|date| {
            (
                date,
                Marker {
                    marked: true,
                    selected: false,
                },
            )
        })
        .collect();
    if let Some(date) = selected {
        markers.entry(date).or_default().selected = true;
    }
    markers
}
