use std::fmt;

/// One of the five fixed mood glyphs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Elated,
    Calm,
    Neutral,
    Sad,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Elated,
        Mood::Calm,
        Mood::Neutral,
        Mood::Sad,
        Mood::Angry,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Mood::Elated => "😁",
            Mood::Calm => "😌",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Angry => "😡",
        }
    }

    /// Zero-based position in `Mood::ALL`.
    pub fn index(self) -> usize {
        match self {
            Mood::Elated => 0,
            Mood::Calm => 1,
            Mood::Neutral => 2,
            Mood::Sad => 3,
            Mood::Angry => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Mood> {
        Mood::ALL.get(index).copied()
    }

    /// Next mood to the right, wrapping around.
    pub fn next(self) -> Mood {
        Mood::ALL[(self.index() + 1) % Mood::ALL.len()]
    }

    /// Next mood to the left, wrapping around.
    pub fn prev(self) -> Mood {
        Mood::ALL[(self.index() + Mood::ALL.len() - 1) % Mood::ALL.len()]
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}
