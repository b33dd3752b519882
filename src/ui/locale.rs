use crate::data::{Locale, Mood, WeekStart};
use chrono::Weekday;

/// User-facing text for one locale.
pub struct Strings {
    pub months: [&'static str; 12],
    /// Two-letter weekday headers, Sunday first.
    pub weekdays_short: [&'static str; 7],
    pub today: &'static str,
    pub day_prefix: &'static str,
    pub mood_prompt: &'static str,
    pub note_prompt: &'static str,
    pub note_placeholder: &'static str,
    pub close: &'static str,
    pub save: &'static str,
    pub missing_mood: &'static str,
    pub entries: &'static str,
    pub mood_labels: [&'static str; 5],
}

const ES: Strings = Strings {
    months: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
    weekdays_short: ["Do", "Lu", "Ma", "Mi", "Ju", "Vi", "Sá"],
    today: "Hoy",
    day_prefix: "Día",
    mood_prompt: "¿Cómo te sientes hoy?",
    note_prompt: "¿Por qué?",
    note_placeholder: "Escribe una pequeña nota...",
    close: "Cerrar",
    save: "Guardar",
    missing_mood: "¡Selecciona cómo te sientes primero!",
    entries: "registros",
    mood_labels: ["Feliz", "Tranquilo", "Neutral", "Triste", "Enojado"],
};

const EN: Strings = Strings {
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    weekdays_short: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    today: "Today",
    day_prefix: "Day",
    mood_prompt: "How are you feeling today?",
    note_prompt: "Why?",
    note_placeholder: "Write a short note...",
    close: "Close",
    save: "Save",
    missing_mood: "Pick how you feel first!",
    entries: "entries",
    mood_labels: ["Happy", "Calm", "Neutral", "Sad", "Angry"],
};

pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
    }
}

impl Strings {
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1..=12 => self.months[(month - 1) as usize],
            _ => "?",
        }
    }

    pub fn mood_label(&self, mood: Mood) -> &'static str {
        self.mood_labels[mood.index()]
    }

    /// Weekday headers in display order for `week_start`.
    pub fn weekday_header(&self, week_start: WeekStart) -> Vec<&'static str> {
        let offset = first_column(week_start);
        (0..7).map(|i| self.weekdays_short[(i + offset) % 7]).collect()
    }
}

/// Grid column of `weekday` when weeks begin on `week_start`.
pub fn weekday_column(weekday: Weekday, week_start: WeekStart) -> usize {
    match week_start {
        WeekStart::Sunday => weekday.num_days_from_sunday() as usize,
        WeekStart::Monday => weekday.num_days_from_monday() as usize,
    }
}

fn first_column(week_start: WeekStart) -> usize {
    match week_start {
        WeekStart::Sunday => 0,
        WeekStart::Monday => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_name_spanish_default() {
        let s = strings(Locale::Es);
        assert_eq!(s.month_name(1), "Enero");
        assert_eq!(s.month_name(12), "Diciembre");
    }

    #[test]
    fn test_month_name_out_of_range() {
        assert_eq!(strings(Locale::En).month_name(0), "?");
        assert_eq!(strings(Locale::En).month_name(13), "?");
    }

    #[test]
    fn test_weekday_header_sunday_first() {
        let header = strings(Locale::En).weekday_header(WeekStart::Sunday);
        assert_eq!(header, vec!["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]);
    }

    #[test]
    fn test_weekday_header_monday_first() {
        let header = strings(Locale::Es).weekday_header(WeekStart::Monday);
        assert_eq!(header, vec!["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"]);
    }

    #[test]
    fn test_weekday_column() {
        assert_eq!(weekday_column(Weekday::Sun, WeekStart::Sunday), 0);
        assert_eq!(weekday_column(Weekday::Sun, WeekStart::Monday), 6);
        assert_eq!(weekday_column(Weekday::Mon, WeekStart::Monday), 0);
    }

    #[test]
    fn test_mood_labels_follow_mood_order() {
        let s = strings(Locale::En);
        assert_eq!(s.mood_label(Mood::Elated), "Happy");
        assert_eq!(s.mood_label(Mood::Angry), "Angry");
    }
}
