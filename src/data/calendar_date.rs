use chrono::{NaiveDate, ParseError};
use std::fmt;
use std::str::FromStr;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day, keyed and displayed as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(date: NaiveDate) -> Self {
        CalendarDate(date)
    }

    /// Returns `None` for an impossible date such as Feb 30.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(CalendarDate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_iso_format() {
        let d = CalendarDate::from_ymd(2024, 5, 1).unwrap();
        assert_eq!(d.to_string(), "2024-05-01");
    }

    #[test]
    fn test_parse_valid_date() {
        let d: CalendarDate = "2024-06-10".parse().unwrap();
        assert_eq!(d.date(), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert!("2025-02-30".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!("10/06/2024".parse::<CalendarDate>().is_err());
        assert!("2024-06-10T00:00:00".parse::<CalendarDate>().is_err());
        assert!("".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_from_ymd_invalid_returns_none() {
        assert!(CalendarDate::from_ymd(2025, 13, 1).is_none());
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let a = CalendarDate::from_ymd(2024, 12, 31).unwrap();
        let b = CalendarDate::from_ymd(2025, 1, 1).unwrap();
        assert!(a < b);
    }
}
