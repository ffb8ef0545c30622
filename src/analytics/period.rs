//! Reporting periods and their inclusive UTC date ranges

use chrono::{Days, NaiveDate, Utc};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
pub enum Period {
    #[strum(serialize = "today")]
    Today,
    #[default]
    #[strum(serialize = "7d")]
    Last7Days,
    #[strum(serialize = "30d")]
    Last30Days,
    #[strum(serialize = "custom")]
    Custom,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Last7Days => "Last 7 days",
            Period::Last30Days => "Last 30 days",
            Period::Custom => "Custom",
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Period::Today => Period::Last7Days,
            Period::Last7Days => Period::Last30Days,
            Period::Last30Days => Period::Custom,
            Period::Custom => Period::Today,
        }
    }

    /// Range ending on `today`. `Custom` has no implied range.
    pub fn range_ending(&self, today: NaiveDate) -> Option<DateRange> {
        let days_back = match self {
            Period::Today => 0,
            Period::Last7Days => 6,
            Period::Last30Days => 29,
            Period::Custom => return None,
        };
        let start = today.checked_sub_days(Days::new(days_back)).unwrap_or(today);
        Some(DateRange { start, end: today })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse a custom range; both ends must be `YYYY-MM-DD`.
    pub fn parse(start: &str, end: &str) -> Option<DateRange> {
        let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT).ok()?;
        let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).ok()?;
        Some(DateRange { start, end })
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_ranges() {
        let today = d("2024-03-01");
        let r = Period::Today.range_ending(today).unwrap();
        assert_eq!((r.start_str(), r.end_str()), ("2024-03-01".into(), "2024-03-01".into()));

        let r = Period::Last7Days.range_ending(today).unwrap();
        assert_eq!(r.start_str(), "2024-02-24");

        // leap year
        let r = Period::Last30Days.range_ending(today).unwrap();
        assert_eq!(r.start_str(), "2024-01-31");

        assert!(Period::Custom.range_ending(today).is_none());
    }

    #[test]
    fn test_parse_custom_range() {
        let r = DateRange::parse("2024-05-01", " 2024-05-09 ").unwrap();
        assert_eq!(r.end, d("2024-05-09"));
        assert!(DateRange::parse("2024-05-01", "").is_none());
        assert!(DateRange::parse("05/01/2024", "2024-05-09").is_none());
    }

    #[test]
    fn test_period_names() {
        assert_eq!("30d".parse::<Period>().unwrap(), Period::Last30Days);
        assert_eq!(Period::Today.to_string(), "today");
        assert_eq!(Period::Custom.cycle(), Period::Today);
    }
}
