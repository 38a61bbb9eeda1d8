#![deny(warnings)]

use chrono::Datelike;

pub type DateTime = chrono::NaiveDateTime;
pub type Date = chrono::NaiveDate;
pub type Duration = chrono::Duration;


// Granularities the timex factory recognizes. Ordering reflects unit size.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Grain {
    Minute,
    Day,
    Week,
    Month,
}

impl Grain {
    /// Strict full-string parse of `text`, anchored to the first instant of
    /// the matched unit. Month and week tokens carry no day field, so a
    /// synthetic suffix pins the anchor: "-01" for months, ISO weekday "-1"
    /// (Monday) for weeks. Weeks follow the ISO-8601 week-date convention,
    /// week 1 being the one holding the year's first Thursday.
    pub fn parse_start(&self, text: &str) -> Option<DateTime> {
        // chrono's parse_from_str skips whitespace and accepts a sign ahead
        // of numeric fields; every recognized token starts with a year digit
        // and carries no whitespace at all
        if !text.as_bytes().first().map_or(false, u8::is_ascii_digit)
            || text.contains(char::is_whitespace)
        {
            return None;
        }
        match self {
            Grain::Month => Date::parse_from_str(&format!("{}-01", text), "%Y-%m-%d")
                .ok()
                .map(|d| d.and_hms(0, 0, 0)),
            Grain::Week => Date::parse_from_str(&format!("{}-1", text), "%G-W%V-%u")
                .ok()
                .map(|d| d.and_hms(0, 0, 0)),
            Grain::Day => Date::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_hms(0, 0, 0)),
            Grain::Minute => DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M").ok(),
        }
    }

    /// First instant of the unit following the one anchored at `start`.
    /// `start` must itself be a unit anchor (which parse_start guarantees).
    pub fn next_start(&self, start: DateTime) -> DateTime {
        match self {
            Grain::Month => {
                let (y, m) = match start.month() {
                    12 => (start.year() + 1, 1),
                    m => (start.year(), m + 1),
                };
                Date::from_ymd(y, m, 1).and_hms(0, 0, 0)
            }
            Grain::Week => start + Duration::weeks(1),
            Grain::Day => start + Duration::days(1),
            Grain::Minute => start + Duration::minutes(1),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn dt(year: i32, month: u32, day: u32) -> DateTime {
        Date::from_ymd(year, month, day).and_hms(0, 0, 0)
    }

    #[test]
    fn test_parse_anchors() {
        assert_eq!(Grain::Month.parse_start("2017-11"), Some(dt(2017, 11, 1)));
        // ISO week 45 of 2017 starts on monday november 6th
        assert_eq!(Grain::Week.parse_start("2017-W45"), Some(dt(2017, 11, 6)));
        assert_eq!(Grain::Day.parse_start("2017-11-05"), Some(dt(2017, 11, 5)));
        assert_eq!(
            Grain::Minute.parse_start("2017-02-04T13:55"),
            Some(Date::from_ymd(2017, 2, 4).and_hms(13, 55, 0))
        );
    }

    #[test]
    fn test_parse_is_strict() {
        // trailing or leading garbage must fail, never prefix-match
        assert_eq!(Grain::Day.parse_start("2017-11-05 "), None);
        assert_eq!(Grain::Day.parse_start(" 2017-11-05"), None);
        assert_eq!(Grain::Month.parse_start(" 2017-11"), None);
        assert_eq!(Grain::Month.parse_start("2017- 11"), None);
        assert_eq!(Grain::Month.parse_start("+2017-11"), None);
        assert_eq!(Grain::Month.parse_start("2017-11-05"), None);
        assert_eq!(Grain::Week.parse_start("2017-W45-1"), None);
        assert_eq!(Grain::Minute.parse_start("2017-02-04T13:55:22"), None);
        // calendar-invalid fields
        assert_eq!(Grain::Month.parse_start("2017-13"), None);
        assert_eq!(Grain::Day.parse_start("2017-02-30"), None);
    }

    #[test]
    fn test_next_start() {
        assert_eq!(Grain::Month.next_start(dt(2017, 11, 1)), dt(2017, 12, 1));
        // year rollover and leap february
        assert_eq!(Grain::Month.next_start(dt(2017, 12, 1)), dt(2018, 1, 1));
        assert_eq!(Grain::Month.next_start(dt(2016, 2, 1)), dt(2016, 3, 1));
        assert_eq!(Grain::Week.next_start(dt(2017, 11, 6)), dt(2017, 11, 13));
        assert_eq!(Grain::Day.next_start(dt(2017, 12, 31)), dt(2018, 1, 1));
        assert_eq!(
            Grain::Minute.next_start(Date::from_ymd(2017, 2, 4).and_hms(23, 59, 0)),
            dt(2017, 2, 5)
        );
    }
}
