//! Shared constructors for unit tests.

use crate::CalendarDate;

pub fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day)
        .unwrap_or_else(|e| panic!("test date {year}-{month}-{day} is invalid: {e}"))
}

pub fn parse(s: &str) -> CalendarDate {
    s.parse()
        .unwrap_or_else(|e| panic!("test date {s:?} failed to parse: {e}"))
}

pub fn range(start: CalendarDate, end: CalendarDate) -> crate::DateRange {
    crate::DateRange::new(start, end)
        .unwrap_or_else(|e| panic!("test range {start}/{end} is invalid: {e}"))
}
