mod consts;
mod diff;
mod next;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use diff::{days_between, days_between_optimized};
pub use next::next;
pub use range::{DateRange, DateRangeIter, RangeError};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A single day of the proleptic Gregorian calendar.
///
/// Every component is validated on construction, so a `CalendarDate` never
/// names a day past the end of its month. Ordering is lexicographic over
/// (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", year, "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Broad classification of a [`CalendarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A year, month or day outside its valid range.
    InvalidArgument,
    /// Text that is not a `YYYY-MM-DD` date.
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid year: {0} (must be {min}..={max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Empty date string")]
    EmptyInput,
}

impl CalendarError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::InvalidFormat(_) | Self::EmptyInput => ErrorKind::Parse,
        }
    }
}

impl CalendarDate {
    /// Creates a date from raw components, validating each against the calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear`, `InvalidMonth` or `InvalidDay`
    /// for the first component that is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year_nz = Year::new(year)?;
        let month_nz = Month::new(month)?;
        let day_nz = Day::new(day, year, month)?;
        Ok(Self {
            year:  year_nz,
            month: month_nz,
            day:   day_nz,
        })
    }

    /// Assembles a date from components the caller has already checked together.
    pub(crate) const fn from_valid(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year component (as i32 for convenience)
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Number of days in this date's month.
    pub const fn days_in_month(&self) -> u8 {
        types::month_length(self.year(), self.month())
    }

    /// The following calendar day. See [`next`].
    pub fn next_day(self) -> Option<Self> {
        next::next(self)
    }

    /// Day distance to `other` by stepping one day at a time. See [`days_between`].
    pub fn days_between(self, other: Self) -> i32 {
        diff::days_between(self, other)
    }

    /// Day distance to `other` by month and year arithmetic. See [`days_between_optimized`].
    pub fn days_between_optimized(self, other: Self) -> i32 {
        diff::days_between_optimized(self, other)
    }

    /// Converts to a plain (year, month, day) triple
    pub const fn to_parts(&self) -> (i32, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Accepts only ASCII digits, so signs inside a component are rejected.
    fn parse_component<T: FromStr>(part: &str) -> Result<T, CalendarError> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalendarError::InvalidFormat(part.to_owned()));
        }
        part.parse::<T>()
            .map_err(|_| CalendarError::InvalidFormat(part.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, with an optional `+` or `-` before the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).collect();
        let [year_str, month_str, day_str] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} components: {s}",
                parts.len()
            )));
        };

        let magnitude = Self::parse_component::<i32>(year_str)?;
        let year = if negative { -magnitude } else { magnitude };
        let month = Self::parse_component::<u8>(month_str)?;
        let day = Self::parse_component::<u8>(day_str)?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = CalendarError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        date.to_parts()
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_valid() {
        let d = CalendarDate::new(2024, 2, 29).unwrap();
        assert_eq!(d.year(), 2024);
        assert_eq!(d.month(), 2);
        assert_eq!(d.day(), 29);
        assert_eq!(d.year_typed(), Year::new(2024).unwrap());
        assert_eq!(d.month_typed(), Month::new(2).unwrap());
        assert_eq!(d.day_typed(), Day::new(29, 2024, 2).unwrap());
        assert_eq!(d.days_in_month(), 29);
    }

    #[test]
    fn test_new_rejects_invalid_components() {
        struct TestCase {
            parts:       (i32, u8, u8),
            expected:    CalendarError,
            description: &'static str,
        }

        let cases = [
            TestCase {
                parts:       (2024, 0, 1),
                expected:    CalendarError::InvalidMonth(0),
                description: "month zero",
            },
            TestCase {
                parts:       (2024, 13, 1),
                expected:    CalendarError::InvalidMonth(13),
                description: "month thirteen",
            },
            TestCase {
                parts:       (2024, 1, 0),
                expected:    CalendarError::InvalidDay {
                    year:  2024,
                    month: 1,
                    day:   0,
                },
                description: "day zero",
            },
            TestCase {
                parts:       (2023, 2, 29),
                expected:    CalendarError::InvalidDay {
                    year:  2023,
                    month: 2,
                    day:   29,
                },
                description: "leap day in a common year",
            },
            TestCase {
                parts:       (1900, 2, 29),
                expected:    CalendarError::InvalidDay {
                    year:  1900,
                    month: 2,
                    day:   29,
                },
                description: "leap day in a century year",
            },
            TestCase {
                parts:       (2024, 4, 31),
                expected:    CalendarError::InvalidDay {
                    year:  2024,
                    month: 4,
                    day:   31,
                },
                description: "31st of a 30-day month",
            },
            TestCase {
                parts:       (MAX_YEAR + 1, 1, 1),
                expected:    CalendarError::InvalidYear(MAX_YEAR + 1),
                description: "year past the supported range",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.parts;
            let result = CalendarDate::new(y, m, d);
            assert_eq!(result, Err(case.expected.clone()), "{}", case.description);
            assert_eq!(
                case.expected.kind(),
                ErrorKind::InvalidArgument,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_leap_day_century_rule() {
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(2004, 2, 29).is_ok());
        assert!(CalendarDate::new(0, 2, 29).is_ok());
        assert!(CalendarDate::new(-100, 2, 29).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
        assert!(date(-1, 12, 31) < date(0, 1, 1));
        assert_eq!(date(2024, 5, 5), date(2024, 5, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1991, 8, 15).to_string(), "1991-08-15");
        assert_eq!(date(2024, 12, 1).to_string(), "2024-12-01");
        assert_eq!(date(5, 1, 1).to_string(), "0005-01-01");
        assert_eq!(date(-44, 3, 15).to_string(), "-0044-03-15");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!("1991-08-15".parse::<CalendarDate>().unwrap(), date(1991, 8, 15));
        assert_eq!(" 2024-02-29 ".parse::<CalendarDate>().unwrap(), date(2024, 2, 29));
        assert_eq!("-0044-03-15".parse::<CalendarDate>().unwrap(), date(-44, 3, 15));
        assert_eq!("+2024-01-01".parse::<CalendarDate>().unwrap(), date(2024, 1, 1));
        assert_eq!("0000-01-01".parse::<CalendarDate>().unwrap(), date(0, 1, 1));
        assert_eq!("123456-7-4".parse::<CalendarDate>().unwrap(), date(123_456, 7, 4));
    }

    #[test]
    fn test_parse_display_agree() {
        for d in [date(1991, 8, 15), date(0, 2, 29), date(-9999, 12, 31), date(MAX_YEAR, 12, 31)] {
            assert_eq!(d.to_string().parse::<CalendarDate>().unwrap(), d);
        }
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<CalendarDate>(), Err(CalendarError::EmptyInput));
        assert_eq!("   ".parse::<CalendarDate>(), Err(CalendarError::EmptyInput));
    }

    #[test]
    fn test_parse_bad_format() {
        for input in [
            "2024",
            "2024-01",
            "2024-01-01-01",
            "2024/01/01",
            "2024-XX-01",
            "2024-01-+1",
            "2024--01",
            "--2024-01-01",
            "99999999999-01-01",
        ] {
            let result = input.parse::<CalendarDate>();
            assert!(
                matches!(result, Err(CalendarError::InvalidFormat(_))),
                "{input:?} should be rejected as a format error, got {result:?}"
            );
            assert_eq!(result.unwrap_err().kind(), ErrorKind::Parse);
        }
    }

    #[test]
    fn test_parse_invalid_values() {
        assert!(matches!(
            "2024-13-01".parse::<CalendarDate>(),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert!(matches!(
            "1000000-01-01".parse::<CalendarDate>(),
            Err(CalendarError::InvalidYear(1_000_000))
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CalendarError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            CalendarError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            }
            .to_string(),
            "Invalid day 29 for month 2023-02"
        );
        assert_eq!(
            CalendarError::InvalidYear(1_000_000).to_string(),
            "Invalid year: 1000000 (must be -999999..=999999)"
        );
    }

    #[test]
    fn test_triples() {
        let d: CalendarDate = (2024, 2, 29).try_into().unwrap();
        assert_eq!(d, date(2024, 2, 29));

        let parts: (i32, u8, u8) = d.into();
        assert_eq!(parts, (2024, 2, 29));

        let result: Result<CalendarDate, _> = (2024, 2, 30).try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_methods_delegate() {
        let d = date(2024, 2, 28);
        assert_eq!(d.next_day(), Some(date(2024, 2, 29)));
        assert_eq!(d.days_between(date(2024, 3, 1)), 2);
        assert_eq!(d.days_between_optimized(date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(1991, 8, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-13-01""#);
        assert!(result.is_err());

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalendarDate>();
        assert_send_sync::<CalendarError>();
        assert_send_sync::<DateRange>();
    }
}
