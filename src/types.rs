use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DECEMBER, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A proleptic Gregorian year in the range `MIN_YEAR..=MAX_YEAR`.
/// Year 0 and negative years are ordinary values (astronomical numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a new Year, validating that it lies within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is out of range.
    pub fn new(value: i32) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(CalendarError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }

    /// The following year, or `None` past `MAX_YEAR`.
    pub(crate) const fn succ(self) -> Option<Self> {
        if self.0 >= MAX_YEAR {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }
}

impl TryFrom<i32> for Year {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{:04}", self.0.unsigned_abs())
        } else {
            write!(f, "{:04}", self.0)
        }
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub(crate) const JANUARY: Self = Self(NonZeroU8::MIN);

    /// The following month of the same year, or `None` after December.
    pub(crate) fn succ(self) -> Option<Self> {
        if self.get() == DECEMBER {
            None
        } else {
            NonZeroU8::new(self.get() + 1).map(Self)
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if `month` is out of range, or
    /// `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidDay {
            year,
            month,
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        let max_day = days_in_month(year, month)?;
        if value > max_day {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// First day of any month.
    pub(crate) const FIRST: Self = Self(NonZeroU8::MIN);

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The following day number. The caller checks it against the month length.
    pub(crate) fn succ(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Calendar rules

/// Proleptic Gregorian leap-year rule, applied uniformly to every year
/// including 0 and negative years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    let month = Month::new(month)?;
    Ok(month_length(year, month.get()))
}

/// Number of days in `year`: 366 for leap years, 365 otherwise.
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Unchecked month length for callers holding an already validated month.
pub(crate) const fn month_length(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
