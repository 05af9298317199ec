//! Day distance between two calendar dates.
//!
//! Both functions return the unsigned distance regardless of argument order:
//! `days_between(a, b) == days_between(b, a)`.

use crate::consts::{JANUARY, MAX_MONTH};
use crate::types::{days_in_year, month_length};
use crate::CalendarDate;

/// Orders the pair ascending.
fn ordered(a: CalendarDate, b: CalendarDate) -> (CalendarDate, CalendarDate) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

/// Counts the days from the earlier of `a` and `b` to the later by stepping
/// with [`next`](crate::next) one day at a time.
///
/// Runs in time proportional to the distance; intended as the reference for
/// [`days_between_optimized`].
pub fn days_between(a: CalendarDate, b: CalendarDate) -> i32 {
    if a == b {
        return 0;
    }
    let (lo, hi) = ordered(a, b);
    log::trace!("days_between: stepping from {lo} to {hi}");

    let mut cursor = lo;
    let mut days = 0;
    while cursor != hi {
        match crate::next(cursor) {
            Some(following) => cursor = following,
            None => break,
        }
        days += 1;
    }
    days
}

/// Same result as [`days_between`], computed from month lengths and year
/// lengths instead of single steps. Runs in time proportional to the year span.
pub fn days_between_optimized(a: CalendarDate, b: CalendarDate) -> i32 {
    let (lo, hi) = ordered(a, b);
    log::trace!("days_between_optimized: {lo} to {hi}");

    if lo.year() == hi.year() && lo.month() == hi.month() {
        within_month(lo, hi)
    } else if lo.year() == hi.year() {
        within_year(lo, hi)
    } else {
        across_years(lo, hi)
    }
}

fn within_month(lo: CalendarDate, hi: CalendarDate) -> i32 {
    i32::from(hi.day()) - i32::from(lo.day())
}

fn within_year(lo: CalendarDate, hi: CalendarDate) -> i32 {
    remaining_in_month(lo) + full_months(lo.year(), lo.month() + 1..hi.month()) + i32::from(hi.day())
}

fn across_years(lo: CalendarDate, hi: CalendarDate) -> i32 {
    let full_years: i32 = (lo.year() + 1..hi.year())
        .map(|year| i32::from(days_in_year(year)))
        .sum();

    remaining_in_month(lo)
        + full_months(lo.year(), lo.month() + 1..=MAX_MONTH)
        + full_years
        + full_months(hi.year(), JANUARY..hi.month())
        + i32::from(hi.day())
}

/// Days left in the month after `date`.
fn remaining_in_month(date: CalendarDate) -> i32 {
    i32::from(date.days_in_month()) - i32::from(date.day())
}

fn full_months(year: i32, months: impl Iterator<Item = u8>) -> i32 {
    months.map(|month| i32::from(month_length(year, month))).sum()
}
