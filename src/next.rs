use crate::types::{Day, Month, month_length};
use crate::CalendarDate;

/// Returns the calendar date immediately following `date`.
///
/// Rolls the day over into the next month on the month's last day, and into
/// January of the next year on December 31st. Returns `None` only for
/// December 31st of `MAX_YEAR`, whose successor lies outside the supported range.
pub fn next(date: CalendarDate) -> Option<CalendarDate> {
    let (year, month, day) = (date.year_typed(), date.month_typed(), date.day_typed());
    let days_in_current_month = month_length(year.get(), month.get());

    if day.get() < days_in_current_month {
        return day.succ().map(|day| CalendarDate::from_valid(year, month, day));
    }

    if let Some(month) = month.succ() {
        return Some(CalendarDate::from_valid(year, month, Day::FIRST));
    }

    let Some(year) = year.succ() else {
        log::debug!("{date} is the last supported day, no successor");
        return None;
    };
    Some(CalendarDate::from_valid(year, Month::JANUARY, Day::FIRST))
}
