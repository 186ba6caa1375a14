use chrono::{
    NaiveDateTime,
    NaiveTime
};

use crate::time::calendarday::CalendarDay;

/// Returns the calendar day of `t` at 00:00:00 with no sub-second part.
#[inline]
pub fn midnight(t: impl CalendarDay) -> NaiveDateTime {
    t.calendar_day().and_time(NaiveTime::MIN)
}

/// Midnight of the unset (default) date-time.
///
/// Used as the date handed back alongside a failed parse.
#[inline]
pub fn unset() -> NaiveDateTime {
    midnight(NaiveDateTime::default())
}

/// Whole calendar days from `since` to `now`; negative when `now` is earlier.
#[inline]
pub fn days_between(since: impl CalendarDay, now: impl CalendarDay) -> i64 {
    (now.calendar_day() - since.calendar_day()).num_days()
}
