use chrono::{
    Datelike,
    NaiveDate
};

use crate::time::calendarday::CalendarDay;
use crate::time::utility::days_between;

pub const FESTIVUS_MONTH: u32 = 12;
pub const FESTIVUS_DAY: u32 = 23;

fn festivus_of(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, FESTIVUS_MONTH, FESTIVUS_DAY)
        .expect("year outside the range chrono can represent")
}

/// The Festivus on or after `today`.
///
/// Festivus itself counts as not yet past, so on Dec 23 this returns the same day.
///
/// # Panics
/// When the rollover lands in a year beyond `NaiveDate::MAX`.
pub fn next_festivus(today: impl CalendarDay) -> NaiveDate {
    let today = today.calendar_day();
    let candidate = festivus_of(today.year());
    if today <= candidate {
        candidate
    } else {
        festivus_of(today.year() + 1)
    }
}

/// Days left until the next Festivus, zero on the day itself.
pub fn days_to_festivus(today: impl CalendarDay) -> i64 {
    let today = today.calendar_day();
    days_between(today, next_festivus(today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn before_festivus_stays_in_year() {
        assert_eq!(next_festivus(date(2016, 12, 20)), date(2016, 12, 23));
        assert_eq!(next_festivus(date(2016, 1, 1)), date(2016, 12, 23));
    }

    #[test]
    fn after_festivus_rolls_over() {
        assert_eq!(next_festivus(date(2016, 12, 29)), date(2017, 12, 23));
        assert_eq!(next_festivus(date(2016, 12, 24)), date(2017, 12, 23));
    }

    #[test]
    fn festivus_itself_is_not_past() {
        let day = date(2016, 12, 23);
        assert_eq!(next_festivus(day), day);
        assert_eq!(next_festivus(day.and_hms_opt(23, 59, 59).unwrap()), day);
        assert_eq!(days_to_festivus(day), 0);
    }

    #[test]
    fn days_to_festivus_counts_down() {
        assert_eq!(days_to_festivus(date(2016, 12, 20)), 3);
        assert_eq!(days_to_festivus(date(2016, 12, 24)), 364);
        // 2016 is a leap year
        assert_eq!(days_to_festivus(date(2015, 12, 24)), 365);
    }

    #[test]
    fn days_to_festivus_is_never_negative() {
        let mut d = date(2015, 11, 1);
        while d < date(2017, 2, 1) {
            assert!(days_to_festivus(d) >= 0, "{d}");
            d = d.succ_opt().unwrap();
        }
    }
}
