use chrono::{
    DateTime,
    NaiveDate,
    NaiveDateTime,
    TimeZone
};

/// Anything that falls on a single calendar day.
///
/// Date-times are reduced to the day they fall on in their own offset, so
/// the time-of-day never leaks into day arithmetic.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    #[inline]
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}
