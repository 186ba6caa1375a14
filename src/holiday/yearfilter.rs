use chrono::Datelike;

use crate::holiday::holiday::Holiday;
use crate::time::calendarday::CalendarDay;

/// Holidays falling in the same year as `reference`, in their original order.
pub fn by_year(all: &[Holiday], reference: impl CalendarDay) -> Vec<Holiday> {
    let year = reference.calendar_day().year();
    all.iter()
        .filter(|holiday| holiday.date().year() == year)
        .cloned()
        .collect()
}
