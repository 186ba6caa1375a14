use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::time::dateparser::ISO8601_DATE_FORMAT;

/// One named holiday on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String
}

impl Holiday {
    /// Returns `None` when `name` is blank.
    pub fn new(date: NaiveDate, name: &str) -> Option<Holiday> {
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(Holiday { date, name: name.to_owned() })
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format(ISO8601_DATE_FORMAT), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let d = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        assert!(Holiday::new(d, "").is_none());
        assert!(Holiday::new(d, "  \t").is_none());
    }

    #[test]
    fn displays_as_data_line() {
        let d = NaiveDate::from_ymd_opt(2016, 1, 6).unwrap();
        let holiday = Holiday::new(d, " Sveta tri kralja ").unwrap();
        assert_eq!(holiday.name(), "Sveta tri kralja");
        assert_eq!(holiday.to_string(), "2016-01-06 Sveta tri kralja");
    }

    #[test]
    fn serializes_date_as_iso() {
        let d = NaiveDate::from_ymd_opt(2016, 12, 25).unwrap();
        let holiday = Holiday::new(d, "Božić").unwrap();
        let json = serde_json::to_string(&holiday).unwrap();
        assert_eq!(json, r#"{"date":"2016-12-25","name":"Božić"}"#);
    }
}
