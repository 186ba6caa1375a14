use chrono::{
    NaiveDate,
    NaiveDateTime
};
use thiserror::Error;

use crate::time::utility::{
    midnight,
    unset
};

/// Layout of an ISO-8601 calendar date, `YYYY-MM-DD`.
pub const ISO8601_DATE_FORMAT: &str = "%Y-%m-%d";

const ISO8601_DATE_LEN: usize = 10;

#[derive(Debug, Error)]
#[error("'{input}' is not a YYYY-MM-DD date")]
pub struct ParseDateError {
    input: String,
    #[source]
    source: Option<chrono::ParseError>
}

impl ParseDateError {
    fn new(input: &str, source: Option<chrono::ParseError>) -> ParseDateError {
        ParseDateError { input: input.to_owned(), source }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The unset midnight that stands in for the date that failed to parse.
    pub fn unset_date(&self) -> NaiveDateTime {
        unset()
    }
}

/// Parses exactly `YYYY-MM-DD` into that day at midnight.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, ParseDateError> {
    // chrono accepts unpadded fields and years of any width
    let well_formed = s.len() == ISO8601_DATE_LEN
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit()
        });
    if !well_formed {
        return Err(ParseDateError::new(s, None));
    }
    NaiveDate::parse_from_str(s, ISO8601_DATE_FORMAT)
        .map(midnight)
        .map_err(|error| ParseDateError::new(s, Some(error)))
}
