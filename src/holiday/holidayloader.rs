use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::configuration::LoaderConfiguration;
use crate::holiday::holiday::Holiday;
use crate::holiday::loaderror::LoadError;
use crate::time::dateparser::parse_date;

/// Splits the date from the name on every data line.
pub const DATE_NAME_SEPARATOR: char = ' ';

const COMMENT_PREFIX: char = '#';

/// Loads `<base_dir>/<locale>.txt`.
pub fn load(locale: &str, base_dir: impl AsRef<Path>) -> Result<Vec<Holiday>, LoadError> {
    load_with(&LoaderConfiguration::new(base_dir.as_ref()), locale)
}

pub fn load_with(configuration: &LoaderConfiguration, locale: &str) -> Result<Vec<Holiday>, LoadError> {
    let path = configuration.resource_path(locale);
    debug!(locale, path = %path.display(), "loading holidays");
    let file = File::open(&path).map_err(|error| LoadError::resource(&path, error))?;
    let holidays = parse_holidays(BufReader::new(file)).map_err(|error| match error {
        LoadError::Resource { source, .. } => LoadError::resource(&path, source),
        parse => parse
    })?;
    debug!(locale, count = holidays.len(), "loaded holidays");
    Ok(holidays)
}

/// Parses `YYYY-MM-DD name` lines in order, skipping blanks and `#` comments.
///
/// Read failures surface as [`LoadError::Resource`] with an empty path.
pub fn parse_holidays(reader: impl BufRead) -> Result<Vec<Holiday>, LoadError> {
    let mut holidays = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| LoadError::resource("", error))?;
        let line_number = index + 1;
        let content = line.trim();
        if content.is_empty() {
            continue;
        }
        if content.starts_with(COMMENT_PREFIX) {
            trace!(line_number, "skipping comment");
            continue;
        }
        match parse_line(content) {
            Some(holiday) => holidays.push(holiday),
            None => {
                warn!(line_number, line = %line, "rejecting malformed holiday");
                return Err(LoadError::parse(line_number, &line));
            }
        }
    }
    Ok(holidays)
}

fn parse_line(content: &str) -> Option<Holiday> {
    let (date, name) = content.split_once(DATE_NAME_SEPARATOR)?;
    let date = parse_date(date).ok()?;
    Holiday::new(date.date(), name)
}
