use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The locale's data file is missing or could not be read.
    #[error("cannot read holiday resource '{}': {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    /// A line is not `YYYY-MM-DD name`.
    #[error("malformed holiday on line {line_number}: '{line}'")]
    Parse {
        line_number: usize,
        line: String
    }
}

impl LoadError {
    pub fn resource(path: impl Into<PathBuf>, source: io::Error) -> LoadError {
        LoadError::Resource { path: path.into(), source }
    }

    pub fn parse(line_number: usize, line: &str) -> LoadError {
        LoadError::Parse { line_number, line: line.to_owned() }
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, LoadError::Resource { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }
}
