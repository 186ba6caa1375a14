use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_EXTENSION: &str = "txt";

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_owned()
}

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot open configuration: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error)
}

/// Where per-locale holiday files live.
///
/// ```json
/// { "base_dir": "data/holidays", "extension": "txt" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfiguration {
    base_dir: PathBuf,
    #[serde(default = "default_extension")]
    extension: String
}

impl LoaderConfiguration {
    pub fn new(base_dir: impl Into<PathBuf>) -> LoaderConfiguration {
        LoaderConfiguration { base_dir: base_dir.into(), extension: default_extension() }
    }

    pub fn with_extension(mut self, extension: &str) -> LoaderConfiguration {
        self.extension = extension.trim_start_matches('.').to_owned();
        self
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<LoaderConfiguration, ConfigurationError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `<base_dir>/<locale>.<extension>`; depends on nothing but the inputs.
    pub fn resource_path(&self, locale: &str) -> PathBuf {
        let mut file_name = locale.to_owned();
        if !self.extension.is_empty() {
            file_name.push('.');
            file_name.push_str(&self.extension);
        }
        self.base_dir.join(file_name)
    }
}
