#![forbid(unsafe_code)]

//! Configuration loading errors.

use std::fmt;

/// The configuration document could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON, or valid JSON that does not match the schema
    /// (e.g. a tile entry without its required `text`).
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "invalid visual configuration: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error)
    }
}
