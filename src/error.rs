//! Error types for diagram construction and settings loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning signal entries into a diagram.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// A sequence character is not a decimal digit.
    #[error("signal '{signal}': character {found:?} at position {position} is not a digit")]
    InvalidDigit {
        signal: String,
        position: usize,
        found: char,
    },
}

/// Errors that can occur while reading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
