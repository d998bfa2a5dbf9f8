//! Error types for standingslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a season or querying it
#[derive(Error, Debug)]
pub enum StandingsError {
    /// Failed to read a data file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data folder does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// A line did not have the expected colon-separated shape
    #[error("malformed line {line} in '{path}': {message}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A score field was not a non-negative integer
    #[error("invalid score '{value}' on line {line} in '{path}'")]
    InvalidScore {
        path: PathBuf,
        line: usize,
        value: String,
    },

    /// The same team code appears twice in the teams file
    #[error("duplicate team code '{0}'")]
    DuplicateTeamCode(String),

    /// Queried team code is not in the teams file
    #[error("Invalid team code")]
    InvalidTeamCode(String),
}
