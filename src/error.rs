//! Error types for the League champion statistics CLI

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LolStatsError>;

#[derive(Error, Debug)]
pub enum LolStatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected data file not found: {}", path.display())]
    MissingSource { path: PathBuf },

    #[error("{}:{line}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    #[error("invalid rate {value:?}: expected a number in [0, 1]")]
    InvalidRate { value: String },

    #[error("invalid rate metric {value:?}: expected win, ban, or pick")]
    InvalidMetric { value: String },

    #[error("unknown patch {patch:?} for champion {champion}")]
    UnknownPatch { champion: String, patch: String },

    #[error("invalid patch vocabulary: {message}")]
    Vocabulary { message: String },

    #[error("alignment error: {message}")]
    Alignment { message: String },

    #[error("page did not match the expected structure: {message}")]
    Scrape { message: String },

    #[error("model is degenerate: {message}")]
    Degenerate { message: String },
}

impl LolStatsError {
    /// Alignment error between tables expected to correspond row-for-row.
    pub fn misaligned(message: impl Into<String>) -> Self {
        LolStatsError::Alignment {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests;
