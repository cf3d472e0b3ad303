use crate::events::{MatchId, UnknownCode};
use thiserror::Error;

/// Errors from the analysis entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The caller asked for a match that is not in the event index. A match
    /// that is present but has no events is not an error.
    #[error("Unknown match: {0}")]
    UnknownMatch(MatchId),
}

/// Errors from loading the dataset, tag tables and configuration.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Missing column {column} in {path}")]
    MissingColumn { column: &'static str, path: String },

    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DataError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        DataError::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T, E = DataError> = std::result::Result<T, E>;
