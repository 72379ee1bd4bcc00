//! Library error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the loader, configuration and runtime guards.
///
/// Metric computation itself never fails; see [`crate::metrics`].
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid analysis spec: {0}")]
    InvalidSpec(String),

    #[error("document has {chars} characters, limit is {limit}")]
    DocumentTooLarge { chars: usize, limit: usize },
}

impl AnalysisError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
