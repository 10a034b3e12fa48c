//! Error types for dataset construction and result conversion.

use thiserror::Error;

use olympics_ingest::IngestError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Loading or validating a source table failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Building a result DataFrame failed.
    #[error("failed to build result frame: {message}")]
    Frame { message: String },
}

impl From<polars::prelude::PolarsError> for AnalysisError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
