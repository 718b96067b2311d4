use std::path::PathBuf;

use dq_ingest::IngestError;
use dq_profiler::ProfileError;
use dq_report::{AssemblyError, ReportError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: ReportError,
    },

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CoreError {
    /// True when the failure came from the input data rather than the
    /// environment or a defect.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Ingest(err) if err.is_malformed_input())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
