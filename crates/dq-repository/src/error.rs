use std::path::PathBuf;

use dq_core::CoreError;
use dq_ingest::IngestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A logical path or file name escapes the root or is empty.
    #[error("invalid repository path '{path}'")]
    InvalidPath { path: String },

    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read records from {path}: {source}")]
    Records {
        path: PathBuf,
        #[source]
        source: IngestError,
    },

    #[error("failed to profile {path}: {source}")]
    Profile {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
}

impl RepositoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
