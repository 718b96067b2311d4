//! Error types for report assembly and serialization.

use thiserror::Error;

/// Internal consistency violations while assembling a report.
///
/// These indicate a defect upstream: a loaded dataset always has at least one
/// uniquely named column.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("no column profiles to assemble")]
    Empty,
    #[error("duplicate column '{name}' in profiles")]
    DuplicateColumn { name: String },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A serialized report does not start with the expected header row.
    #[error("unexpected report header: {found}")]
    Header { found: String },

    /// A serialized report cell could not be read back.
    #[error("line {line}, field '{field}': {message}")]
    Parse {
        line: u64,
        field: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
