//! Error types for dataset loading.

use std::path::PathBuf;
use thiserror::Error;

use dq_model::ModelError;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Malformed input ===
    /// The stream contains no records at all.
    #[error("input is empty")]
    EmptyInput,

    /// The header record has no usable field names.
    #[error("header row is empty")]
    EmptyHeader,

    /// A data row does not align with the header.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// A field is not valid UTF-8.
    #[error("line {line}, field {field}: invalid UTF-8")]
    InvalidUtf8 { line: u64, field: usize },

    /// The configured delimiter cannot be used as a single byte.
    #[error("delimiter {delimiter:?} is not a single ASCII character")]
    InvalidDelimiter { delimiter: char },

    /// The CSV tokenizer rejected the stream.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    // === File system ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The loaded columns violate a dataset invariant.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl IngestError {
    /// Returns true when the input itself is unparseable or structurally
    /// invalid, as opposed to a storage failure.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            IngestError::EmptyInput
            | IngestError::EmptyHeader
            | IngestError::RaggedRow { .. }
            | IngestError::InvalidUtf8 { .. }
            | IngestError::InvalidDelimiter { .. }
            | IngestError::Model(_) => true,
            IngestError::Csv(error) => !error.is_io_error(),
            IngestError::FileNotFound { .. } | IngestError::FileRead { .. } => false,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::RaggedRow {
            line: 3,
            expected: 2,
            found: 4,
        };
        assert_eq!(err.to_string(), "line 3: expected 2 fields, found 4");
    }

    #[test]
    fn test_malformed_classification() {
        assert!(IngestError::EmptyHeader.is_malformed_input());
        let missing = IngestError::FileNotFound {
            path: PathBuf::from("/data/missing.csv"),
        };
        assert!(!missing.is_malformed_input());
    }
}
