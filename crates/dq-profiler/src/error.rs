use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The dataset has no columns.
    #[error("dataset has no columns")]
    EmptyDataset,

    /// A column's length disagrees with the dataset row count.
    #[error("column '{column}' has {found} cells, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },

    /// The bounded worker pool could not be started.
    #[error("failed to start profiling workers: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
