use thiserror::Error;

/// Structural violations detected while building a [`crate::Dataset`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("column '{name}' has {found} cells, expected {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("duplicate column name '{name}'")]
    DuplicateColumn { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
