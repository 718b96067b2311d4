//! Storage of uploaded datasets and their reports under a single root
//! directory.
//!
//! Datasets are addressed by logical paths relative to the root, without the
//! `.csv` extension (`sales/profile_q1`). The report for a dataset lives beside
//! it as `<name>_output.csv`.

pub mod error;
pub mod paths;
pub mod repository;
pub mod tree;

pub use error::{RepositoryError, Result};
pub use repository::{Repository, SavedDataset, UPLOAD_PREFIX};
pub use tree::{Entry, ROOT_NAME};
