//! Dataset loading: parses delimited text with a header row into an in-memory
//! columnar [`dq_model::Dataset`] with inferred column types.

pub mod error;
pub mod header;
pub mod loader;
pub mod options;
pub mod records;

pub use error::{IngestError, Result};
pub use loader::{load_dataset, load_dataset_from_path, load_dataset_from_str};
pub use options::{DEFAULT_NULL_VALUES, IngestOptions, RaggedRows};
pub use records::{Record, parse_records};
