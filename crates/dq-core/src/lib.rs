//! Profiling pipeline: load a dataset, profile every column, assemble the
//! report and write it next to the input.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{ProfileConfig, RepositoryConfig};
pub use error::{CoreError, Result};
pub use pipeline::{
    OutputFormat, ProfileOutcome, default_output_path, profile_dataset_report, profile_file,
    profile_path, profile_reader,
};
