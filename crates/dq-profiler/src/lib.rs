//! Column profiling: completeness, uniqueness, length and value bounds,
//! format signatures and sample values for every column of a
//! [`dq_model::Dataset`].

pub mod error;
pub mod format;
pub mod options;
pub mod profiler;
pub mod sample;
pub mod stats;

pub use error::{ProfileError, Result};
pub use format::format_signature;
pub use options::{DEFAULT_FORMAT_SAMPLE_SIZE, DEFAULT_VALUE_SAMPLE_SIZE, ProfileOptions};
pub use profiler::{profile_column, profile_dataset};
