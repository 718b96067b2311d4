//! Profiling options.

use serde::{Deserialize, Serialize};

/// Default number of cells sampled for format signatures.
pub const DEFAULT_FORMAT_SAMPLE_SIZE: usize = 10;

/// Default number of cells sampled for example values.
pub const DEFAULT_VALUE_SAMPLE_SIZE: usize = 5;

/// Options controlling column profiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    /// Seed for Format/Sample Value sampling.
    ///
    /// When `None`, samples are drawn from OS entropy and differ between
    /// runs over the same input.
    pub seed: Option<u64>,
    /// Cells sampled for the Format field.
    pub format_sample_size: usize,
    /// Cells sampled for the Sample Value field.
    pub value_sample_size: usize,
    /// Worker threads for per-column profiling. `None` uses the global pool,
    /// `Some(1)` profiles on the calling thread.
    pub jobs: Option<usize>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            seed: None,
            format_sample_size: DEFAULT_FORMAT_SAMPLE_SIZE,
            value_sample_size: DEFAULT_VALUE_SAMPLE_SIZE,
            jobs: None,
        }
    }
}

impl ProfileOptions {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_format_sample_size(mut self, size: usize) -> Self {
        self.format_sample_size = size;
        self
    }

    #[must_use]
    pub fn with_value_sample_size(mut self, size: usize) -> Self {
        self.value_sample_size = size;
        self
    }

    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }
}
