//! TOML configuration shared by the CLI and the repository.
//!
//! ```toml
//! [ingest]
//! delimiter = ";"
//! ragged_rows = "reject"
//!
//! [profile]
//! seed = 42
//! jobs = 4
//!
//! [repository]
//! root = "data"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dq_ingest::IngestOptions;
use dq_profiler::ProfileOptions;

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Directory holding stored datasets and their reports.
    pub root: Option<PathBuf>,
}

/// All options for one profiling run. Missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub ingest: IngestOptions,
    pub profile: ProfileOptions,
    pub repository: RepositoryConfig,
}

impl ProfileConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml_str(&contents).map_err(|e| CoreError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dq_ingest::RaggedRows;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ProfileConfig::from_toml_str("").unwrap();
        assert_eq!(config, ProfileConfig::default());
    }

    #[test]
    fn sections_override_defaults() {
        let config = ProfileConfig::from_toml_str(
            r#"
[ingest]
delimiter = ";"
ragged_rows = "reject"
null_values = ["", "-"]

[profile]
seed = 42
value_sample_size = 3
jobs = 2

[repository]
root = "data"
"#,
        )
        .unwrap();
        assert_eq!(config.ingest.delimiter, ';');
        assert_eq!(config.ingest.ragged_rows, RaggedRows::Reject);
        assert_eq!(config.ingest.null_values, vec!["", "-"]);
        assert_eq!(config.profile.seed, Some(42));
        assert_eq!(config.profile.value_sample_size, 3);
        assert_eq!(config.profile.format_sample_size, 10);
        assert_eq!(config.profile.jobs, Some(2));
        assert_eq!(config.repository.root, Some(PathBuf::from("data")));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = ProfileConfig::from_toml_str("[ingest]\nragged_rows = \"skip\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ProfileConfig::load(Path::new("/nonexistent/dq.toml")).unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/dq.toml"));
    }
}
