//! End-to-end profiling of one dataset.
//!
//! The stages run in order: [`dq_ingest::load_dataset`] builds the columnar
//! dataset, [`dq_profiler::profile_dataset`] profiles its columns and
//! [`Report::assemble`] reorders the profiles into the final table.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use dq_ingest::{load_dataset, load_dataset_from_path};
use dq_model::Dataset;
use dq_profiler::{ProfileOptions, profile_dataset};
use dq_report::{Report, report_path_for, write_csv_to_path, write_json_to_path};

use crate::config::ProfileConfig;
use crate::error::{CoreError, Result};

/// Serialization of a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Result of profiling one file.
#[derive(Debug, Clone)]
pub struct ProfileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub report: Report,
}

/// Profiles an already loaded dataset.
pub fn profile_dataset_report(dataset: &Dataset, options: &ProfileOptions) -> Result<Report> {
    let profiles = profile_dataset(dataset, options)?;
    Ok(Report::assemble(profiles)?)
}

/// Loads and profiles a delimited text stream.
pub fn profile_reader<R: Read>(reader: R, config: &ProfileConfig) -> Result<Report> {
    let dataset = load_dataset(reader, &config.ingest)?;
    profile_dataset_report(&dataset, &config.profile)
}

/// Loads and profiles a file without writing anything.
pub fn profile_path(input: &Path, config: &ProfileConfig) -> Result<(Dataset, Report)> {
    let dataset = load_dataset_from_path(input, &config.ingest)?;
    let report = profile_dataset_report(&dataset, &config.profile)?;
    Ok((dataset, report))
}

/// Where the report for `input` goes when no output path is given:
/// `<stem>_output.csv` (or `.json`) beside the input.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    report_path_for(input).with_extension(format.extension())
}

/// Profiles `input` and writes its report to `output`, or to
/// [`default_output_path`] when `output` is `None`.
pub fn profile_file(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    config: &ProfileConfig,
) -> Result<ProfileOutcome> {
    let span = info_span!("profile_file", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let (dataset, report) = profile_path(input, config)?;
    let output = output.map_or_else(|| default_output_path(input, format), Path::to_path_buf);
    let written = match format {
        OutputFormat::Csv => write_csv_to_path(&report, &output),
        OutputFormat::Json => write_json_to_path(&report, &output),
    };
    written.map_err(|e| CoreError::Report {
        path: output.clone(),
        source: e,
    })?;

    info!(
        rows = dataset.row_count(),
        columns = report.len(),
        output = %output.display(),
        duration_ms = start.elapsed().as_millis(),
        "report written"
    );
    Ok(ProfileOutcome {
        input: input.to_path_buf(),
        output,
        rows: dataset.row_count(),
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_follows_format() {
        let input = Path::new("data/people.csv");
        assert_eq!(
            default_output_path(input, OutputFormat::Csv),
            PathBuf::from("data/people_output.csv")
        );
        assert_eq!(
            default_output_path(input, OutputFormat::Json),
            PathBuf::from("data/people_output.json")
        );
    }

    #[test]
    fn reader_report_covers_all_columns() {
        let report = profile_reader(
            "id,name\n1,Alice\n2,Bob\n3,\n".as_bytes(),
            &ProfileConfig::default(),
        )
        .unwrap();
        assert_eq!(report.column_names(), vec!["id", "name"]);
        let name = report.row("name").unwrap();
        assert_eq!(name.profile.completeness, Some(66));
        assert_eq!(name.profile.missing_values, 1);
    }

    #[test]
    fn header_only_input_profiles_to_undefined_ratios() {
        let report = profile_reader("a,b\n".as_bytes(), &ProfileConfig::default()).unwrap();
        assert_eq!(report.len(), 2);
        assert!(report.rows().iter().all(|row| row.profile.completeness.is_none()));
    }

    #[test]
    fn malformed_input_is_flagged() {
        let err = profile_reader("".as_bytes(), &ProfileConfig::default()).unwrap_err();
        assert!(err.is_malformed_input());
    }
}
