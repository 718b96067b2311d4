use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{error, info_span};

use dq_core::{ProfileConfig, profile_file, profile_path};
use dq_ingest::RaggedRows;
use dq_report::Report;
use dq_repository::Repository;

use crate::cli::{ConfigArgs, ProfileArgs, RepoArgs, RepoCommand, ShowArgs};
use crate::types::{BatchResult, FileSummary, RepoOutput};

/// Loads `--config` (if any) and applies the flag overrides on top.
pub fn resolve_config(args: &ConfigArgs) -> Result<ProfileConfig> {
    let mut config = match &args.config {
        Some(path) => ProfileConfig::load(path)?,
        None => ProfileConfig::default(),
    };
    if let Some(delimiter) = args.delimiter {
        config.ingest.delimiter = delimiter;
    }
    if args.reject_ragged {
        config.ingest.ragged_rows = RaggedRows::Reject;
    }
    if let Some(seed) = args.seed {
        config.profile.seed = Some(seed);
    }
    if let Some(jobs) = args.jobs {
        config.profile.jobs = Some(jobs);
    }
    Ok(config)
}

/// Profiles every input file, continuing past failures.
pub fn run_profile(args: &ProfileArgs, config: &ProfileConfig) -> Result<BatchResult> {
    if args.output.is_some() && args.files.len() > 1 {
        bail!("--output requires a single input file");
    }
    let span = info_span!("batch", files = args.files.len());
    let _guard = span.enter();

    let format = args.format();
    let mut files = Vec::with_capacity(args.files.len());
    for input in &args.files {
        let summary = match profile_file(input, args.output.as_deref(), format, config) {
            Ok(outcome) => FileSummary {
                input: outcome.input,
                output: Some(outcome.output),
                rows: outcome.rows,
                columns: outcome.report.len(),
                mean_completeness: mean_completeness(&outcome.report),
                error: None,
            },
            Err(err) => {
                error!(input = %input.display(), error = %err, "profiling failed");
                FileSummary {
                    input: input.clone(),
                    output: None,
                    rows: 0,
                    columns: 0,
                    mean_completeness: None,
                    error: Some(err.to_string()),
                }
            }
        };
        files.push(summary);
    }
    let has_errors = files.iter().any(|file| file.error.is_some());
    Ok(BatchResult { files, has_errors })
}

/// Profiles one file without writing a report.
pub fn run_show(args: &ShowArgs, config: &ProfileConfig) -> Result<Report> {
    let (_, report) = profile_path(&args.file, config)
        .with_context(|| format!("profile {}", args.file.display()))?;
    Ok(report)
}

pub fn run_repo(args: &RepoArgs, config: &ProfileConfig) -> Result<RepoOutput> {
    let root: PathBuf = args
        .root
        .clone()
        .or_else(|| config.repository.root.clone())
        .context("no repository root: pass --root or set [repository] root")?;
    let repository = Repository::new(&root)
        .with_context(|| format!("open repository {}", root.display()))?
        .with_ingest_options(config.ingest.clone());

    let output = match &args.command {
        RepoCommand::Folders => RepoOutput::Lines(repository.folders()?),
        RepoCommand::Tree => RepoOutput::Json(serde_json::to_value(repository.tree()?)?),
        RepoCommand::Save { folder, file } => {
            let bytes = std::fs::read(file).with_context(|| format!("read {}", file.display()))?;
            let filename = file
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("invalid file name {}", file.display()))?;
            let saved = repository.save_dataset(folder, filename, &bytes, config)?;
            let message = if saved.created_folder {
                "Folder created and file saved"
            } else {
                "File saved"
            };
            RepoOutput::Message(format!("{message}: {}", saved.dataset.display()))
        }
        RepoCommand::Input { path } => {
            RepoOutput::Json(serde_json::to_value(repository.input_records(path)?)?)
        }
        RepoCommand::ProfileData { path } => {
            RepoOutput::Json(serde_json::to_value(repository.profile_records(path)?)?)
        }
        RepoCommand::Delete { path } => {
            repository.delete_profile(path)?;
            RepoOutput::Message(format!("Deleted {path}"))
        }
    };
    Ok(output)
}

fn mean_completeness(report: &Report) -> Option<u32> {
    let defined: Vec<u32> = report
        .rows()
        .iter()
        .filter_map(|row| row.profile.completeness)
        .collect();
    if defined.is_empty() {
        return None;
    }
    let count = u32::try_from(defined.len()).ok()?;
    Some(defined.iter().sum::<u32>() / count)
}
