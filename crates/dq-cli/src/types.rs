use std::path::PathBuf;

/// Outcome of profiling one file in a batch.
#[derive(Debug)]
pub struct FileSummary {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
    /// Mean of the defined per-column completeness values.
    pub mean_completeness: Option<u32>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct BatchResult {
    pub files: Vec<FileSummary>,
    pub has_errors: bool,
}

/// What a `repo` subcommand prints.
#[derive(Debug, PartialEq)]
pub enum RepoOutput {
    Lines(Vec<String>),
    Json(serde_json::Value),
    Message(String),
}
