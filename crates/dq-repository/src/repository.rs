//! Dataset storage operations.

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use dq_core::{OutputFormat, ProfileConfig, profile_file};
use dq_ingest::{IngestOptions, Record, parse_records};
use dq_report::{REPORT_SUFFIX, report_path_for};

use crate::error::{RepositoryError, Result};
use crate::paths::{file_name, non_empty_relative_path, relative_path, with_suffix};
use crate::tree::{Entry, ROOT_NAME, folder_contents, list_folders};

/// Prefix given to every stored upload.
pub const UPLOAD_PREFIX: &str = "profile_";

/// Where [`Repository::save_dataset`] put an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDataset {
    /// Stored dataset file.
    pub dataset: PathBuf,
    /// Report written for it.
    pub report: PathBuf,
    /// Whether the target folder had to be created.
    pub created_folder: bool,
}

/// A directory tree of datasets and reports.
#[derive(Debug, Clone)]
pub struct Repository {
    root: PathBuf,
    ingest: IngestOptions,
}

impl Repository {
    /// Opens the repository at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| RepositoryError::io(&root, e))?;
        Ok(Self {
            root,
            ingest: IngestOptions::default(),
        })
    }

    /// Options used when reading stored datasets back as records.
    #[must_use]
    pub fn with_ingest_options(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every folder below the root, depth-first and sorted by name.
    pub fn folders(&self) -> Result<Vec<String>> {
        list_folders(&self.root)
    }

    /// The whole repository as a single root node.
    pub fn tree(&self) -> Result<Entry> {
        Ok(Entry::folder(ROOT_NAME, folder_contents(&self.root)?))
    }

    /// Stores `bytes` as `profile_<filename>` under `folder`, then profiles
    /// it and writes the report beside it.
    ///
    /// A previous upload with the same name is replaced together with its
    /// report. If profiling fails, the new upload is removed again.
    pub fn save_dataset(
        &self,
        folder: &str,
        filename: &str,
        bytes: &[u8],
        config: &ProfileConfig,
    ) -> Result<SavedDataset> {
        let dir = self.root.join(relative_path(folder)?);
        let filename = file_name(filename)?;

        let created_folder = !dir.is_dir();
        if created_folder {
            fs::create_dir_all(&dir).map_err(|e| RepositoryError::io(&dir, e))?;
            debug!(folder, "created folder");
        }

        let dataset = dir.join(format!("{UPLOAD_PREFIX}{filename}"));
        let report = report_path_for(&dataset);
        if dataset.exists() {
            remove(&dataset)?;
            remove_if_present(&report)?;
            debug!(path = %dataset.display(), "replaced previous upload");
        }

        fs::write(&dataset, bytes).map_err(|e| RepositoryError::io(&dataset, e))?;
        if let Err(source) = profile_file(&dataset, Some(&report), OutputFormat::Csv, config) {
            remove_if_present(&dataset)?;
            return Err(RepositoryError::Profile {
                path: dataset,
                source,
            });
        }

        info!(
            dataset = %dataset.display(),
            bytes = bytes.len(),
            created_folder,
            "dataset saved"
        );
        Ok(SavedDataset {
            dataset,
            report,
            created_folder,
        })
    }

    /// The stored dataset at `path` (without `.csv`) as records.
    pub fn input_records(&self, path: &str) -> Result<Vec<Record>> {
        let file = self.dataset_path(path)?;
        read_records(&file, &self.ingest)
    }

    /// The report of the dataset at `path` as records keyed by report field.
    ///
    /// The column name sits under the empty key.
    pub fn profile_records(&self, path: &str) -> Result<Vec<Record>> {
        let file = with_suffix(&self.logical(path)?, &format!("{REPORT_SUFFIX}.csv"));
        read_records(&file, &IngestOptions::default())
    }

    /// Removes the dataset at `path` and its report.
    pub fn delete_profile(&self, path: &str) -> Result<()> {
        let file = self.dataset_path(path)?;
        if !file.is_file() {
            return Err(RepositoryError::NotFound { path: file });
        }
        remove(&file)?;
        remove_if_present(&report_path_for(&file))?;
        info!(path, "dataset deleted");
        Ok(())
    }

    fn logical(&self, path: &str) -> Result<PathBuf> {
        Ok(self.root.join(non_empty_relative_path(path)?))
    }

    fn dataset_path(&self, path: &str) -> Result<PathBuf> {
        Ok(with_suffix(&self.logical(path)?, ".csv"))
    }
}

fn read_records(file: &Path, options: &IngestOptions) -> Result<Vec<Record>> {
    let handle = fs::File::open(file).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RepositoryError::NotFound {
                path: file.to_path_buf(),
            }
        } else {
            RepositoryError::io(file, e)
        }
    })?;
    parse_records(BufReader::new(handle), options).map_err(|source| RepositoryError::Records {
        path: file.to_path_buf(),
        source,
    })
}

fn remove(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| RepositoryError::io(path, e))
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(RepositoryError::io(path, e)),
    }
}
