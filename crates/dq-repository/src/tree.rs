//! Folder and file listings of the repository root.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RepositoryError, Result};

/// Name of the synthetic node wrapping the whole repository.
pub const ROOT_NAME: &str = "Repository";

/// A node in the repository tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "isFolder")]
    pub is_folder: bool,
    /// Children of a folder; always `None` for files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Entry>>,
}

impl Entry {
    pub fn folder(name: impl Into<String>, items: Vec<Entry>) -> Self {
        Self {
            name: name.into(),
            is_folder: true,
            items: Some(items),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_folder: false,
            items: None,
        }
    }
}

struct DirItem {
    name: String,
    path: std::path::PathBuf,
    is_dir: bool,
}

/// Reads the immediate children of `dir`, sorted by name. Entries that are
/// neither files nor directories are skipped.
fn read_sorted(dir: &Path) -> Result<Vec<DirItem>> {
    let entries = std::fs::read_dir(dir).map_err(|e| RepositoryError::io(dir, e))?;
    let mut items = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| RepositoryError::io(dir, e))?;
        let path = entry.path();
        let is_dir = path.is_dir();
        if !is_dir && !path.is_file() {
            continue;
        }
        items.push(DirItem {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir,
        });
    }
    items.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(items)
}

/// Every folder below `dir`, depth-first, as `/`-joined paths relative to it.
pub fn list_folders(dir: &Path) -> Result<Vec<String>> {
    let mut folders = Vec::new();
    collect_folders(dir, "", &mut folders)?;
    Ok(folders)
}

fn collect_folders(dir: &Path, prefix: &str, folders: &mut Vec<String>) -> Result<()> {
    for item in read_sorted(dir)? {
        if !item.is_dir {
            continue;
        }
        let relative = if prefix.is_empty() {
            item.name
        } else {
            format!("{prefix}/{}", item.name)
        };
        folders.push(relative.clone());
        collect_folders(&item.path, &relative, folders)?;
    }
    Ok(())
}

/// Folder contents of `dir` as tree entries.
///
/// Report files (any name containing `output`) are hidden and the `.csv`
/// extension is dropped from dataset names.
pub fn folder_contents(dir: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for item in read_sorted(dir)? {
        if item.is_dir {
            let items = folder_contents(&item.path)?;
            entries.push(Entry::folder(item.name, items));
        } else if !item.name.contains("output") {
            let name = item.name.strip_suffix(".csv").unwrap_or(&item.name);
            entries.push(Entry::file(name));
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entries_omit_items() {
        let value = serde_json::to_value(Entry::file("profile_q1")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"name": "profile_q1", "isFolder": false})
        );
    }
}
