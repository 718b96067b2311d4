//! Validation of caller-supplied logical paths.

use std::path::{Component, Path, PathBuf};

use crate::error::{RepositoryError, Result};

/// Turns a `/`-separated logical path into a relative filesystem path.
///
/// Only plain names are accepted; `.` segments are dropped. `..`, absolute
/// paths and drive prefixes are rejected.
pub fn relative_path(logical: &str) -> Result<PathBuf> {
    let invalid = || RepositoryError::InvalidPath {
        path: logical.to_string(),
    };
    let mut relative = PathBuf::new();
    for component in Path::new(logical).components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(invalid());
            }
        }
    }
    Ok(relative)
}

/// Like [`relative_path`] but the result must name something.
pub fn non_empty_relative_path(logical: &str) -> Result<PathBuf> {
    let relative = relative_path(logical)?;
    if relative.as_os_str().is_empty() {
        return Err(RepositoryError::InvalidPath {
            path: logical.to_string(),
        });
    }
    Ok(relative)
}

/// A bare file name: exactly one plain component.
pub fn file_name(name: &str) -> Result<&str> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(name),
        _ => Err(RepositoryError::InvalidPath {
            path: name.to_string(),
        }),
    }
}

/// Appends `suffix` to the last component of `path`.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_names() {
        assert_eq!(
            relative_path("sales/2024/profile_q1").unwrap(),
            PathBuf::from("sales/2024/profile_q1")
        );
        assert_eq!(relative_path("./sales").unwrap(), PathBuf::from("sales"));
        assert_eq!(relative_path("").unwrap(), PathBuf::new());
    }

    #[test]
    fn rejects_escapes() {
        assert!(relative_path("../etc/passwd").is_err());
        assert!(relative_path("sales/../../x").is_err());
        assert!(relative_path("/etc/passwd").is_err());
        assert!(non_empty_relative_path("").is_err());
        assert!(non_empty_relative_path(".").is_err());
    }

    #[test]
    fn file_names_are_single_components() {
        assert_eq!(file_name("q1.csv").unwrap(), "q1.csv");
        assert!(file_name("a/q1.csv").is_err());
        assert!(file_name("..").is_err());
        assert!(file_name("").is_err());
        assert!(file_name("./q1.csv").is_err());
    }

    #[test]
    fn suffix_extends_last_component() {
        assert_eq!(
            with_suffix(Path::new("sales/profile_q1"), "_output.csv"),
            PathBuf::from("sales/profile_q1_output.csv")
        );
    }
}
