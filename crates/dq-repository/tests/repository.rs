//! Repository operations over a temporary root.

use std::fs;

use dq_core::ProfileConfig;
use dq_repository::{Entry, Repository, RepositoryError};

const PEOPLE: &[u8] = b"id,name\n1,Alice\n2,Bob\n3,\n";

fn repository() -> (tempfile::TempDir, Repository) {
    let dir = tempfile::tempdir().unwrap();
    let repo = Repository::new(dir.path().join("data")).unwrap();
    (dir, repo)
}

#[test]
fn new_creates_root() {
    let (dir, repo) = repository();
    assert!(dir.path().join("data").is_dir());
    assert_eq!(repo.root(), dir.path().join("data"));
    assert!(repo.folders().unwrap().is_empty());
}

#[test]
fn save_stores_upload_and_report() {
    let (_dir, repo) = repository();
    let saved = repo
        .save_dataset("sales/2024", "people.csv", PEOPLE, &ProfileConfig::default())
        .unwrap();

    assert!(saved.created_folder);
    assert_eq!(
        saved.dataset,
        repo.root().join("sales/2024/profile_people.csv")
    );
    assert_eq!(
        saved.report,
        repo.root().join("sales/2024/profile_people_output.csv")
    );
    assert!(saved.report.is_file());

    let again = repo
        .save_dataset("sales/2024", "people.csv", b"id\n7\n", &ProfileConfig::default())
        .unwrap();
    assert!(!again.created_folder);
    let input = repo.input_records("sales/2024/profile_people").unwrap();
    assert_eq!(input.len(), 1);
    assert_eq!(input[0]["id"], "7");
    let profile = repo.profile_records("sales/2024/profile_people").unwrap();
    assert_eq!(profile.len(), 1);
    assert_eq!(profile[0][""], "id");
}

#[test]
fn folders_are_depth_first_and_sorted() {
    let (_dir, repo) = repository();
    let config = ProfileConfig::default();
    for folder in ["b", "a/y", "a/x"] {
        repo.save_dataset(folder, "people.csv", PEOPLE, &config).unwrap();
    }
    assert_eq!(repo.folders().unwrap(), vec!["a", "a/x", "a/y", "b"]);
}

#[test]
fn tree_hides_reports() {
    let (_dir, repo) = repository();
    let config = ProfileConfig::default();
    repo.save_dataset("sales", "q1.csv", PEOPLE, &config).unwrap();
    repo.save_dataset("", "top.csv", PEOPLE, &config).unwrap();

    let tree = repo.tree().unwrap();
    assert_eq!(
        tree,
        Entry::folder(
            "Repository",
            vec![
                Entry::file("profile_top"),
                Entry::folder("sales", vec![Entry::file("profile_q1")]),
            ]
        )
    );
    insta::assert_json_snapshot!(tree, @r#"
    {
      "name": "Repository",
      "isFolder": true,
      "items": [
        {
          "name": "profile_top",
          "isFolder": false
        },
        {
          "name": "sales",
          "isFolder": true,
          "items": [
            {
              "name": "profile_q1",
              "isFolder": false
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn profile_records_expose_report_fields() {
    let (_dir, repo) = repository();
    repo.save_dataset("s", "people.csv", PEOPLE, &ProfileConfig::default())
        .unwrap();
    let rows = repo.profile_records("s/profile_people").unwrap();
    assert_eq!(rows.len(), 2);
    let name = rows.iter().find(|row| row[""] == "name").unwrap();
    assert_eq!(name["Completeness %"], "66");
    assert_eq!(name["Missing Values"], "1");
    assert_eq!(name["Minimum Length"], "0");
    let id = rows.iter().find(|row| row[""] == "id").unwrap();
    assert_eq!(id["Uniqueness %"], "100");
    assert_eq!(id["Maximum Value"], "3");
}

#[test]
fn delete_removes_dataset_and_report() {
    let (_dir, repo) = repository();
    let saved = repo
        .save_dataset("s", "people.csv", PEOPLE, &ProfileConfig::default())
        .unwrap();
    repo.delete_profile("s/profile_people").unwrap();
    assert!(!saved.dataset.exists());
    assert!(!saved.report.exists());

    let err = repo.delete_profile("s/profile_people").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn missing_paths_are_not_found() {
    let (_dir, repo) = repository();
    assert!(repo.input_records("nowhere/x").unwrap_err().is_not_found());
    assert!(repo.profile_records("nowhere/x").unwrap_err().is_not_found());
}

#[test]
fn escaping_paths_are_rejected() {
    let (dir, repo) = repository();
    let config = ProfileConfig::default();
    assert!(matches!(
        repo.input_records("../secret"),
        Err(RepositoryError::InvalidPath { .. })
    ));
    assert!(matches!(
        repo.delete_profile("/etc/passwd"),
        Err(RepositoryError::InvalidPath { .. })
    ));
    assert!(matches!(
        repo.save_dataset("..", "x.csv", PEOPLE, &config),
        Err(RepositoryError::InvalidPath { .. })
    ));
    assert!(matches!(
        repo.save_dataset("s", "../x.csv", PEOPLE, &config),
        Err(RepositoryError::InvalidPath { .. })
    ));
    assert!(!dir.path().join("profile_x.csv").exists());
}

#[test]
fn failed_profiling_leaves_no_upload() {
    let (_dir, repo) = repository();
    let err = repo
        .save_dataset("s", "bad.csv", b"a,b\n1,2,3\n", &ProfileConfig::default())
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Profile { .. }));
    assert!(!repo.root().join("s/profile_bad.csv").exists());
    assert!(!repo.root().join("s/profile_bad_output.csv").exists());
    let listed = fs::read_dir(repo.root().join("s")).unwrap().count();
    assert_eq!(listed, 0);
}
