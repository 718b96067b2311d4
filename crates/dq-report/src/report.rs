//! Report assembly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use dq_model::{ColumnProfile, ProfiledColumn};

use crate::error::AssemblyError;

/// Report fields, in output order.
pub const FIELD_NAMES: [&str; 10] = [
    "Data Type",
    "Completeness %",
    "Missing Values",
    "Uniqueness %",
    "Maximum Length",
    "Minimum Length",
    "Maximum Value",
    "Minimum Value",
    "Format",
    "Sample Value",
];

/// One report row: a source column and its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Column")]
    pub column: String,
    #[serde(flatten)]
    pub profile: ColumnProfile,
}

/// Per-column statistics table, one row per source column in dataset order.
///
/// Only built through [`Report::assemble`] or [`Report::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Orders profiles by their column index and checks that every column
    /// appears once.
    pub fn assemble(mut profiles: Vec<ProfiledColumn>) -> Result<Self, AssemblyError> {
        let span = info_span!("assemble", columns = profiles.len());
        let _guard = span.enter();
        if profiles.is_empty() {
            return Err(AssemblyError::Empty);
        }
        profiles.sort_by_key(|profiled| profiled.index);
        let mut seen = BTreeSet::new();
        for profiled in &profiles {
            if !seen.insert(profiled.name.as_str()) {
                return Err(AssemblyError::DuplicateColumn {
                    name: profiled.name.clone(),
                });
            }
        }
        drop(seen);
        let rows = profiles
            .into_iter()
            .map(|profiled| ReportRow {
                column: profiled.name,
                profile: profiled.profile,
            })
            .collect::<Vec<_>>();
        debug!(rows = rows.len(), "report assembled");
        Ok(Self { rows })
    }

    /// Builds a report from rows already in output order.
    pub fn from_rows(rows: Vec<ReportRow>) -> Result<Self, AssemblyError> {
        Self::assemble(
            rows.into_iter()
                .enumerate()
                .map(|(index, row)| ProfiledColumn {
                    index,
                    name: row.column,
                    profile: row.profile,
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn row(&self, column: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.column == column)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.column.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
