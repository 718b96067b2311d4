//! Options controlling how delimited text is parsed.

use serde::{Deserialize, Serialize};

/// Cell values treated as missing by default.
pub const DEFAULT_NULL_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// What to do with a data row that has fewer fields than the header.
///
/// Rows with more fields than the header are always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaggedRows {
    /// Fill the missing trailing fields with missing cells.
    #[default]
    Pad,
    /// Fail with a malformed-input error.
    Reject,
}

/// Options for [`crate::load_dataset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Field delimiter. Must be a single ASCII character.
    pub delimiter: char,
    /// Policy for short rows.
    pub ragged_rows: RaggedRows,
    /// Exact cell values that mark a missing cell.
    pub null_values: Vec<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            ragged_rows: RaggedRows::default(),
            null_values: DEFAULT_NULL_VALUES.iter().map(|v| (*v).to_string()).collect(),
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_ragged_rows(mut self, policy: RaggedRows) -> Self {
        self.ragged_rows = policy;
        self
    }

    /// Replaces the null marker set.
    #[must_use]
    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }
}
