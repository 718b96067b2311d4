use serde::{Deserialize, Serialize};

use crate::data_type::DataType;

/// Statistics computed for one column.
///
/// Ratio and extremum fields are `None` when they are undefined, which only
/// happens for a dataset without rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnProfile {
    #[serde(rename = "Data Type")]
    pub data_type: DataType,
    /// Truncated percentage of present cells.
    #[serde(rename = "Completeness %")]
    pub completeness: Option<u32>,
    #[serde(rename = "Missing Values")]
    pub missing_values: usize,
    /// Truncated percentage of distinct present values over all rows.
    #[serde(rename = "Uniqueness %")]
    pub uniqueness: Option<u32>,
    #[serde(rename = "Maximum Length")]
    pub max_length: Option<usize>,
    #[serde(rename = "Minimum Length")]
    pub min_length: Option<usize>,
    #[serde(rename = "Maximum Value")]
    pub max_value: Option<String>,
    #[serde(rename = "Minimum Value")]
    pub min_value: Option<String>,
    /// Distinct format signatures of the sampled cells, in sample order.
    #[serde(rename = "Format")]
    pub formats: Vec<String>,
    /// Distinct sampled cell values, in sample order.
    #[serde(rename = "Sample Value")]
    pub samples: Vec<String>,
}

/// A column profile tagged with the column's position in its dataset.
///
/// Profiles may be produced out of order; `index` restores dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfiledColumn {
    pub index: usize,
    pub name: String,
    pub profile: ColumnProfile,
}

impl ColumnProfile {
    /// Profile of a column in a dataset without rows.
    pub fn undefined(data_type: DataType) -> Self {
        Self {
            data_type,
            completeness: None,
            missing_values: 0,
            uniqueness: None,
            max_length: None,
            min_length: None,
            max_value: None,
            min_value: None,
            formats: Vec::new(),
            samples: Vec::new(),
        }
    }
}
