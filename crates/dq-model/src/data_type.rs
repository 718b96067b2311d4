//! Primitive column types inferred from raw cell text.
//!
//! Inference only decides how a column is labelled in the report; cells are
//! never coerced. The names match the dtype labels analysts already know from
//! dataframe tooling (`int64`, `float64`, `bool`, `object`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inferred primitive type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Every present value parses as a signed 64-bit integer.
    Int64,
    /// Every present value parses as a float (and at least one is not an integer).
    Float64,
    /// Every present value is a boolean literal.
    Bool,
    /// Text, mixed content, or no present values at all.
    #[default]
    Object,
}

const TRUE_LITERALS: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_LITERALS: [&str; 3] = ["false", "False", "FALSE"];

impl DataType {
    /// Returns the label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int64 => "int64",
            DataType::Float64 => "float64",
            DataType::Bool => "bool",
            DataType::Object => "object",
        }
    }

    /// Infers the type of a column from its present (non-missing) cells.
    ///
    /// Integers win over floats, floats over booleans; anything else, including
    /// a column with no present values, is `Object`.
    ///
    /// Missing cells are not inspected, so an integer column with gaps stays
    /// `Int64` (dataframe readers would widen it to `float64`).
    pub fn infer<'a, I>(values: I) -> DataType
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = 0usize;
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;
        for value in values {
            seen += 1;
            if all_int && value.parse::<i64>().is_err() {
                all_int = false;
            }
            if all_float && !all_int && value.parse::<f64>().is_err() {
                all_float = false;
            }
            if all_bool && !is_bool_literal(value) {
                all_bool = false;
            }
            if !all_int && !all_float && !all_bool {
                return DataType::Object;
            }
        }
        if seen == 0 {
            DataType::Object
        } else if all_int {
            DataType::Int64
        } else if all_float {
            DataType::Float64
        } else if all_bool {
            DataType::Bool
        } else {
            DataType::Object
        }
    }
}

fn is_bool_literal(value: &str) -> bool {
    TRUE_LITERALS.contains(&value) || FALSE_LITERALS.contains(&value)
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "int64" => Ok(DataType::Int64),
            "float64" => Ok(DataType::Float64),
            "bool" => Ok(DataType::Bool),
            "object" => Ok(DataType::Object),
            _ => Err(format!("Unknown data type: {s}")),
        }
    }
}
