//! Shared data model for data-quality profiling: the parsed [`Dataset`], its
//! [`Column`]s with their inferred [`DataType`], and the per-column
//! [`ColumnProfile`].

pub mod data_type;
pub mod dataset;
pub mod error;
#[cfg(feature = "polars")]
pub mod frame;
pub mod profile;

pub use data_type::DataType;
pub use dataset::{Column, Dataset, MISSING_REPR};
pub use error::{ModelError, Result};
pub use profile::{ColumnProfile, ProfiledColumn};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_with_report_field_names() {
        let profile = ColumnProfile {
            data_type: DataType::Int64,
            completeness: Some(100),
            missing_values: 0,
            uniqueness: Some(100),
            max_length: Some(1),
            min_length: Some(1),
            max_value: Some("3".to_string()),
            min_value: Some("1".to_string()),
            formats: vec!["9".to_string()],
            samples: vec!["2".to_string(), "1".to_string()],
        };
        let json = serde_json::to_value(&profile).expect("serialize profile");
        assert_eq!(json["Data Type"], "int64");
        assert_eq!(json["Completeness %"], 100);
        assert_eq!(json["Format"][0], "9");
        let round: ColumnProfile = serde_json::from_value(json).expect("deserialize profile");
        assert_eq!(round, profile);
    }

    #[test]
    fn undefined_profile_has_no_ratios() {
        let profile = ColumnProfile::undefined(DataType::Object);
        assert!(profile.completeness.is_none());
        assert!(profile.uniqueness.is_none());
        assert!(profile.max_length.is_none());
        assert!(profile.formats.is_empty());
    }
}
