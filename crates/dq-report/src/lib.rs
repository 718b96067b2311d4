//! Report assembly and serialization.
//!
//! [`Report::assemble`] turns per-column profiles, produced in any order, into
//! a table indexed by column name in dataset order. The table is written as
//! delimited text ([`write_csv`]) or JSON ([`write_json`]).

pub mod csv_io;
pub mod error;
pub mod json;
pub mod report;

pub use csv_io::{
    REPORT_SUFFIX, read_csv, report_path_for, to_csv_string, write_csv, write_csv_to_path,
};
pub use error::{AssemblyError, ReportError, Result};
pub use json::{read_json, write_json, write_json_to_path};
pub use report::{FIELD_NAMES, Report, ReportRow};
