//! JSON serialization of reports: an array of objects keyed `Column` plus the
//! report field names.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::Result;
use crate::report::{Report, ReportRow};

pub fn write_json<W: Write>(report: &Report, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

pub fn write_json_to_path(report: &Report, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(report, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Reads a report written by [`write_json`], applying the same row checks as
/// assembly.
pub fn read_json<R: Read>(reader: R) -> Result<Report> {
    let rows: Vec<ReportRow> = serde_json::from_reader(reader)?;
    Ok(Report::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AssemblyError, ReportError};
    use dq_model::{ColumnProfile, DataType};

    #[test]
    fn json_rows_carry_column_key() {
        let report = Report::from_rows(vec![ReportRow {
            column: "id".to_string(),
            profile: ColumnProfile::undefined(DataType::Int64),
        }])
        .unwrap();
        let mut buffer = Vec::new();
        write_json(&report, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["Column"], "id");
        assert_eq!(value[0]["Data Type"], "int64");
        assert!(value[0]["Completeness %"].is_null());

        let round = read_json(buffer.as_slice()).unwrap();
        assert_eq!(round, report);
    }

    #[test]
    fn rejects_empty_report() {
        let err = read_json("[]".as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::Assembly(AssemblyError::Empty)));
    }

    #[test]
    fn rejects_duplicate_columns() {
        let row = ReportRow {
            column: "a".to_string(),
            profile: ColumnProfile::undefined(DataType::Object),
        };
        let text = serde_json::to_string(&vec![row.clone(), row]).unwrap();
        let err = read_json(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ReportError::Assembly(AssemblyError::DuplicateColumn { ref name }) if name == "a"
        ));
    }
}
