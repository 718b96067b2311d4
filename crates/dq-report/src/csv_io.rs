//! Delimited-text serialization of reports.
//!
//! Layout: a header row with an empty index cell followed by [`FIELD_NAMES`],
//! then one row per source column starting with the column name. Format and
//! Sample Value hold JSON arrays of strings; undefined values are empty cells.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use dq_model::{ColumnProfile, DataType};

use crate::error::{ReportError, Result};
use crate::report::{FIELD_NAMES, Report, ReportRow};

/// Suffix appended to a dataset's file stem to name its report.
pub const REPORT_SUFFIX: &str = "_output";

/// Path of the report written next to `input`: `<stem>_output.csv`.
pub fn report_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{REPORT_SUFFIX}.csv"))
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn list(values: &[String]) -> Result<String> {
    Ok(serde_json::to_string(values)?)
}

/// Writes `report` as delimited text.
pub fn write_csv<W: Write>(report: &Report, writer: W, delimiter: u8) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    let mut header = vec![""];
    header.extend(FIELD_NAMES);
    csv_writer.write_record(&header)?;
    for row in report.rows() {
        let profile = &row.profile;
        csv_writer.write_record([
            row.column.clone(),
            profile.data_type.to_string(),
            opt(profile.completeness),
            profile.missing_values.to_string(),
            opt(profile.uniqueness),
            opt(profile.max_length),
            opt(profile.min_length),
            opt(profile.max_value.as_deref()),
            opt(profile.min_value.as_deref()),
            list(&profile.formats)?,
            list(&profile.samples)?,
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders `report` as comma-delimited text.
pub fn to_csv_string(report: &Report) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer, b',')?;
    String::from_utf8(buffer).map_err(|e| ReportError::Parse {
        line: 0,
        field: "report",
        message: e.to_string(),
    })
}

/// Writes `report` to `path`, replacing any existing file.
pub fn write_csv_to_path(report: &Report, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_csv(report, &mut writer, b',')?;
    writer.flush()?;
    Ok(())
}

/// Reads a report previously written by [`write_csv`].
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<Report> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(reader);
    let header = csv_reader.headers()?.clone();
    let expected_header = std::iter::once("").chain(FIELD_NAMES);
    if header.len() != FIELD_NAMES.len() + 1 || !header.iter().eq(expected_header) {
        return Err(ReportError::Header {
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(parse_row(&record)?);
    }
    Ok(Report::from_rows(rows)?)
}

fn parse_row(record: &StringRecord) -> Result<ReportRow> {
    let line = record.position().map_or(0, csv::Position::line);
    let cell = |idx: usize| record.get(idx).unwrap_or("");
    let parse_err = |field: &'static str, message: String| ReportError::Parse {
        line,
        field,
        message,
    };

    let data_type: DataType = cell(1)
        .parse()
        .map_err(|message| parse_err(FIELD_NAMES[0], message))?;
    let completeness = parse_opt::<u32>(cell(2)).map_err(|m| parse_err(FIELD_NAMES[1], m))?;
    let missing_values = cell(3)
        .parse::<usize>()
        .map_err(|e| parse_err(FIELD_NAMES[2], e.to_string()))?;
    let uniqueness = parse_opt::<u32>(cell(4)).map_err(|m| parse_err(FIELD_NAMES[3], m))?;
    let max_length = parse_opt::<usize>(cell(5)).map_err(|m| parse_err(FIELD_NAMES[4], m))?;
    let min_length = parse_opt::<usize>(cell(6)).map_err(|m| parse_err(FIELD_NAMES[5], m))?;
    // Extremes are undefined exactly when the percentages are; an empty cell
    // in a defined row is the empty string.
    let defined = completeness.is_some();
    let value = |idx: usize| defined.then(|| cell(idx).to_string());
    let formats: Vec<String> =
        serde_json::from_str(cell(9)).map_err(|e| parse_err(FIELD_NAMES[8], e.to_string()))?;
    let samples: Vec<String> =
        serde_json::from_str(cell(10)).map_err(|e| parse_err(FIELD_NAMES[9], e.to_string()))?;

    Ok(ReportRow {
        column: cell(0).to_string(),
        profile: ColumnProfile {
            data_type,
            completeness,
            missing_values,
            uniqueness,
            max_length,
            min_length,
            max_value: value(7),
            min_value: value(8),
            formats,
            samples,
        },
    })
}

fn parse_opt<T>(raw: &str) -> std::result::Result<Option<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if raw.is_empty() {
        Ok(None)
    } else {
        raw.parse::<T>().map(Some).map_err(|e| e.to_string())
    }
}
