//! Delimited text → [`Dataset`].

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use csv::{ByteRecord, ReaderBuilder};
use tracing::{debug, info_span};

use dq_model::{Column, Dataset};

use crate::error::{IngestError, Result};
use crate::header::{build_column_names, is_blank_header};
use crate::options::{IngestOptions, RaggedRows};

/// Loads a dataset from a delimited text stream whose first record is the
/// header.
pub fn load_dataset<R: Read>(reader: R, options: &IngestOptions) -> Result<Dataset> {
    let span = info_span!("load", delimiter = %options.delimiter);
    let _guard = span.enter();
    let start = Instant::now();

    let delimiter = delimiter_byte(options.delimiter)?;
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);
    let mut records = csv_reader.byte_records();

    let header_record = match records.next() {
        Some(record) => record?,
        None => return Err(IngestError::EmptyInput),
    };
    let raw_headers = decode_record(&header_record, record_line(&header_record, 1))?;
    if is_blank_header(&raw_headers) {
        return Err(IngestError::EmptyHeader);
    }
    let names = build_column_names(&raw_headers);
    let width = names.len();

    let nulls: HashSet<&str> = options.null_values.iter().map(String::as_str).collect();
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    let mut row_count = 0usize;
    for (idx, record) in records.enumerate() {
        let record = record?;
        let line = record_line(&record, idx as u64 + 2);
        let found = record.len();
        if found > width || (found < width && options.ragged_rows == RaggedRows::Reject) {
            return Err(IngestError::RaggedRow {
                line,
                expected: width,
                found,
            });
        }
        for (field, column) in cells.iter_mut().enumerate() {
            let cell = match record.get(field) {
                Some(bytes) => {
                    let value = decode_field(bytes, line, field)?;
                    if nulls.contains(value) {
                        None
                    } else {
                        Some(value.to_string())
                    }
                }
                None => None,
            };
            column.push(cell);
        }
        row_count += 1;
    }

    let dataset = if row_count == 0 {
        Dataset::empty(&names)?
    } else {
        let columns: Vec<Column> = names
            .into_iter()
            .zip(cells)
            .map(|(name, values)| Column::new(name, values))
            .collect();
        Dataset::new(columns)?
    };
    debug!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Loads a dataset from a file. The file handle is released on every path.
pub fn load_dataset_from_path(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    load_dataset(BufReader::new(file), options)
}

/// Loads a dataset from in-memory text.
pub fn load_dataset_from_str(text: &str, options: &IngestOptions) -> Result<Dataset> {
    load_dataset(text.as_bytes(), options)
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(IngestError::InvalidDelimiter { delimiter })
    }
}

fn record_line(record: &ByteRecord, fallback: u64) -> u64 {
    record.position().map_or(fallback, csv::Position::line)
}

fn decode_field(bytes: &[u8], line: u64, field: usize) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 { line, field })
}

fn decode_record(record: &ByteRecord, line: u64) -> Result<Vec<String>> {
    record
        .iter()
        .enumerate()
        .map(|(field, bytes)| decode_field(bytes, line, field).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_ascii_delimiter() {
        let options = IngestOptions::default().with_delimiter('§');
        let err = load_dataset_from_str("a\n1\n", &options).unwrap_err();
        assert!(matches!(err, IngestError::InvalidDelimiter { .. }));
    }

    #[test]
    fn reports_invalid_utf8_position() {
        let bytes: &[u8] = b"a,b\n1,\xff\n";
        let err = load_dataset(bytes, &IngestOptions::default()).unwrap_err();
        match err {
            IngestError::InvalidUtf8 { line, field } => {
                assert_eq!(line, 2);
                assert_eq!(field, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
