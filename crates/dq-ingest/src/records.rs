//! Header-keyed record view of delimited text.
//!
//! Used to hand raw uploads and stored reports back to callers as plain
//! records, without building a typed [`dq_model::Dataset`].

use std::io::Read;

use csv::ReaderBuilder;
use indexmap::IndexMap;

use crate::error::{IngestError, Result};
use crate::header::normalize_header;
use crate::options::IngestOptions;

/// One data row keyed by header name, in header order.
pub type Record = IndexMap<String, String>;

/// Reads every data row as a header → value map.
///
/// Missing trailing fields read as empty strings and extra fields are dropped.
pub fn parse_records<R: Read>(reader: R, options: &IngestOptions) -> Result<Vec<Record>> {
    if !options.delimiter.is_ascii() {
        return Err(IngestError::InvalidDelimiter {
            delimiter: options.delimiter,
        });
    }
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter as u8)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Record = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("");
                (header.clone(), value.to_string())
            })
            .collect();
        records.push(row);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_by_header() {
        let text = "id,name\n1,Alice\n2\n";
        let records = parse_records(text.as_bytes(), &IngestOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["name"], "Alice");
        assert_eq!(records[1]["id"], "2");
        assert_eq!(records[1]["name"], "");
    }

    #[test]
    fn keys_follow_header_order() {
        let text = "zeta,alpha,mid\n1,2,3\n";
        let records = parse_records(text.as_bytes(), &IngestOptions::default()).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn header_names_are_kept_verbatim() {
        let text = "\u{feff} first  name ,id\nAlice,1\n";
        let records = parse_records(text.as_bytes(), &IngestOptions::default()).unwrap();
        assert_eq!(records[0][" first  name "], "Alice");
    }

    #[test]
    fn empty_input_has_no_records() {
        let records = parse_records("".as_bytes(), &IngestOptions::default()).unwrap();
        assert!(records.is_empty());
    }
}
