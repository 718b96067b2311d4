//! Header row normalization.

use std::collections::{BTreeMap, BTreeSet};

/// Strips a leading byte-order mark. Names are otherwise kept verbatim.
pub fn normalize_header(raw: &str) -> String {
    raw.strip_prefix('\u{feff}').unwrap_or(raw).to_string()
}

/// Returns true when the header carries no usable names.
pub fn is_blank_header(raw: &[String]) -> bool {
    raw.iter().all(|name| normalize_header(name).is_empty())
}

/// Normalizes a header row into unique column names.
///
/// Empty names become `Unnamed: <index>`; exact repeats get a `.1`, `.2`, ...
/// suffix in order of appearance. Whitespace is significant.
pub fn build_column_names(raw: &[String]) -> Vec<String> {
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut counters: BTreeMap<String, usize> = BTreeMap::new();
    let mut names = Vec::with_capacity(raw.len());
    for (idx, value) in raw.iter().enumerate() {
        let mut name = normalize_header(value);
        if name.is_empty() {
            name = format!("Unnamed: {idx}");
        }
        if used.contains(&name) {
            let counter = counters.entry(name.clone()).or_insert(0);
            let mut candidate;
            loop {
                *counter += 1;
                candidate = format!("{name}.{counter}");
                if !used.contains(&candidate) {
                    break;
                }
            }
            name = candidate;
        }
        used.insert(name.clone());
        names.push(name);
    }
    names
}
