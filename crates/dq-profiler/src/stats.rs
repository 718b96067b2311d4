//! Deterministic column statistics.

use std::collections::HashSet;

use dq_model::Column;

/// `trunc(100 * count / total)`, or `None` when `total` is zero.
pub fn percent(count: usize, total: usize) -> Option<u32> {
    if total == 0 {
        return None;
    }
    let pct = (count as u128 * 100) / total as u128;
    u32::try_from(pct).ok()
}

/// Percentage of present cells.
pub fn completeness(column: &Column, row_count: usize) -> Option<u32> {
    percent(row_count.saturating_sub(column.missing_count()), row_count)
}

/// Number of distinct present values.
pub fn distinct_count(column: &Column) -> usize {
    column.present().collect::<HashSet<&str>>().len()
}

/// Percentage of distinct present values over all rows.
pub fn uniqueness(column: &Column, row_count: usize) -> Option<u32> {
    percent(distinct_count(column), row_count)
}

/// Minimum and maximum character length over every cell's representation.
pub fn length_bounds(column: &Column) -> Option<(usize, usize)> {
    column
        .reprs()
        .map(|repr| repr.chars().count())
        .fold(None, |bounds, len| match bounds {
            None => Some((len, len)),
            Some((min, max)) => Some((min.min(len), max.max(len))),
        })
}

/// Lexicographic minimum and maximum of every cell's representation.
///
/// Comparison is by code point even for numeric columns, so `"9"` sorts
/// after `"10"`.
pub fn value_bounds(column: &Column) -> Option<(String, String)> {
    let min = column.reprs().min()?;
    let max = column.reprs().max()?;
    Some((min.to_string(), max.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[Option<&str>]) -> Column {
        Column::new(
            "c",
            values.iter().map(|v| v.map(str::to_string)).collect(),
        )
    }

    #[test]
    fn percent_truncates() {
        assert_eq!(percent(2, 3), Some(66));
        assert_eq!(percent(1, 5), Some(20));
        assert_eq!(percent(29, 100), Some(29));
        assert_eq!(percent(0, 0), None);
    }

    #[test]
    fn uniqueness_ignores_missing_cells() {
        let col = column(&[Some("a"), Some("a"), None, Some("b")]);
        assert_eq!(distinct_count(&col), 2);
        assert_eq!(uniqueness(&col, 4), Some(50));
        assert_eq!(completeness(&col, 4), Some(75));
    }

    #[test]
    fn lengths_count_characters_and_missing_as_empty() {
        let col = column(&[Some("héllo"), None, Some("ab")]);
        assert_eq!(length_bounds(&col), Some((0, 5)));
    }

    #[test]
    fn extremes_are_lexicographic() {
        let col = column(&[Some("10"), Some("9"), Some("100")]);
        assert_eq!(
            value_bounds(&col),
            Some(("10".to_string(), "9".to_string()))
        );
    }

    #[test]
    fn empty_column_has_no_bounds() {
        let col = column(&[]);
        assert_eq!(length_bounds(&col), None);
        assert_eq!(value_bounds(&col), None);
    }
}
