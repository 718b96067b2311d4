//! Column and dataset profiling.

use std::time::Instant;

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, info_span};

use dq_model::{Column, ColumnProfile, Dataset, ProfiledColumn};

use crate::error::{ProfileError, Result};
use crate::options::ProfileOptions;
use crate::sample::{column_rng, sample_formats, sample_values};
use crate::stats::{completeness, length_bounds, uniqueness, value_bounds};

/// Computes the profile of one column of a dataset with `row_count` rows.
pub fn profile_column<R: Rng + ?Sized>(
    column: &Column,
    row_count: usize,
    options: &ProfileOptions,
    rng: &mut R,
) -> Result<ColumnProfile> {
    if column.len() != row_count {
        return Err(ProfileError::ColumnLength {
            column: column.name().to_string(),
            expected: row_count,
            found: column.len(),
        });
    }
    if row_count == 0 {
        return Ok(ColumnProfile::undefined(column.data_type()));
    }

    let lengths = length_bounds(column);
    let values = value_bounds(column);
    let formats = sample_formats(column, options.format_sample_size, rng);
    let samples = sample_values(column, options.value_sample_size, rng);
    Ok(ColumnProfile {
        data_type: column.data_type(),
        completeness: completeness(column, row_count),
        missing_values: column.missing_count(),
        uniqueness: uniqueness(column, row_count),
        max_length: lengths.map(|(_, max)| max),
        min_length: lengths.map(|(min, _)| min),
        max_value: values.as_ref().map(|(_, max)| max.clone()),
        min_value: values.map(|(min, _)| min),
        formats,
        samples,
    })
}

fn profile_indexed(
    index: usize,
    column: &Column,
    row_count: usize,
    options: &ProfileOptions,
) -> Result<ProfiledColumn> {
    let start = Instant::now();
    let mut rng = column_rng(options.seed, index);
    let profile = profile_column(column, row_count, options, &mut rng)?;
    debug!(
        column = column.name(),
        index,
        duration_ms = start.elapsed().as_millis(),
        "column profiled"
    );
    Ok(ProfiledColumn {
        index,
        name: column.name().to_string(),
        profile,
    })
}

/// Profiles every column of `dataset`.
///
/// Columns are profiled independently, in parallel unless `options.jobs` is
/// `Some(1)`. Results carry their column index; their order is not
/// guaranteed.
pub fn profile_dataset(dataset: &Dataset, options: &ProfileOptions) -> Result<Vec<ProfiledColumn>> {
    if dataset.column_count() == 0 {
        return Err(ProfileError::EmptyDataset);
    }
    let row_count = dataset.row_count();
    let span = info_span!(
        "profile",
        columns = dataset.column_count(),
        rows = row_count,
        jobs = ?options.jobs
    );
    let _guard = span.enter();
    let start = Instant::now();

    let columns = dataset.columns();
    let profiled = match options.jobs {
        Some(1) => columns
            .iter()
            .enumerate()
            .map(|(index, column)| profile_indexed(index, column, row_count, options))
            .collect::<Result<Vec<_>>>()?,
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| ProfileError::WorkerPool(e.to_string()))?;
            pool.install(|| profile_parallel(columns, row_count, options))?
        }
        None => profile_parallel(columns, row_count, options)?,
    };

    info!(
        columns = profiled.len(),
        rows = row_count,
        duration_ms = start.elapsed().as_millis(),
        "profiling complete"
    );
    Ok(profiled)
}

fn profile_parallel(
    columns: &[Column],
    row_count: usize,
    options: &ProfileOptions,
) -> Result<Vec<ProfiledColumn>> {
    columns
        .par_iter()
        .enumerate()
        .map(|(index, column)| profile_indexed(index, column, row_count, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let column = Column::new("a", vec![Some("1".to_string())]);
        let mut rng = column_rng(Some(0), 0);
        let err = profile_column(&column, 2, &ProfileOptions::default(), &mut rng).unwrap_err();
        assert_eq!(
            err,
            ProfileError::ColumnLength {
                column: "a".to_string(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn zero_rows_yield_undefined_profile() {
        let column = Column::new("a", Vec::new());
        let mut rng = column_rng(None, 0);
        let profile = profile_column(&column, 0, &ProfileOptions::default(), &mut rng).unwrap();
        assert_eq!(profile, ColumnProfile::undefined(column.data_type()));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let dataset = Dataset::default();
        assert_eq!(
            profile_dataset(&dataset, &ProfileOptions::default()).unwrap_err(),
            ProfileError::EmptyDataset
        );
    }
}
