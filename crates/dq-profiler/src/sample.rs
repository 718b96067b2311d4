//! Random sampling for the Format and Sample Value fields.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dq_model::Column;

use crate::format::format_signature;

/// RNG for the column at `index`.
///
/// Seeded runs derive one stream per column so results do not depend on which
/// worker profiles which column.
pub fn column_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    }
}

/// Draws up to `size` distinct rows without replacement and maps each row's
/// representation through `map`, keeping the first occurrence of each result.
fn sample_distinct<R, F>(column: &Column, size: usize, rng: &mut R, map: F) -> Vec<String>
where
    R: Rng + ?Sized,
    F: Fn(&str) -> String,
{
    let amount = size.min(column.len());
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(amount);
    for row in rand::seq::index::sample(rng, column.len(), amount) {
        let Some(repr) = column.repr_at(row) else {
            continue;
        };
        let value = map(repr);
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Distinct format signatures of up to `size` sampled cells.
pub fn sample_formats<R: Rng + ?Sized>(column: &Column, size: usize, rng: &mut R) -> Vec<String> {
    sample_distinct(column, size, rng, format_signature)
}

/// Distinct values of up to `size` sampled cells.
pub fn sample_values<R: Rng + ?Sized>(column: &Column, size: usize, rng: &mut R) -> Vec<String> {
    sample_distinct(column, size, rng, str::to_string)
}
