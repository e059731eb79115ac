//! Solution modifiers.
//!
//! Each modifier transforms an already-produced solution sequence; none of
//! them touches the graph.

use std::collections::HashSet;
use triplet_pattern::Solution;

use crate::options::{Dedup, QueryOptions};
use crate::Solutions;

/// Restrict every solution to the named variables.
pub(crate) fn project<S: AsRef<str>>(rows: Vec<Solution>, names: &[S]) -> Vec<Solution> {
    rows.into_iter().map(|row| row.project(names)).collect()
}

/// Remove all duplicates, keeping the first occurrence of each solution.
pub(crate) fn distinct(rows: Vec<Solution>) -> Vec<Solution> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut distinct_rows = Vec::new();

    for row in rows {
        if !seen.contains(&row) {
            seen.insert(row.clone());
            distinct_rows.push(row);
        }
    }

    distinct_rows
}

/// Remove adjacent duplicates only.
///
/// This needs no memory beyond the previous row, and satisfies the reduced
/// contract: rows are never added or reordered, and a fully deduplicated
/// sequence is a valid result but is not required.
pub(crate) fn reduced(mut rows: Vec<Solution>) -> Vec<Solution> {
    rows.dedup();
    rows
}

/// Drop the first `n` rows.
pub(crate) fn offset(mut rows: Vec<Solution>, n: usize) -> Vec<Solution> {
    if n >= rows.len() {
        rows.clear();
    } else {
        rows.drain(..n);
    }
    rows
}

/// Keep at most `n` rows.
pub(crate) fn limit(mut rows: Vec<Solution>, n: usize) -> Vec<Solution> {
    rows.truncate(n);
    rows
}

/// Apply every configured modifier in the fixed order
/// projection, duplicate elimination, offset, limit.
pub(crate) fn apply(solutions: Solutions, options: &QueryOptions) -> Solutions {
    if options.is_identity() {
        return solutions;
    }

    let input = solutions.len();
    let mut solutions = solutions;

    if let Some(names) = &options.projection {
        solutions = solutions.project(names);
    }

    solutions = match options.dedup {
        Dedup::None => solutions,
        Dedup::Distinct => solutions.distinct(),
        Dedup::Reduced => solutions.reduced(),
    };

    if options.offset > 0 {
        solutions = solutions.offset(options.offset);
    }

    if let Some(n) = options.limit {
        solutions = solutions.limit(n);
    }

    tracing::debug!(
        input,
        output = solutions.len(),
        dedup = ?options.dedup,
        offset = options.offset,
        limit = ?options.limit,
        "applied solution modifiers"
    );

    solutions
}
