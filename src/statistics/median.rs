//! Median computation by full sort.
//!
//! Ordering uses `f64::total_cmp`, a correct total order over all floats,
//! so no comparator can silently leave the data partially sorted.

use crate::error::{ensure_non_empty, Result};

/// Compute the median of `values` without modifying them.
///
/// The input is copied into a private buffer, sorted ascending, and read at
/// the middle: for odd `n` the element at `n / 2`, for even `n` the average
/// of the elements at `n / 2 - 1` and `n / 2`.
///
/// # Errors
///
/// Returns `InvalidInput::EmptyDataset` if `values` is empty.
pub fn median(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values)?;

    let mut working = values.to_vec();
    Ok(median_of_sorted_buffer(&mut working))
}

/// Compute the median by sorting a mutable slice in-place.
///
/// For hot loops that already own a scratch buffer and don't need to
/// preserve its order. After this call, `data` is sorted ascending.
///
/// # Errors
///
/// Returns `InvalidInput::EmptyDataset` if `data` is empty.
pub fn median_inplace(data: &mut [f64]) -> Result<f64> {
    ensure_non_empty(data)?;
    Ok(median_of_sorted_buffer(data))
}

/// Sort `data` and read its median. Callers guarantee `data` is non-empty.
#[inline]
pub(crate) fn median_of_sorted_buffer(data: &mut [f64]) -> f64 {
    data.sort_unstable_by(|a, b| a.total_cmp(b));
    median_sorted(data)
}

/// Read the median from data already sorted ascending.
#[inline]
fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        midpoint(sorted[n / 2 - 1], sorted[n / 2])
    } else {
        sorted[n / 2]
    }
}

/// Average of `lo <= hi` without overflow for any finite pair.
#[inline]
fn midpoint(lo: f64, hi: f64) -> f64 {
    if (lo < 0.0) != (hi < 0.0) {
        // Opposite signs: the sum cannot overflow.
        (lo + hi) / 2.0
    } else {
        lo + (hi - lo) / 2.0
    }
}
