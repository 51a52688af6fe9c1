//! Mean, population variance, and standard error of replicate statistics.
//!
//! The standard error is the population standard deviation (divide by `n`,
//! not `n - 1`) of the bootstrap replicate values.
//!
//! Deviations are computed on values rescaled by their largest magnitude,
//! so squaring neither underflows for tiny inputs nor overflows near
//! `f64::MAX`. The result is scaled back after the square root.

use crate::error::{ensure_finite, ensure_non_empty, Result};

/// Arithmetic mean of `values`.
///
/// Finite inputs always give a finite mean, including values near `f64::MAX`.
///
/// # Errors
///
/// Returns `InvalidInput::EmptyDataset` if `values` is empty.
pub fn mean(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values)?;
    Ok(mean_unchecked(values))
}

/// Population variance of `values`: the mean squared deviation from the mean.
///
/// Equal to `standard_error(values)` squared. A sequence of identical values
/// has variance exactly zero. For spreads beyond `sqrt(f64::MAX)` or below
/// `sqrt(f64::MIN_POSITIVE)` the square saturates; use [`standard_error`]
/// there.
///
/// # Errors
///
/// Returns `InvalidInput::EmptyDataset` if `values` is empty and
/// `InvalidInput::NonFiniteValue` if any value is NaN or infinite.
pub fn population_variance(values: &[f64]) -> Result<f64> {
    let se = standard_error(values)?;
    Ok(se * se)
}

/// Standard error of a statistic from its bootstrap replicates.
///
/// Returns the population standard deviation of `values`. It is always
/// `>= 0`, finite for finite input, and zero exactly when every value is
/// equal.
///
/// # Errors
///
/// Returns `InvalidInput::EmptyDataset` if `values` is empty and
/// `InvalidInput::NonFiniteValue` if any value is NaN or infinite.
pub fn standard_error(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values)?;
    ensure_finite(values)?;

    let first = values[0];
    if values.iter().all(|&v| v == first) {
        // Skip the arithmetic: mean() of equal values can round away from
        // the value itself and leave a tiny nonzero residue.
        return Ok(0.0);
    }

    // Not all equal, so at least one value is nonzero.
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let scaled: Vec<f64> = values.iter().map(|v| v / scale).collect();

    let mu = mean_unchecked(&scaled);
    let mean_sq = scaled.iter().map(|&w| (w - mu) * (w - mu)).sum::<f64>() / scaled.len() as f64;

    // Distinct values never report zero spread, even when the true value
    // lies below the smallest subnormal.
    Ok((scale * mean_sq.sqrt()).max(f64::from_bits(1)))
}

#[inline]
fn mean_unchecked(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return sum / n;
    }
    // Partial sums overflowed; dividing first keeps every partial sum
    // within the largest input magnitude.
    values.iter().map(|v| v / n).sum()
}
