//! Resampling with replacement.
//!
//! Each output position is filled independently by drawing a uniform index
//! into the source data. The same source element may appear any number of
//! times in one resample.

use rand::Rng;

use crate::error::{ensure_non_empty, InvalidInput, Result};

/// Counter-based RNG seed generation using SplitMix64.
///
/// Derives a well-distributed seed for replicate `counter` from a base
/// seed, so every replicate gets its own independent stream without
/// touching a shared generator. Replicate `i` always sees the same stream
/// whichever worker runs it.
///
/// # Arguments
///
/// * `base_seed` - Seed owned by the orchestrator for the whole run
/// * `counter` - Replicate index (0, 1, 2, ...)
#[inline]
pub fn counter_rng_seed(base_seed: u64, counter: u64) -> u64 {
    // See: https://xoshiro.di.unimi.it/splitmix64.c
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Draw one resample of `data` into an existing buffer.
///
/// Writes `out.len()` values, each a copy of `data[k]` for a fresh uniform
/// `k` in `[0, n)`. Used in the replicate loop to avoid reallocating a
/// resample per iteration.
///
/// # Errors
///
/// Returns `InvalidInput::EmptyDataset` if `data` is empty and
/// `InvalidInput::LengthMismatch` if `out.len() != data.len()`.
pub fn resample_into<R: Rng + ?Sized>(data: &[f64], rng: &mut R, out: &mut [f64]) -> Result<()> {
    ensure_non_empty(data)?;
    if out.len() != data.len() {
        return Err(InvalidInput::LengthMismatch {
            expected: data.len(),
            actual: out.len(),
        }
        .into());
    }

    fill_resample(data, rng, out);
    Ok(())
}

/// Draw one resample of `data`.
///
/// Returns a freshly allocated vector of the same length as `data`.
///
/// # Errors
///
/// Returns `InvalidInput::EmptyDataset` if `data` is empty.
pub fn resample<R: Rng + ?Sized>(data: &[f64], rng: &mut R) -> Result<Vec<f64>> {
    ensure_non_empty(data)?;

    let n = data.len();
    let result = (0..n).map(|_| data[rng.random_range(0..n)]).collect();
    Ok(result)
}

/// Unchecked core of [`resample_into`]; callers guarantee a non-empty
/// `data` and a matching `out`.
#[inline]
pub(crate) fn fill_resample<R: Rng + ?Sized>(data: &[f64], rng: &mut R, out: &mut [f64]) {
    debug_assert_eq!(out.len(), data.len());
    let n = data.len();
    for slot in out.iter_mut() {
        *slot = data[rng.random_range(0..n)];
    }
}
