//! Main `Bootstrap` entry point and builder.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::error::{ensure_finite, ensure_non_empty, InvalidInput, Result};
use crate::result::{BootstrapResult, Metadata};
use crate::statistics::{counter_rng_seed, fill_resample, median_of_sorted_buffer, standard_error};
use crate::thread_pool;

/// Bootstrap estimator for the standard error of the median.
///
/// Use the builder pattern to configure and run.
///
/// # Example
///
/// ```
/// use bootstrap_median::Bootstrap;
///
/// let data = [1.2, 2.4, 3.6, 4.8, 5.0, 6.1, 7.3, 8.4, 9.9];
/// let result = Bootstrap::new().n_boot(500).seed(7).run(&data).unwrap();
///
/// assert_eq!(result.statistics.len(), 500);
/// assert!(result.std_error >= 0.0);
/// ```
///
/// # Randomness
///
/// The run owns a single base seed (from [`seed`](Self::seed) or drawn once
/// from the thread-local generator). Replicate `i` resamples from its own
/// `Xoshiro256PlusPlus` stream derived from `(base_seed, i)`, so sequential
/// and parallel runs with the same seed produce identical results.
#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
    config: Config,
}

impl Bootstrap {
    /// Create with default configuration (1,000 replicates, random seed).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create with a reduced replicate count for quick checks.
    ///
    /// Settings:
    /// - 200 replicates (vs 1,000 default)
    pub fn quick() -> Self {
        Self {
            config: Config {
                n_boot: 200,
                ..Config::default()
            },
        }
    }

    /// Set the number of bootstrap replicates.
    pub fn n_boot(mut self, n: usize) -> Self {
        self.config.n_boot = n;
        self
    }

    /// Fix the base seed for a reproducible run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable or disable parallel replicate execution.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.config.parallel = enabled;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the bootstrap on `data`.
    ///
    /// Draws `n_boot` resamples of `data`, takes the median of each, and
    /// reports the medians together with their population standard
    /// deviation.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `data` is empty, contains a NaN or infinite
    /// value, or if `n_boot` is zero. Nothing is drawn in that case.
    pub fn run(&self, data: &[f64]) -> Result<BootstrapResult> {
        let n_boot = self.config.n_boot;
        validate(data, n_boot)?;

        let start = Instant::now();
        let base_seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let parallel = self.config.parallel && cfg!(feature = "parallel");

        if self.config.parallel && !parallel {
            tracing::debug!("parallel execution requested but the `parallel` feature is disabled");
        }
        let workers = if parallel { thread_pool::worker_count() } else { 1 };
        tracing::debug!(
            sample_size = data.len(),
            n_boot,
            seed = base_seed,
            workers,
            "starting bootstrap run"
        );

        #[cfg(feature = "parallel")]
        let statistics = if parallel {
            run_replicates_parallel(data, base_seed, n_boot)
        } else {
            run_replicates_sequential(data, base_seed, n_boot)
        };

        #[cfg(not(feature = "parallel"))]
        let statistics = run_replicates_sequential(data, base_seed, n_boot);

        let std_error = standard_error(&statistics)?;
        let runtime_secs = start.elapsed().as_secs_f64();

        tracing::debug!(std_error, runtime_secs, "bootstrap run finished");

        Ok(BootstrapResult {
            statistics,
            std_error,
            metadata: Metadata {
                sample_size: data.len(),
                n_boot,
                seed: Some(base_seed),
                parallel,
                runtime_secs,
            },
        })
    }
}

/// Run the bootstrap sequentially with a caller-owned random source.
///
/// Consumes exactly `n_boot * data.len()` index draws from `rng`, in
/// replicate order. Two calls with generators in the same state return
/// identical results.
///
/// # Errors
///
/// Same as [`Bootstrap::run`].
pub fn bootstrap_sample_with_rng<R: Rng + ?Sized>(
    data: &[f64],
    n_boot: usize,
    rng: &mut R,
) -> Result<BootstrapResult> {
    validate(data, n_boot)?;

    let start = Instant::now();
    tracing::debug!(
        sample_size = data.len(),
        n_boot,
        "starting bootstrap run with caller-owned generator"
    );

    let mut buffer = vec![0.0; data.len()];
    let statistics: Vec<f64> = (0..n_boot)
        .map(|_| {
            fill_resample(data, rng, &mut buffer);
            median_of_sorted_buffer(&mut buffer)
        })
        .collect();

    let std_error = standard_error(&statistics)?;
    let runtime_secs = start.elapsed().as_secs_f64();

    tracing::debug!(std_error, runtime_secs, "bootstrap run finished");

    Ok(BootstrapResult {
        statistics,
        std_error,
        metadata: Metadata {
            sample_size: data.len(),
            n_boot,
            seed: None,
            parallel: false,
            runtime_secs,
        },
    })
}

fn validate(data: &[f64], n_boot: usize) -> Result<()> {
    ensure_non_empty(data)?;
    if n_boot == 0 {
        return Err(InvalidInput::ZeroReplicates.into());
    }
    ensure_finite(data)
}

/// Resample and take the median for replicate `index`.
///
/// `buffer` is scratch space of length `data.len()`; its contents on return
/// are the sorted resample.
#[inline]
fn run_replicate(data: &[f64], base_seed: u64, index: usize, buffer: &mut [f64]) -> f64 {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(base_seed, index as u64));
    fill_resample(data, &mut rng, buffer);
    median_of_sorted_buffer(buffer)
}

fn run_replicates_sequential(data: &[f64], base_seed: u64, n_boot: usize) -> Vec<f64> {
    let mut statistics = vec![0.0; n_boot];
    let mut buffer = vec![0.0; data.len()];
    for (i, slot) in statistics.iter_mut().enumerate() {
        *slot = run_replicate(data, base_seed, i, &mut buffer);
    }
    statistics
}

#[cfg(feature = "parallel")]
fn run_replicates_parallel(data: &[f64], base_seed: u64, n_boot: usize) -> Vec<f64> {
    let n = data.len();
    let mut statistics = vec![0.0; n_boot];
    thread_pool::install(|| {
        // Each worker owns one scratch buffer and writes only its own slots.
        statistics.par_iter_mut().enumerate().for_each_init(
            || vec![0.0; n],
            |buffer, (i, slot)| {
                *slot = run_replicate(data, base_seed, i, buffer);
            },
        );
    });
    statistics
}
