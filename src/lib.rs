//! # bootstrap-median
//!
//! Estimate the standard error of a sample median by bootstrap resampling.
//!
//! The pipeline draws `n_boot` resamples with replacement from the observed
//! data, computes the median of each, and reports those replicate medians
//! together with their population standard deviation:
//!
//! ```text
//! data ──► resample ×n_boot ──► median ──► replicate medians ──► standard error
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use bootstrap_median::bootstrap_sample;
//!
//! let data = [1.2, 2.4, 3.6, 4.8, 5.0, 6.1, 7.3, 8.4, 9.9];
//! let result = bootstrap_sample(&data, 1000).unwrap();
//!
//! println!("Standard error of median: {:.4}", result.std_error);
//! ```
//!
//! Use [`Bootstrap`] to fix a seed or control parallel execution, or
//! [`bootstrap_sample_with_rng`] to drive resampling from your own
//! generator.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod bootstrap;
mod config;
mod error;
mod result;

// Functional modules
pub mod output;
pub mod statistics;
pub mod thread_pool;

// Re-exports for public API
pub use bootstrap::{bootstrap_sample_with_rng, Bootstrap};
pub use config::Config;
pub use error::{BootstrapError, InvalidInput, Result};
pub use result::{BootstrapResult, Metadata};

/// Bootstrap the median of `data` with default settings.
///
/// Draws `n_boot` resamples with a freshly chosen seed (recorded in
/// `result.metadata.seed`) and returns the replicate medians and their
/// standard error.
///
/// # Errors
///
/// Returns `BootstrapError::InvalidInput` if `data` is empty or contains a
/// non-finite value, or if `n_boot` is zero.
pub fn bootstrap_sample(data: &[f64], n_boot: usize) -> Result<BootstrapResult> {
    Bootstrap::new().n_boot(n_boot).run(data)
}
