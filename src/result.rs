//! Bootstrap result types.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::statistics;

/// Complete result of a bootstrap run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapResult {
    /// Median of each replicate, in replicate order (slot `i` holds replicate `i`).
    pub statistics: Vec<f64>,

    /// Bootstrap standard error of the median: population standard
    /// deviation of `statistics`.
    pub std_error: f64,

    /// Run metadata for reproduction and debugging.
    pub metadata: Metadata,
}

/// Metadata describing how a result was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Length of the input dataset (and of every resample).
    pub sample_size: usize,

    /// Number of replicates drawn.
    pub n_boot: usize,

    /// Base seed of the run. `None` when the caller supplied the generator.
    pub seed: Option<u64>,

    /// Whether replicates ran on the worker pool.
    pub parallel: bool,

    /// Wall-clock time of the run in seconds.
    pub runtime_secs: f64,
}

impl BootstrapResult {
    /// Number of replicates.
    pub fn n_boot(&self) -> usize {
        self.statistics.len()
    }

    /// Mean of the replicate medians.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput::EmptyDataset` if `statistics` is empty, which
    /// only happens for results built or deserialized by hand.
    pub fn mean(&self) -> Result<f64> {
        statistics::mean(&self.statistics)
    }

    /// Smallest and largest replicate median, or `None` if there are none.
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.statistics.is_empty() {
            return None;
        }
        Some(
            self.statistics
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                }),
        )
    }
}
