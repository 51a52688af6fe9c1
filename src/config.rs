//! Configuration for bootstrap runs.

use serde::{Deserialize, Serialize};

/// Configuration options for [`Bootstrap`](crate::Bootstrap).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of bootstrap replicates (default: 1,000).
    pub n_boot: usize,

    /// Optional deterministic seed for resampling randomness.
    ///
    /// When `None`, a base seed is drawn once per run from the thread-local
    /// generator and reported in the result metadata, so any run can be
    /// replayed.
    pub seed: Option<u64>,

    /// Run replicates on the shared worker pool (default: true).
    ///
    /// Has no effect unless the crate is built with the `parallel` feature.
    /// Results are identical either way for a given seed.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_boot: 1_000,
            seed: None,
            parallel: true,
        }
    }
}
