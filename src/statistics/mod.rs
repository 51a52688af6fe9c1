//! Statistical building blocks for the bootstrap pipeline.
//!
//! - Resampling with replacement driven by a caller-supplied `rand::Rng`
//! - Median via full sort with a total order over `f64`
//! - Mean, population variance, and standard error of replicate values

mod dispersion;
mod median;
mod resample;

pub use dispersion::{mean, population_variance, standard_error};
pub use median::{median, median_inplace};
pub use resample::{counter_rng_seed, resample, resample_into};

pub(crate) use median::median_of_sorted_buffer;
pub(crate) use resample::fill_resample;
