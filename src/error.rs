//! Error types for bootstrap estimation.
//!
//! Every failure in this crate is a caller-contract violation detected
//! before any numeric work happens, so there is a single error kind.

use thiserror::Error;

/// Error returned by resampling, median, aggregation, and orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BootstrapError {
    /// The input violates the operation's preconditions.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Reason an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The dataset (or value sequence) has no elements.
    #[error("dataset is empty")]
    EmptyDataset,

    /// Zero bootstrap replicates were requested.
    #[error("replicate count must be at least 1")]
    ZeroReplicates,

    /// A NaN or infinite value was found.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first offending value.
        index: usize,
    },

    /// A scratch buffer does not match the dataset length.
    #[error("buffer length {actual} does not match dataset length {expected}")]
    LengthMismatch {
        /// Dataset length.
        expected: usize,
        /// Buffer length supplied by the caller.
        actual: usize,
    },
}

impl BootstrapError {
    /// The underlying rejection reason.
    pub fn reason(&self) -> InvalidInput {
        match self {
            Self::InvalidInput(reason) => *reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Reject empty slices.
pub(crate) fn ensure_non_empty(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(InvalidInput::EmptyDataset.into());
    }
    Ok(())
}

/// Reject slices containing NaN or infinities.
pub(crate) fn ensure_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(InvalidInput::NonFiniteValue { index }.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BootstrapError::from(InvalidInput::EmptyDataset);
        assert_eq!(err.to_string(), "invalid input: dataset is empty");

        let err = BootstrapError::from(InvalidInput::NonFiniteValue { index: 3 });
        assert_eq!(err.to_string(), "invalid input: non-finite value at index 3");
    }

    #[test]
    fn test_ensure_finite_reports_first_index() {
        let err = ensure_finite(&[1.0, f64::NAN, f64::INFINITY]).unwrap_err();
        assert_eq!(err.reason(), InvalidInput::NonFiniteValue { index: 1 });
        assert!(ensure_finite(&[1.0, -2.0]).is_ok());
    }
}
