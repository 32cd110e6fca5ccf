//! Error types for the prediction core
//!
//! Every variant is recoverable: the caller gets the error back and decides
//! how to report it. Low confidence is not an error, see
//! [`crate::regression::Confidence`].

use crate::sample::Parity;
use thiserror::Error;

/// Errors surfaced by the prediction pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// The target house number is not a positive integer
    #[error("Invalid target house number: {0:?} (expected a positive integer)")]
    InvalidTarget(String),

    /// Fewer samples than the regression needs after filtering
    #[error(
        "Insufficient data: need at least {required} {parity} house numbers, found {found}"
    )]
    InsufficientData {
        parity: Parity,
        required: usize,
        found: usize,
    },

    /// All regression x-coordinates are identical
    #[error("Degenerate input: all {count} transformed house numbers are identical")]
    DegenerateInput { count: usize },

    /// Regression arrays are not paired
    #[error("Invalid regression input: {0}")]
    InvalidInput(String),
}
