// Title number regression with single-outlier rejection
//
// Fits title number against a parity-aware sequence index of the house
// number using ordinary least squares. R² is the confidence proxy: below the
// threshold, the single worst-fitting sample is excluded and the line refit.
//
// Policy constants are fixed and not configurable:
// - confidence threshold: 90% R²
// - minimum samples for a fit: 2
// - minimum samples before excluding one: 3

mod input;
mod outlier;
mod statistics;
mod verdict;

pub use input::RegressionInput;
pub use outlier::{find_worst, Outlier};
pub use statistics::{fit, r_squared, FitResult};
pub use verdict::{
    predict, round_half_away_from_zero, Confidence, LowConfidenceReason, PredictionOutcome,
};

/// R² percentage at or above which a fit is trusted
pub const CONFIDENCE_THRESHOLD_PERCENT: f64 = 90.0;

/// Fewest samples a line can be fit through
pub const MIN_SAMPLES: usize = 2;

/// Fewest samples before one may be excluded as an outlier
pub const MIN_SAMPLES_FOR_EXCLUSION: usize = 3;

#[cfg(test)]
mod tests;
