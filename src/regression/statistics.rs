// Ordinary least-squares fit and goodness-of-fit for title number regression
//
// Plain OLS over (x, y) pairs, no weighting and no regularization:
// - slope     = Σ((x - x̄)(y - ȳ)) / Σ((x - x̄)²)
// - intercept = ȳ - slope·x̄
// - R²        = 1 - SS_res / SS_tot
//
// Two passes over the input: means first, then the centered sums.

use crate::error::PredictionError;
use crate::regression::MIN_SAMPLES;
use serde::{Deserialize, Serialize};

/// Fitted line with its coefficient of determination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,

    /// Coefficient of determination in [0, 1]
    pub r_squared: f64,
}

impl FitResult {
    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// R² expressed as a percentage, used for confidence classification
    pub fn r_squared_percent(&self) -> f64 {
        self.r_squared * 100.0
    }
}

/// Fit a least-squares line through paired `xs` and `ys`
///
/// # Errors
/// - `InvalidInput` when the slices differ in length
/// - `InsufficientData` when fewer than two points are given
/// - `DegenerateInput` when every x is identical (zero variance)
///
/// # Example
/// ```
/// use titlecast::regression::fit;
///
/// let fit = fit(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// assert_eq!(fit.r_squared, 1.0);
/// ```
pub fn fit(xs: &[f64], ys: &[f64]) -> Result<FitResult, PredictionError> {
    if xs.len() != ys.len() {
        return Err(PredictionError::InvalidInput(format!(
            "x has {} values but y has {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.len() < MIN_SAMPLES {
        return Err(PredictionError::InvalidInput(format!(
            "need at least {} points to fit a line, got {}",
            MIN_SAMPLES,
            xs.len()
        )));
    }

    let x_mean = mean(xs);
    let y_mean = mean(ys);

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        sxy += dx * (y - y_mean);
        sxx += dx * dx;
    }

    if sxx == 0.0 {
        return Err(PredictionError::DegenerateInput { count: xs.len() });
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;

    Ok(FitResult {
        slope,
        intercept,
        r_squared: r_squared(xs, ys, slope, intercept),
    })
}

/// Coefficient of determination of an arbitrary line over paired points
///
/// When every y is identical the ratio is undefined; the line then scores 1
/// if it reproduces the points exactly and 0 otherwise. Negative values (a
/// line worse than the mean) are clamped to 0.
pub fn r_squared(xs: &[f64], ys: &[f64], slope: f64, intercept: f64) -> f64 {
    if ys.is_empty() {
        return 0.0;
    }

    let y_mean = mean(ys);
    let mut ss_tot = 0.0;
    let mut ss_res = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let residual = y - (slope * x + intercept);
        ss_res += residual * residual;
        ss_tot += (y - y_mean) * (y - y_mean);
    }

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }

    (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
