// Title number prediction with confidence classification
//
// Pipeline for one query:
// 1. Partition samples by the target's parity
// 2. Transform house numbers to sequence indices
// 3. Fit a least-squares line
// 4. Below the confidence threshold, drop the single worst point and refit
// 5. Predict at the transformed target and round half away from zero
//
// Low confidence is a classification, not an error: the prediction is still
// returned and must be shown alongside its warning.

use crate::error::PredictionError;
use crate::partition::partition_by_parity;
use crate::regression::input::RegressionInput;
use crate::regression::outlier::find_worst;
use crate::regression::statistics::{fit, FitResult};
use crate::regression::{CONFIDENCE_THRESHOLD_PERCENT, MIN_SAMPLES_FOR_EXCLUSION};
use crate::sample::{Sample, TargetQuery};
use crate::transform::Transform;
use serde::{Deserialize, Serialize};

/// Confidence classification of a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Initial fit reached the threshold
    High,

    /// Threshold reached only after excluding one sample
    Note,

    /// Threshold not reached, see [`LowConfidenceReason`]
    Low,
}

/// Why a prediction was classified [`Confidence::Low`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowConfidenceReason {
    /// Too few samples to try excluding one
    MoreDataNeeded,

    /// Still below threshold after excluding the worst sample
    InconsistentData,
}

/// Final result of a prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub target_house: u32,

    /// Rounded prediction (half away from zero)
    pub predicted_title_number: i64,

    /// Unrounded value of the fitted line at the transformed target
    pub raw_prediction: f64,

    /// Fit the prediction was made with
    pub fit: FitResult,

    pub transform: Transform,
    pub confidence: Confidence,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub low_reason: Option<LowConfidenceReason>,

    /// R² percentage of `fit`
    pub r_squared_percent: f64,

    /// R² percentage of the fit over every matching sample
    pub initial_r_squared_percent: f64,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub excluded_sample: Option<Sample>,

    /// Number of points in `fit`
    pub sample_count: usize,

    /// Category filter the samples were selected with
    pub filter_description: String,
}

impl PredictionOutcome {
    /// One-line confidence message for display next to the prediction
    pub fn message(&self) -> String {
        match (self.confidence, self.low_reason) {
            (Confidence::High, _) => format!(
                "High confidence: the line explains {:.1}% of the variation",
                self.r_squared_percent
            ),
            (Confidence::Note, _) => match &self.excluded_sample {
                Some(sample) => format!(
                    "Confidence improved from {:.1}% to {:.1}% by excluding {}",
                    self.initial_r_squared_percent,
                    self.r_squared_percent,
                    sample.describe()
                ),
                None => format!("Confidence {:.1}%", self.r_squared_percent),
            },
            (Confidence::Low, Some(LowConfidenceReason::InconsistentData)) => format!(
                "Low confidence ({:.1}%): the data is inconsistent, excluding one sample did not help",
                self.r_squared_percent
            ),
            (Confidence::Low, _) => format!(
                "Low confidence ({:.1}%): more data is needed",
                self.r_squared_percent
            ),
        }
    }

    /// Human-readable report
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();

        let marker = match self.confidence {
            Confidence::High => "✅",
            Confidence::Note => "ℹ️ ",
            Confidence::Low => "⚠️ ",
        };
        report.push_str(&format!(
            "{} House {} → predicted title number {}\n\n",
            marker, self.target_house, self.predicted_title_number
        ));

        report.push_str(&format!(
            "Formula: title = {:.4} × x + {:.4}\n",
            self.fit.slope, self.fit.intercept
        ));
        report.push_str(&format!("Transform: {}\n", self.transform.describe()));
        report.push_str(&format!(
            "Raw value: {:.4} (from {} samples)\n",
            self.raw_prediction, self.sample_count
        ));
        report.push_str(&format!("Confidence: {:.1}%\n", self.r_squared_percent));
        report.push_str(&format!("{}\n", self.message()));

        if let Some(sample) = &self.excluded_sample {
            report.push_str(&format!(
                "\n🔇 Excluded sample: {} (R² {:.1}% → {:.1}%)\n",
                sample.describe(),
                self.initial_r_squared_percent,
                self.r_squared_percent
            ));
        }

        report.push_str(&format!("\nFilter: {}\n", self.filter_description));

        report
    }
}

/// Predict the title number for `target` from `samples`
///
/// `samples` must already be filtered by category; parity filtering happens
/// here.
///
/// # Errors
/// - `InsufficientData` when fewer than two samples share the target's parity
/// - `DegenerateInput` when every matching sample maps to the same x
///
/// # Example
/// ```
/// use titlecast::regression::{predict, Confidence};
/// use titlecast::{Sample, TargetQuery};
///
/// let samples = vec![Sample::new(2, 100), Sample::new(4, 102), Sample::new(6, 104)];
/// let outcome = predict(&samples, TargetQuery::new(8).unwrap()).unwrap();
/// assert_eq!(outcome.predicted_title_number, 106);
/// assert_eq!(outcome.confidence, Confidence::High);
/// ```
pub fn predict(
    samples: &[Sample],
    target: TargetQuery,
) -> Result<PredictionOutcome, PredictionError> {
    let matching = partition_by_parity(samples, target.house_number())?;
    let transform = Transform::for_parity(target.parity());
    let input = RegressionInput::from_samples(&matching, transform);

    let initial = fit(input.xs(), input.ys())?;
    let initial_percent = initial.r_squared_percent();
    tracing::debug!(
        "initial fit: slope={:.4} intercept={:.4} r2={:.1}% over {} samples",
        initial.slope,
        initial.intercept,
        initial_percent,
        input.len()
    );

    let mut final_fit = initial;
    let mut sample_count = input.len();
    let mut excluded_sample = None;
    let mut low_reason = None;

    let confidence = if initial_percent >= CONFIDENCE_THRESHOLD_PERCENT {
        Confidence::High
    } else if input.len() >= MIN_SAMPLES_FOR_EXCLUSION {
        match refit_without_worst(&input, &initial) {
            Some((index, corrected))
                if corrected.r_squared_percent() >= CONFIDENCE_THRESHOLD_PERCENT =>
            {
                final_fit = corrected;
                sample_count = input.len() - 1;
                excluded_sample = matching.get(index).cloned();
                Confidence::Note
            }
            _ => {
                low_reason = Some(LowConfidenceReason::InconsistentData);
                Confidence::Low
            }
        }
    } else {
        low_reason = Some(LowConfidenceReason::MoreDataNeeded);
        Confidence::Low
    };

    let raw_prediction = final_fit.predict(transform.apply(target.house_number()));
    let predicted_title_number = round_half_away_from_zero(raw_prediction);

    tracing::debug!(
        "prediction for house {}: {} (raw {:.4}, {:?})",
        target.house_number(),
        predicted_title_number,
        raw_prediction,
        confidence
    );

    Ok(PredictionOutcome {
        target_house: target.house_number(),
        predicted_title_number,
        raw_prediction,
        fit: final_fit,
        transform,
        confidence,
        low_reason,
        r_squared_percent: final_fit.r_squared_percent(),
        initial_r_squared_percent: initial_percent,
        excluded_sample,
        sample_count,
        filter_description: String::from("all categories"),
    })
}

/// Drop the worst-fitting point and refit; `None` if the refit fails
fn refit_without_worst(input: &RegressionInput, initial: &FitResult) -> Option<(usize, FitResult)> {
    let worst = find_worst(
        input.xs(),
        input.ys(),
        input.house_numbers(),
        initial.slope,
        initial.intercept,
    )?;

    let reduced = input.without(worst.index);
    match fit(reduced.xs(), reduced.ys()) {
        Ok(corrected) => {
            tracing::debug!(
                "excluding house {}: r2 {:.1}% → {:.1}%",
                worst.house_number,
                initial.r_squared_percent(),
                corrected.r_squared_percent()
            );
            Some((worst.index, corrected))
        }
        Err(e) => {
            tracing::warn!(
                "refit without house {} failed: {}",
                worst.house_number,
                e
            );
            None
        }
    }
}

/// Round to the nearest integer, halves away from zero (105.5 → 106, -0.5 → -1)
pub fn round_half_away_from_zero(value: f64) -> i64 {
    value.round() as i64
}
