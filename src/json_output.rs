//! JSON output format for predictions

use crate::regression::{Confidence, LowConfidenceReason, PredictionOutcome};
use serde::{Deserialize, Serialize};

/// Fitted line in display form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonFormula {
    pub slope: f64,
    pub intercept: f64,
    /// Transform applied to the house number, e.g. "x = house / 2"
    pub transform: String,
}

/// Sample dropped as the single outlier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonExcludedSample {
    pub house_number: u32,
    pub title_number: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// R² percentage before the exclusion
    pub r_squared_percent_before: f64,
}

/// A prediction with everything needed to explain it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonPrediction {
    pub target_house: u32,
    pub predicted_title_number: i64,
    pub formula: JsonFormula,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_reason: Option<LowConfidenceReason>,
    pub r_squared_percent: f64,
    pub message: String,
    pub sample_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded: Option<JsonExcludedSample>,
    pub filter: String,
}

impl From<&PredictionOutcome> for JsonPrediction {
    fn from(outcome: &PredictionOutcome) -> Self {
        Self {
            target_house: outcome.target_house,
            predicted_title_number: outcome.predicted_title_number,
            formula: JsonFormula {
                slope: outcome.fit.slope,
                intercept: outcome.fit.intercept,
                transform: outcome.transform.describe().to_string(),
            },
            confidence: outcome.confidence,
            low_reason: outcome.low_reason,
            r_squared_percent: outcome.r_squared_percent,
            message: outcome.message(),
            sample_count: outcome.sample_count,
            excluded: outcome
                .excluded_sample
                .as_ref()
                .map(|sample| JsonExcludedSample {
                    house_number: sample.house_number,
                    title_number: sample.title_number,
                    category: sample.category.clone(),
                    r_squared_percent_before: outcome.initial_r_squared_percent,
                }),
            filter: outcome.filter_description.clone(),
        }
    }
}

impl JsonPrediction {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
