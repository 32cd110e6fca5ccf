//! Caller-owned sample collection
//!
//! Holds the samples from the latest upload and answers prediction requests
//! against them. Each request works on a filtered snapshot, so a `Session`
//! can be shared read-only across requests.

use crate::error::PredictionError;
use crate::filter::CategoryFilter;
use crate::regression::{predict, PredictionOutcome};
use crate::sample::{Sample, TargetQuery};
use std::collections::BTreeSet;

/// Samples available for prediction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    samples: Vec<Sample>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Replace all samples, as a fresh upload does
    pub fn replace(&mut self, samples: Vec<Sample>) {
        tracing::debug!(
            "session: replacing {} samples with {}",
            self.samples.len(),
            samples.len()
        );
        self.samples = samples;
    }

    /// Append samples to the current set
    pub fn extend(&mut self, samples: impl IntoIterator<Item = Sample>) {
        self.samples.extend(samples);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct category labels, sorted
    pub fn categories(&self) -> Vec<String> {
        self.samples
            .iter()
            .filter_map(|s| s.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Samples passing `filter`, in upload order
    pub fn select(&self, filter: &CategoryFilter) -> Vec<Sample> {
        self.samples
            .iter()
            .filter(|s| filter.includes(s))
            .cloned()
            .collect()
    }

    /// Predict the title number for `target` using samples passing `filter`
    pub fn predict(
        &self,
        target: TargetQuery,
        filter: &CategoryFilter,
    ) -> Result<PredictionOutcome, PredictionError> {
        let selected = self.select(filter);
        tracing::debug!(
            "session: {} of {} samples selected by {}",
            selected.len(),
            self.samples.len(),
            filter.describe()
        );

        let mut outcome = predict(&selected, target)?;
        outcome.filter_description = filter.describe();
        Ok(outcome)
    }
}
