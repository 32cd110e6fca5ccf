//! Parity partitioning of candidate samples

use crate::error::PredictionError;
use crate::regression::MIN_SAMPLES;
use crate::sample::{Parity, Sample};

/// Keep only samples whose house number has the target's parity
///
/// Fails with `InsufficientData` (naming the required parity) when fewer than
/// [`MIN_SAMPLES`] samples remain. Input order is preserved.
pub fn partition_by_parity(
    samples: &[Sample],
    target_house: u32,
) -> Result<Vec<Sample>, PredictionError> {
    let parity = Parity::of(target_house);
    let matching: Vec<Sample> = samples
        .iter()
        .filter(|s| s.parity() == parity)
        .cloned()
        .collect();

    tracing::debug!(
        "partition: {} of {} samples are {}",
        matching.len(),
        samples.len(),
        parity
    );

    if matching.len() < MIN_SAMPLES {
        return Err(PredictionError::InsufficientData {
            parity,
            required: MIN_SAMPLES,
            found: matching.len(),
        });
    }

    Ok(matching)
}
