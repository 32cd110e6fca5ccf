// Scenario tests for title number prediction
//
// Streets modeled on real title registers: one side numbered evenly, one
// oddly, occasionally a mistyped title number.

use super::*;
use crate::error::PredictionError;
use crate::sample::{Parity, Sample, TargetQuery};
use crate::transform::Transform;

fn target(house: u32) -> TargetQuery {
    TargetQuery::new(house).unwrap()
}

/// Single mistyped title among four houses is excluded
#[test]
fn test_mistyped_title_is_excluded() {
    let samples = vec![
        Sample::new(2, 100),
        Sample::new(4, 102),
        Sample::new(6, 200),
        Sample::new(10, 108),
    ];

    let outcome = predict(&samples, target(8)).unwrap();

    assert_eq!(outcome.confidence, Confidence::Note);
    assert_eq!(outcome.low_reason, None);
    assert_eq!(outcome.excluded_sample, Some(Sample::new(6, 200)));
    assert!((outcome.fit.slope - 2.0).abs() < 1e-9);
    assert!((outcome.fit.intercept - 98.0).abs() < 1e-9);
    assert!((outcome.r_squared_percent - 100.0).abs() < 1e-9);
    assert!(outcome.initial_r_squared_percent < CONFIDENCE_THRESHOLD_PERCENT);
    assert_eq!(outcome.predicted_title_number, 106);
    assert_eq!(outcome.sample_count, 3);
    assert!(outcome.message().contains("by excluding house 6"));
    assert!(outcome.to_report_string().contains("Excluded sample: house 6"));
}

/// Three evenly spaced points: least squares leaves the middle one worst
///
/// Residuals under the initial fit (slope 50, intercept 34) are +16, -32,
/// +16, so house 4 is excluded, not the visibly odd house 6.
#[test]
fn test_three_points_exclude_largest_residual() {
    let samples = vec![
        Sample::new(2, 100),
        Sample::new(4, 102),
        Sample::new(6, 200),
    ];

    let outcome = predict(&samples, target(8)).unwrap();

    assert!((outcome.initial_r_squared_percent - 76.499_388).abs() < 1e-3);
    assert_eq!(outcome.confidence, Confidence::Note);
    assert_eq!(outcome.excluded_sample, Some(Sample::new(4, 102)));
    assert!((outcome.fit.slope - 50.0).abs() < 1e-9);
    assert!((outcome.fit.intercept - 50.0).abs() < 1e-9);
    assert_eq!(outcome.predicted_title_number, 250);
}

/// Clean even side predicts with high confidence and excludes nothing
#[test]
fn test_clean_street_is_high_confidence() {
    let samples = vec![
        Sample::new(2, 1001),
        Sample::new(4, 1004),
        Sample::new(6, 1007),
        Sample::new(10, 1013),
    ];

    let outcome = predict(&samples, target(8)).unwrap();

    assert_eq!(outcome.confidence, Confidence::High);
    assert_eq!(outcome.low_reason, None);
    assert_eq!(outcome.excluded_sample, None);
    assert_eq!(outcome.predicted_title_number, 1010);
    assert_eq!(outcome.sample_count, 4);
    assert_eq!(outcome.transform, Transform::Even);
}

/// Odd target ignores the even side entirely
#[test]
fn test_odd_target_uses_odd_side_only() {
    let samples = vec![
        Sample::new(1, 500),
        Sample::new(3, 510),
        Sample::new(5, 520),
        Sample::new(2, 9),
        Sample::new(4, 99999),
    ];

    let outcome = predict(&samples, target(9)).unwrap();

    // x = (house + 1) / 2 → 1, 2, 3; target 9 → 5
    assert_eq!(outcome.transform, Transform::Odd);
    assert_eq!(outcome.confidence, Confidence::High);
    assert_eq!(outcome.predicted_title_number, 540);
}

/// Scattered data stays low confidence and keeps the original fit
#[test]
fn test_scattered_data_is_inconsistent() {
    let samples = vec![
        Sample::new(2, 100),
        Sample::new(4, 300),
        Sample::new(6, 120),
        Sample::new(8, 310),
        Sample::new(10, 90),
    ];

    let outcome = predict(&samples, target(12)).unwrap();

    assert_eq!(outcome.confidence, Confidence::Low);
    assert_eq!(
        outcome.low_reason,
        Some(LowConfidenceReason::InconsistentData)
    );
    assert_eq!(outcome.excluded_sample, None);
    assert_eq!(outcome.sample_count, 5);
    assert_eq!(outcome.r_squared_percent, outcome.initial_r_squared_percent);

    // Original fit over all five points
    let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
    let ys = [100.0, 300.0, 120.0, 310.0, 90.0];
    let reference = fit(&xs, &ys).unwrap();
    assert_eq!(outcome.fit, reference);
    assert!(outcome.message().contains("inconsistent"));
}

#[test]
fn test_insufficient_matching_parity() {
    let samples = vec![Sample::new(1, 10), Sample::new(2, 20), Sample::new(3, 30)];

    let err = predict(&samples, target(6)).unwrap_err();

    assert_eq!(
        err,
        PredictionError::InsufficientData {
            parity: Parity::Even,
            required: MIN_SAMPLES,
            found: 1,
        }
    );
    assert!(err.to_string().contains("even"));
}

#[test]
fn test_all_same_house_is_degenerate() {
    let samples = vec![Sample::new(4, 10), Sample::new(4, 20), Sample::new(4, 30)];

    let err = predict(&samples, target(8)).unwrap_err();

    assert_eq!(err, PredictionError::DegenerateInput { count: 3 });
}

/// Two clean points always fit exactly
#[test]
fn test_two_points_fit_exactly() {
    let samples = vec![Sample::new(3, 40), Sample::new(7, 48)];

    let outcome = predict(&samples, target(11)).unwrap();

    // x: 2, 4 → slope 4, intercept 32; target 11 → x 6 → 56
    assert_eq!(outcome.confidence, Confidence::High);
    assert_eq!(outcome.predicted_title_number, 56);
}

/// Prediction at a .5 boundary rounds away from zero
#[test]
fn test_prediction_rounds_half_up() {
    // x: 1, 3 → slope 0.5, intercept 99.5; target x = 4 → 101.5
    let samples = vec![Sample::new(2, 100), Sample::new(6, 101)];

    let outcome = predict(&samples, target(8)).unwrap();

    assert!((outcome.raw_prediction - 101.5).abs() < 1e-9);
    assert_eq!(outcome.predicted_title_number, 102);
}

#[test]
fn test_prediction_is_idempotent() {
    let samples = vec![
        Sample::new(2, 100),
        Sample::new(4, 102),
        Sample::new(6, 200),
        Sample::new(8, 106).with_category("House"),
    ];

    let first = predict(&samples, target(10)).unwrap();
    let second = predict(&samples, target(10)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_input_order_does_not_change_fit() {
    let forward = vec![
        Sample::new(1, 11),
        Sample::new(3, 14),
        Sample::new(5, 16),
        Sample::new(7, 20),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = predict(&forward, target(9)).unwrap();
    let b = predict(&reversed, target(9)).unwrap();

    assert!((a.fit.slope - b.fit.slope).abs() < 1e-9);
    assert!((a.fit.intercept - b.fit.intercept).abs() < 1e-9);
    assert_eq!(a.predicted_title_number, b.predicted_title_number);
}

#[test]
fn test_outcome_serializes_classification() {
    let samples = vec![
        Sample::new(2, 100),
        Sample::new(4, 102),
        Sample::new(6, 200),
        Sample::new(10, 108),
    ];
    let outcome = predict(&samples, target(8)).unwrap();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["confidence"], "note");
    assert_eq!(json["transform"], "even");
    assert_eq!(json["excluded_sample"]["house_number"], 6);
    assert!(json.get("low_reason").is_none());
}
