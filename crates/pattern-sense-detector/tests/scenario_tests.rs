//! End-to-end classification scenarios for five-element inputs.

use pattern_sense_core::{PatternTag, PatternType, Sequence, Trend, EXPECTED_ARITY};
use pattern_sense_detector::{SequenceClassifier, ShapeAnalyzer};

fn classifier() -> SequenceClassifier {
    SequenceClassifier::new().with_arity(EXPECTED_ARITY)
}

#[test]
fn test_arithmetic_scenario() {
    let result = classifier().classify_values(&[2, 4, 6, 8, 10]).unwrap();

    assert!(result.is_arithmetic());
    assert_eq!(result.common_difference(), Some(2.0));
    assert!(!result.is_geometric());
    assert_eq!(result.common_ratio(), None);
    assert!(!result.is_symmetric());
    assert_eq!(result.trend(), Trend::Increasing);
    assert_eq!(result.tags(), &[PatternTag::Arithmetic]);
}

#[test]
fn test_geometric_scenario() {
    let result = classifier().classify_values(&[2, 4, 8, 16, 32]).unwrap();

    assert!(!result.is_arithmetic());
    assert!(result.is_geometric());
    assert_eq!(result.common_ratio(), Some(2.0));
    assert!(!result.is_symmetric());
    assert_eq!(result.trend(), Trend::Increasing);
    assert_eq!(result.tags(), &[PatternTag::Geometric]);
}

#[test]
fn test_symmetric_scenario() {
    let result = classifier().classify_values(&[1, 2, 3, 2, 1]).unwrap();

    assert!(!result.is_arithmetic());
    assert!(!result.is_geometric());
    assert!(result.is_symmetric());
    assert_eq!(result.trend(), Trend::Fluctuating);
    assert_eq!(result.tags(), &[PatternTag::Symmetric]);
}

#[test]
fn test_constant_scenario() {
    let result = classifier().classify_values(&[7, 7, 7, 7, 7]).unwrap();

    assert_eq!(result.common_difference(), Some(0.0));
    assert_eq!(result.common_ratio(), Some(1.0));
    assert!(result.is_symmetric());
    assert_eq!(result.trend(), Trend::Fluctuating);
    assert_eq!(
        result.tags(),
        &[
            PatternTag::Arithmetic,
            PatternTag::Geometric,
            PatternTag::Symmetric
        ]
    );
}

#[test]
fn test_leading_zero_scenario() {
    let result = classifier().classify_values(&[0, 1, 2, 3, 4]).unwrap();

    assert_eq!(result.common_difference(), Some(1.0));
    assert!(!result.is_geometric());
    assert!(!result.is_symmetric());
    assert_eq!(result.trend(), Trend::Increasing);
}

#[test]
fn test_degenerate_lengths() {
    let classifier = SequenceClassifier::new();

    for values in [vec![], vec![42]] {
        let result = classifier.classify(&Sequence::new(values));
        assert!(!result.is_arithmetic());
        assert!(!result.is_geometric());
        assert!(result.is_symmetric());
        assert_eq!(result.trend(), Trend::Insufficient);
        assert_eq!(result.tags(), &[PatternTag::Symmetric]);
    }
}

#[test]
fn test_wrong_arity_rejected_before_detection() {
    let err = classifier().classify_values(&[1, 2, 3, 4]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The input must contain exactly 5 numbers (got 4)"
    );
}

#[test]
fn test_wire_output() {
    let result = classifier().classify_values(&[2, 4, 8, 16, 32]).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["isGeometricSequence"], true);
    assert_eq!(json["commonRatio"], 2.0);
    assert_eq!(json["commonDifference"], serde_json::Value::Null);
    assert_eq!(json["trend"], "Strictly Increasing");
    assert_eq!(
        json["additionalPatterns"],
        serde_json::json!(["Geometric Sequence"])
    );
}

#[test]
fn test_shape_scenarios() {
    let analyzer = ShapeAnalyzer::new();

    let cases = [
        ([1, 3, 2, 4, 5], PatternType::None),
        ([1, 2, 3, 2, 1], PatternType::Hill),
        ([3, 1, 2, 2, 2], PatternType::Valley),
        ([4, 4, 4, 4, 4], PatternType::Plain),
    ];

    for (values, expected) in cases {
        assert_eq!(
            analyzer.analyze(&Sequence::from(values)).pattern_type,
            expected,
            "unexpected shape for {values:?}"
        );
    }
}
