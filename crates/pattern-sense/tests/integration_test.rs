//! Integration tests for the pattern-sense server.

use pattern_sense::{to_mcp_error, PatternSenseServer};
use pattern_sense_core::{Error, PatternTag, PatternType, ServerConfig, Trend};
use serde_json::json;

#[tokio::test]
async fn test_full_analysis_wire_format() {
    let server = PatternSenseServer::new();
    let response = server.analyze(&[1, 3, 5, 7, 9]).await.unwrap();

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "patternType": "NONE",
            "duplicates": 0,
            "description": "Pattern: NONE, No duplicates found",
            "advancedAnalysis": {
                "isArithmeticSequence": true,
                "isGeometricSequence": false,
                "isSymmetric": false,
                "commonDifference": 2.0,
                "commonRatio": null,
                "trend": "Strictly Increasing",
                "additionalPatterns": ["Arithmetic Sequence"]
            }
        })
    );
}

#[tokio::test]
async fn test_plain_sequence_is_every_pattern() {
    let server = PatternSenseServer::new();
    let response = server.analyze(&[4, 4, 4, 4, 4]).await.unwrap();

    assert_eq!(response.pattern_type, PatternType::Plain);
    assert_eq!(response.duplicates, 5);
    assert_eq!(response.description, "Pattern: PLAIN, Duplicates: 5");

    let advanced = &response.advanced_analysis;
    assert_eq!(advanced.common_difference(), Some(0.0));
    assert_eq!(advanced.common_ratio(), Some(1.0));
    assert!(advanced.is_symmetric());
    assert_eq!(advanced.trend(), Trend::Fluctuating);
    assert_eq!(
        advanced.tags(),
        &[
            PatternTag::Arithmetic,
            PatternTag::Geometric,
            PatternTag::Symmetric
        ]
    );
}

#[tokio::test]
async fn test_valley_with_duplicates() {
    let server = PatternSenseServer::new();
    let response = server.analyze(&[5, 3, 1, 3, 5]).await.unwrap();

    assert_eq!(response.pattern_type, PatternType::Valley);
    assert_eq!(response.duplicates, 4);
    assert!(response.advanced_analysis.is_symmetric());
    assert!(!response.advanced_analysis.is_arithmetic());
}

#[tokio::test]
async fn test_decreasing_geometric() {
    let server = PatternSenseServer::new();
    let result = server.advanced_analysis(&[81, 27, 9, 3, 1]).await.unwrap();

    assert!(result.is_geometric());
    let ratio = result.common_ratio().unwrap();
    assert!((ratio - 1.0 / 3.0).abs() <= 0.0001);
    assert_eq!(result.trend(), Trend::Decreasing);
    assert_eq!(result.tags(), &[PatternTag::Geometric]);
}

#[tokio::test]
async fn test_zero_blocks_geometric() {
    let server = PatternSenseServer::new();
    let result = server.advanced_analysis(&[0, 0, 0, 0, 0]).await.unwrap();

    assert!(result.is_arithmetic());
    assert!(!result.is_geometric());
    assert!(result.is_symmetric());
}

#[tokio::test]
async fn test_invalid_input_maps_to_invalid_params() {
    let server = PatternSenseServer::new();

    let err = server.analyze(&[1, 2, 3]).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(to_mcp_error(&err).code.0, -32602);

    let too_big = i64::from(i32::MAX) + 1;
    let err = server
        .advanced_analysis(&[1, 2, too_big, 4, 5])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ValueOutOfRange { index: 2, .. }));
    assert_eq!(to_mcp_error(&err).code.0, -32602);
}

#[tokio::test]
async fn test_config_file_drives_server() {
    let path = std::env::temp_dir().join(format!(
        "pattern-sense-integration-{}.yaml",
        std::process::id()
    ));
    std::fs::write(
        &path,
        "server:\n  request_timeout_ms: 1000\nanalysis:\n  arity: 3\n  concurrent: true\n",
    )
    .unwrap();

    let config = ServerConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let server = PatternSenseServer::from_config(&config).unwrap();
    assert_eq!(server.settings().arity, 3);
    assert!(server.settings().concurrent);

    let response = server.analyze(&[2, 4, 2]).await.unwrap();
    assert_eq!(response.pattern_type, PatternType::Hill);
    assert_eq!(response.duplicates, 2);

    // Five numbers no longer match the configured arity
    assert!(matches!(
        server.analyze(&[1, 2, 3, 4, 5]).await,
        Err(Error::InvalidArity {
            expected: 3,
            actual: 5
        })
    ));
}

#[tokio::test]
async fn test_concurrent_and_sequential_agree() {
    let mut config = ServerConfig::default();
    config.analysis.concurrent = true;
    let concurrent = PatternSenseServer::from_config(&config).unwrap();
    let sequential = PatternSenseServer::new();

    let inputs: [[i64; 5]; 5] = [
        [1, 2, 3, 4, 5],
        [2, 4, 8, 16, 32],
        [1, 2, 3, 2, 1],
        [3, 1, 4, 1, 5],
        [-10, -5, 0, 5, 10],
    ];

    for numbers in inputs {
        assert_eq!(
            concurrent.advanced_analysis(&numbers).await.unwrap(),
            sequential.advanced_analysis(&numbers).await.unwrap(),
            "mismatch for {numbers:?}"
        );
    }
}
