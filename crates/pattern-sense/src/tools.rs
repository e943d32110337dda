//! MCP Tool Types
//!
//! Parameter and response types for the tools exposed by the server.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use pattern_sense_core::{AnalysisResult, PatternAnalysisResponse};

// =============================================================================
// Analysis Tools
// =============================================================================

/// Parameters for pattern_analyze
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeParams {
    /// Integers to analyze (exactly five by default)
    pub numbers: Vec<i64>,
}

/// Response for pattern_analyze
pub type AnalyzeResponse = PatternAnalysisResponse;

/// Parameters for pattern_advanced_analysis
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AdvancedAnalysisParams {
    /// Integers to analyze (exactly five by default)
    pub numbers: Vec<i64>,
}

/// Response for pattern_advanced_analysis
pub type AdvancedAnalysisResponse = AnalysisResult;

// =============================================================================
// Introspection Tools
// =============================================================================

/// Parameters for pattern_settings
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SettingsParams {}

/// Response for pattern_settings
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SettingsResponse {
    /// Number of integers every request must carry
    pub arity: usize,

    /// Tolerance for difference and ratio comparisons
    pub tolerance: f64,

    /// Whether detectors run as parallel tasks
    pub concurrent: bool,

    /// Detector names in execution order
    pub detectors: Vec<String>,
}
