//! Analysis result types produced by the sequence classifier.

use serde::{Deserialize, Serialize};

use crate::shape::{PatternType, ShapeAnalysis};
use crate::Error;

/// Overall monotonic direction of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trend {
    /// Every element is strictly greater than the previous one
    #[serde(rename = "Strictly Increasing")]
    Increasing,
    /// Every element is strictly less than the previous one
    #[serde(rename = "Strictly Decreasing")]
    Decreasing,
    /// Neither strictly increasing nor strictly decreasing
    #[serde(rename = "Fluctuating")]
    Fluctuating,
    /// Fewer than two elements
    #[serde(rename = "Insufficient data")]
    Insufficient,
}

impl Trend {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Increasing => "Strictly Increasing",
            Trend::Decreasing => "Strictly Decreasing",
            Trend::Fluctuating => "Fluctuating",
            Trend::Insufficient => "Insufficient data",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tag attached to a result for each positive pattern detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternTag {
    /// Constant difference between terms
    #[serde(rename = "Arithmetic Sequence")]
    Arithmetic,
    /// Constant ratio between terms
    #[serde(rename = "Geometric Sequence")]
    Geometric,
    /// Palindromic sequence
    #[serde(rename = "Symmetric Pattern")]
    Symmetric,
}

impl PatternTag {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PatternTag::Arithmetic => "Arithmetic Sequence",
            PatternTag::Geometric => "Geometric Sequence",
            PatternTag::Symmetric => "Symmetric Pattern",
        }
    }
}

impl std::fmt::Display for PatternTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Composite classification of a sequence.
///
/// The arithmetic and geometric flags are derived from the presence of the
/// common difference and common ratio, so a flag and its value can never
/// disagree. Build values through [`AnalysisResultBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "AnalysisResultRepr", try_from = "AnalysisResultRepr")]
pub struct AnalysisResult {
    common_difference: Option<f64>,
    common_ratio: Option<f64>,
    symmetric: bool,
    trend: Trend,
    tags: Vec<PatternTag>,
}

impl AnalysisResult {
    /// Start building a result.
    pub fn builder() -> AnalysisResultBuilder {
        AnalysisResultBuilder::default()
    }

    /// Whether consecutive differences are constant.
    pub fn is_arithmetic(&self) -> bool {
        self.common_difference.is_some()
    }

    /// Common difference, present iff the sequence is arithmetic.
    pub fn common_difference(&self) -> Option<f64> {
        self.common_difference
    }

    /// Whether consecutive ratios are constant.
    pub fn is_geometric(&self) -> bool {
        self.common_ratio.is_some()
    }

    /// Common ratio, present iff the sequence is geometric.
    pub fn common_ratio(&self) -> Option<f64> {
        self.common_ratio
    }

    /// Whether the sequence reads the same from both ends.
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Monotonic trend.
    pub fn trend(&self) -> Trend {
        self.trend
    }

    /// Tags for each positive detector, in evaluation order.
    pub fn tags(&self) -> &[PatternTag] {
        &self.tags
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        AnalysisResultBuilder::default().build()
    }
}

/// Incremental builder for [`AnalysisResult`].
///
/// Tags are appended in the order the findings are recorded.
#[derive(Debug, Clone)]
pub struct AnalysisResultBuilder {
    result: AnalysisResult,
}

impl Default for AnalysisResultBuilder {
    fn default() -> Self {
        Self {
            result: AnalysisResult {
                common_difference: None,
                common_ratio: None,
                symmetric: false,
                trend: Trend::Insufficient,
                tags: Vec::new(),
            },
        }
    }
}

impl AnalysisResultBuilder {
    /// Record the arithmetic finding.
    pub fn arithmetic(mut self, common_difference: Option<f64>) -> Self {
        self.result.common_difference = common_difference;
        self.set_tag(PatternTag::Arithmetic, common_difference.is_some());
        self
    }

    /// Record the geometric finding.
    pub fn geometric(mut self, common_ratio: Option<f64>) -> Self {
        self.result.common_ratio = common_ratio;
        self.set_tag(PatternTag::Geometric, common_ratio.is_some());
        self
    }

    /// Record the symmetry finding.
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.result.symmetric = symmetric;
        self.set_tag(PatternTag::Symmetric, symmetric);
        self
    }

    /// Record the trend.
    pub fn trend(mut self, trend: Trend) -> Self {
        self.result.trend = trend;
        self
    }

    /// Finish the result.
    pub fn build(self) -> AnalysisResult {
        self.result
    }

    fn set_tag(&mut self, tag: PatternTag, present: bool) {
        self.result.tags.retain(|t| *t != tag);
        if present {
            self.result.tags.push(tag);
        }
    }
}

/// Wire representation with explicit flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResultRepr {
    is_arithmetic_sequence: bool,
    is_geometric_sequence: bool,
    is_symmetric: bool,
    common_difference: Option<f64>,
    common_ratio: Option<f64>,
    trend: Trend,
    #[serde(default)]
    additional_patterns: Vec<PatternTag>,
}

impl From<AnalysisResult> for AnalysisResultRepr {
    fn from(result: AnalysisResult) -> Self {
        Self {
            is_arithmetic_sequence: result.is_arithmetic(),
            is_geometric_sequence: result.is_geometric(),
            is_symmetric: result.symmetric,
            common_difference: result.common_difference,
            common_ratio: result.common_ratio,
            trend: result.trend,
            additional_patterns: result.tags,
        }
    }
}

impl TryFrom<AnalysisResultRepr> for AnalysisResult {
    type Error = Error;

    fn try_from(repr: AnalysisResultRepr) -> Result<Self, Self::Error> {
        if repr.is_arithmetic_sequence != repr.common_difference.is_some() {
            return Err(Error::InvalidInput(
                "commonDifference must be present iff isArithmeticSequence is true".to_string(),
            ));
        }
        if repr.is_geometric_sequence != repr.common_ratio.is_some() {
            return Err(Error::InvalidInput(
                "commonRatio must be present iff isGeometricSequence is true".to_string(),
            ));
        }

        let result = AnalysisResult::builder()
            .arithmetic(repr.common_difference)
            .geometric(repr.common_ratio)
            .symmetric(repr.is_symmetric)
            .trend(repr.trend)
            .build();

        let mut expected = result.tags.clone();
        let mut actual = repr.additional_patterns;
        expected.sort_by_key(|t| t.label());
        actual.sort_by_key(|t| t.label());
        if expected != actual {
            return Err(Error::InvalidInput(
                "additionalPatterns does not match the reported flags".to_string(),
            ));
        }

        Ok(result)
    }
}

/// Combined report: basic shape classification plus the advanced analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysisResponse {
    /// Hill/valley/plain classification
    pub pattern_type: PatternType,
    /// Number of elements whose value occurs more than once
    pub duplicates: usize,
    /// One-line summary of the shape
    pub description: String,
    /// Arithmetic/geometric/symmetry/trend classification
    pub advanced_analysis: AnalysisResult,
}

impl PatternAnalysisResponse {
    /// Combine a shape analysis with an advanced analysis.
    pub fn new(shape: ShapeAnalysis, advanced_analysis: AnalysisResult) -> Self {
        Self {
            pattern_type: shape.pattern_type,
            duplicates: shape.duplicates,
            description: shape.description,
            advanced_analysis,
        }
    }
}
