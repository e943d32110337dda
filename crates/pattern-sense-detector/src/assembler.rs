//! Analysis result assembler.

use pattern_sense_core::AnalysisResult;

use crate::detection::Detection;

/// Folds detector findings into an [`AnalysisResult`].
pub struct ResultAssembler;

impl ResultAssembler {
    /// Create a new result assembler.
    pub fn new() -> Self {
        Self
    }

    /// Assemble detections into a result.
    ///
    /// Tags are appended in the order the detections arrive. A detector that
    /// did not run leaves its field negative (trend stays `Insufficient`).
    pub fn assemble(&self, detections: impl IntoIterator<Item = Detection>) -> AnalysisResult {
        detections
            .into_iter()
            .fold(AnalysisResult::builder(), |builder, detection| match detection {
                Detection::Arithmetic { common_difference } => builder.arithmetic(common_difference),
                Detection::Geometric { common_ratio } => builder.geometric(common_ratio),
                Detection::Symmetric { symmetric } => builder.symmetric(symmetric),
                Detection::Trend(trend) => builder.trend(trend),
            })
            .build()
    }
}

impl Default for ResultAssembler {
    fn default() -> Self {
        Self::new()
    }
}
