//! Sequence classifier facade.

use std::sync::Arc;

use pattern_sense_core::{AnalysisResult, AnalysisSettings, Result, Sequence};
use tracing::debug;

use crate::assembler::ResultAssembler;
use crate::detection::{DetectionContext, DetectionPipeline};

/// Runs the detection pipeline and assembles the composite result.
///
/// # Example
/// ```
/// use pattern_sense_core::{Sequence, Trend};
/// use pattern_sense_detector::SequenceClassifier;
///
/// let classifier = SequenceClassifier::new();
/// let result = classifier.classify(&Sequence::from([2, 4, 6, 8, 10]));
///
/// assert_eq!(result.common_difference(), Some(2.0));
/// assert!(!result.is_geometric());
/// assert_eq!(result.trend(), Trend::Increasing);
/// ```
#[derive(Clone)]
pub struct SequenceClassifier {
    pipeline: DetectionPipeline,
    context: DetectionContext,
    arity: Option<usize>,
}

impl SequenceClassifier {
    /// Create a classifier with the standard detectors, default tolerance and no arity check.
    pub fn new() -> Self {
        Self::with_pipeline(DetectionPipeline::standard())
    }

    /// Create a classifier around a custom pipeline.
    pub fn with_pipeline(pipeline: DetectionPipeline) -> Self {
        Self {
            pipeline,
            context: DetectionContext::default(),
            arity: None,
        }
    }

    /// Create a classifier from analysis settings.
    pub fn from_settings(settings: &AnalysisSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new()
            .with_tolerance(settings.tolerance)?
            .with_arity(settings.arity))
    }

    /// Replace the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self> {
        self.context = DetectionContext::new(tolerance)?;
        Ok(self)
    }

    /// Require validated input to have exactly `arity` elements.
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = Some(arity);
        self
    }

    /// Required arity for [`Self::parse`], if any.
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Comparison tolerance in use.
    pub fn tolerance(&self) -> f64 {
        self.context.tolerance()
    }

    /// Detector names in execution order.
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.pipeline.detector_names()
    }

    /// Validate raw input against the configured arity and the `i32` range.
    pub fn parse(&self, values: &[i64]) -> Result<Sequence> {
        Sequence::parse(values, self.arity)
    }

    /// Classify a sequence of any length.
    pub fn classify(&self, sequence: &Sequence) -> AnalysisResult {
        let detections = self.pipeline.detect(sequence, &self.context);
        let result = ResultAssembler::new().assemble(detections);
        debug!(%sequence, tags = ?result.tags(), trend = %result.trend(), "sequence classified");
        result
    }

    /// Validate raw input, then classify it.
    ///
    /// No detector runs when validation fails.
    pub fn classify_values(&self, values: &[i64]) -> Result<AnalysisResult> {
        let sequence = self.parse(values)?;
        Ok(self.classify(&sequence))
    }

    /// Classify with every detector running as its own blocking task.
    pub async fn classify_concurrent(&self, sequence: Arc<Sequence>) -> Result<AnalysisResult> {
        let detections = self
            .pipeline
            .detect_concurrent(Arc::clone(&sequence), self.context)
            .await?;
        let result = ResultAssembler::new().assemble(detections);
        debug!(%sequence, tags = ?result.tags(), trend = %result.trend(), "sequence classified concurrently");
        Ok(result)
    }
}

impl Default for SequenceClassifier {
    fn default() -> Self {
        Self::new()
    }
}
