//! Core detection types and traits.

use std::sync::Arc;

use pattern_sense_core::{Error, Result, Sequence, Trend, DEFAULT_TOLERANCE};
use tracing::debug;

use crate::detectors::{ArithmeticDetector, GeometricDetector, SymmetryDetector, TrendDetector};

/// Finding reported by a single detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    /// Arithmetic test outcome
    Arithmetic {
        /// Common difference, present iff the sequence is arithmetic
        common_difference: Option<f64>,
    },
    /// Geometric test outcome
    Geometric {
        /// Common ratio, present iff the sequence is geometric
        common_ratio: Option<f64>,
    },
    /// Palindrome test outcome
    Symmetric {
        /// Whether the sequence reads the same from both ends
        symmetric: bool,
    },
    /// Monotonic direction
    Trend(Trend),
}

impl Detection {
    /// Whether this finding produces a pattern tag.
    pub fn is_positive(&self) -> bool {
        match self {
            Detection::Arithmetic { common_difference } => common_difference.is_some(),
            Detection::Geometric { common_ratio } => common_ratio.is_some(),
            Detection::Symmetric { symmetric } => *symmetric,
            Detection::Trend(_) => false,
        }
    }
}

/// Context passed to each detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionContext {
    tolerance: f64,
}

impl DetectionContext {
    /// Create a context with a custom comparison tolerance.
    ///
    /// The tolerance must be finite and non-negative.
    pub fn new(tolerance: f64) -> Result<Self> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    /// Absolute tolerance for floating comparisons.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Check whether two values agree within the tolerance.
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance
    }
}

impl Default for DetectionContext {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Trait for sequence detectors.
///
/// Detectors only read the sequence and never depend on each other's output.
pub trait SequenceDetector: Send + Sync {
    /// Detector name for debugging/logging.
    fn name(&self) -> &'static str;

    /// Priority (higher = runs first).
    ///
    /// Standard priorities:
    /// - 100: arithmetic
    /// - 90: geometric
    /// - 80: symmetry
    /// - 70: trend
    fn priority(&self) -> u32;

    /// Examine the sequence.
    fn detect(&self, sequence: &Sequence, context: &DetectionContext) -> Detection;

    /// Whether this detector is enabled.
    fn enabled(&self) -> bool {
        true
    }
}

/// Detection pipeline that runs detectors in priority order.
#[derive(Clone)]
pub struct DetectionPipeline {
    detectors: Vec<Arc<dyn SequenceDetector>>,
}

impl DetectionPipeline {
    /// Create an empty detection pipeline.
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Create a pipeline with the arithmetic, geometric, symmetry and trend detectors.
    pub fn standard() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_detector(Arc::new(ArithmeticDetector::new()));
        pipeline.add_detector(Arc::new(GeometricDetector::new()));
        pipeline.add_detector(Arc::new(SymmetryDetector::new()));
        pipeline.add_detector(Arc::new(TrendDetector::new()));
        pipeline
    }

    /// Add a detector to the pipeline.
    pub fn add_detector(&mut self, detector: Arc<dyn SequenceDetector>) {
        self.detectors.push(detector);
        // Stable sort keeps insertion order among equal priorities
        self.detectors
            .sort_by_key(|d| std::cmp::Reverse(d.priority()));
    }

    /// Names of the registered detectors in execution order.
    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Run all enabled detectors on the sequence, in priority order.
    pub fn detect(&self, sequence: &Sequence, context: &DetectionContext) -> Vec<Detection> {
        self.detectors
            .iter()
            .filter(|d| d.enabled())
            .map(|detector| {
                let detection = detector.detect(sequence, context);
                debug!(detector = detector.name(), ?detection, "detector finished");
                detection
            })
            .collect()
    }

    /// Run all enabled detectors as parallel blocking tasks.
    ///
    /// Results are returned in priority order and match [`Self::detect`].
    pub async fn detect_concurrent(
        &self,
        sequence: Arc<Sequence>,
        context: DetectionContext,
    ) -> Result<Vec<Detection>> {
        let handles: Vec<_> = self
            .detectors
            .iter()
            .filter(|d| d.enabled())
            .map(|detector| {
                let detector = Arc::clone(detector);
                let sequence = Arc::clone(&sequence);
                let name = detector.name();
                let handle =
                    tokio::task::spawn_blocking(move || detector.detect(&sequence, &context));
                (name, handle)
            })
            .collect();

        let mut detections = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let detection = handle
                .await
                .map_err(|e| Error::DetectorFailed(format!("{name}: {e}")))?;
            debug!(detector = name, ?detection, "detector task finished");
            detections.push(detection);
        }

        Ok(detections)
    }
}

impl Default for DetectionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
