//! # pattern-sense-detector
//!
//! Detection engine for PatternSense.
//!
//! This crate provides:
//! - Detection pipeline running independent detectors in priority order
//! - Sequence detectors (arithmetic, geometric, symmetry, trend)
//! - Result assembly into a tagged [`AnalysisResult`](pattern_sense_core::AnalysisResult)
//! - The [`SequenceClassifier`] facade, sequential or concurrent
//! - Basic shape analysis (hill, valley, plain, duplicates)
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends only on
//! pattern-sense-core and performs no I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod classifier;
pub mod detection;
pub mod detectors;
pub mod shape;

// Re-export commonly used types
pub use assembler::ResultAssembler;
pub use classifier::SequenceClassifier;
pub use detection::{Detection, DetectionContext, DetectionPipeline, SequenceDetector};
pub use detectors::{ArithmeticDetector, GeometricDetector, SymmetryDetector, TrendDetector};
pub use shape::ShapeAnalyzer;
