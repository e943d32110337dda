//! # pattern-sense-core
//!
//! Core types for PatternSense.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other pattern-sense crates. It provides:
//!
//! - The immutable integer [`Sequence`] and its validation
//! - Analysis result types ([`AnalysisResult`], [`Trend`], [`PatternTag`])
//! - Shape classification types ([`PatternType`], [`ShapeAnalysis`])
//! - Configuration loaded from YAML
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other pattern-sense crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod sequence;
pub mod shape;

// Re-export commonly used types
pub use analysis::{
    AnalysisResult, AnalysisResultBuilder, PatternAnalysisResponse, PatternTag, Trend,
};
pub use config::{AnalysisSettings, ServerConfig, ServerSettings, DEFAULT_TOLERANCE};
pub use error::{Error, Result};
pub use sequence::{Sequence, EXPECTED_ARITY};
pub use shape::{PatternType, ShapeAnalysis};
