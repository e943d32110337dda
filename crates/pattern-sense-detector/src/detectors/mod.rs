//! Sequence detector implementations.

pub mod arithmetic;
pub mod geometric;
pub mod symmetry;
pub mod trend;

pub use arithmetic::ArithmeticDetector;
pub use geometric::GeometricDetector;
pub use symmetry::SymmetryDetector;
pub use trend::TrendDetector;
