//! The files in `sub_classifier/` directory defines
//! `SubClassifier` trait and a deterministic stand-in.

/// Provides SubClassifier trait.
pub mod core;

/// Defines a sub-classifier replaying fixed predictions.
pub mod fixed;

pub use self::core::{SubClassifier, InputMode};
pub use self::fixed::FixedClassifier;
