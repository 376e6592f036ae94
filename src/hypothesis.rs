//! The combined hypothesis returned by the fusion boosting.

pub(crate) mod fusion_weights;

pub use fusion_weights::FusionWeights;
