//! Defines some common items used in this library.

/// Numeric constants of the fusion layer.
pub mod constants;

/// Defines some useful functions such as the signed vote.
pub(crate) mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

/// Defines affective dimensions, modalities, and binary labels.
pub(crate) mod task;

pub use task::*;
