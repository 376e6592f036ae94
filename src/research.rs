//! This directory provides some features for experiments
//! - Accuracy per affective dimension
//! - Random train/test split with an explicit seed
//! - Leave-one-trial-out validation

/// Defines the accuracy counter.
pub mod accuracy;

/// Provides train/test protocols over trials.
pub mod protocol;

pub use accuracy::{Accuracy, evaluate};
pub use protocol::{TrialSplit, LeaveOneOut};
