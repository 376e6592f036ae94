#![warn(missing_docs)]

//! 
//! A crate that fuses two affect classifiers,
//! one driven by facial expressions and one by EEG signals,
//! into a single binary decision on valence and arousal.
//! 
//! The fusion is a two-step AdaBoost.
//! 
//! - Each sub-classifier receives a confidence weight
//!     derived from its weighted error rate on the training trials.
//!     The face classifier is scored first under uniform sample weights,
//!     the EEG classifier second under the weights re-emphasized
//!     on the trials the face classifier got wrong.
//!     See [`weight_engine`] for the numeric steps
//!     and [`TwoStepBoost`] for the schedule.
//! 
//! - At inference time each sub-classifier casts a signed vote
//!     (`+1` for high, `-1` for low) scaled by its confidence weight.
//!     The fused label is high iff the weighted sum is strictly positive.
//!     See [`FusionWeights`].
//! 
//! The sub-classifiers themselves are collaborators
//! implementing [`SubClassifier`];
//! the ground truth comes from a [`LabelSource`].
//! 
//! # Example
//! ```
//! use fusionboost::prelude::*;
//! 
//! # fn main() -> fusionboost::Result<()> {
//! let trials = ["t1", "t2", "t3", "t4"];
//! let face = FixedClassifier::new("face")
//!     .predictions(&trials, &[1, 1, 0, 0], &[1, 0, 1, 0])?;
//! let eeg = FixedClassifier::new("EEG")
//!     .predictions(&trials, &[1, 0, 1, 0], &[1, 1, 0, 0])?;
//! let labels = LabelTable::new()
//!     .with("t1", (true, true))
//!     .with("t2", (true, true))
//!     .with("t3", (true, false))
//!     .with("t4", (false, false));
//! 
//! let mut model = FusionModel::new(face, eeg, labels);
//! for trial in trials {
//!     model.add_trial(trial)?;
//! }
//! let weights = model.train()?;
//! assert!(weights.face_valence > 0.0);
//! 
//! let accuracy = model.evaluate(trials)?;
//! println!("{accuracy}");
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod error;
pub mod trial;
pub mod weight_engine;
pub mod label;
pub mod sub_classifier;
pub mod config;
pub mod booster;
pub mod hypothesis;
pub mod fusion_model;
pub mod research;
pub mod prelude;


pub use common::{Dimension, Modality, BinaryLabel};
pub use error::{FusionError, Result};
pub use trial::TrialRef;

pub use label::{
    LabelPair,
    LabelSource,
    CsvLabelSource,
    LabelTable,
};

pub use sub_classifier::{
    SubClassifier,
    InputMode,
    FixedClassifier,
};

pub use config::{
    FusionConfig,
    ConfidenceRule,
    DegeneratePolicy,
};

pub use booster::{
    Booster,
    TwoStepBoost,
    PredictionTable,
};

pub use hypothesis::FusionWeights;
pub use fusion_model::FusionModel;

pub use research::{
    Accuracy,
    TrialSplit,
    LeaveOneOut,
};
