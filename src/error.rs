//! Defines the error type shared by every fallible operation in this crate.

use thiserror::Error;

use crate::common::{Dimension, Modality};
use crate::trial::TrialRef;


/// A specialized `Result` type for the fusion layer.
pub type Result<T> = std::result::Result<T, FusionError>;


/// Errors raised while training or querying the fusion layer.
#[derive(Debug, Error)]
pub enum FusionError {
    /// Non-positive sample count, mismatched sequence lengths,
    /// or training without any accumulated trial.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The weighted error rate of a sub-classifier sits on the bias floor
    /// (or is not finite), so its confidence weight is unbounded.
    /// Only returned under [`DegeneratePolicy::Strict`].
    ///
    /// [`DegeneratePolicy::Strict`]: crate::config::DegeneratePolicy::Strict
    #[error(
        "degenerate error rate {error_rate:e} for {modality} on {dimension}"
    )]
    DegenerateErrorRate {
        /// The sub-classifier scored in this round.
        modality: Modality,
        /// The affective dimension.
        dimension: Dimension,
        /// The offending error rate.
        error_rate: f64,
    },

    /// The fused score of a trial is `NaN`.
    #[error("fused score on {dimension} is not a number")]
    NonFiniteScore {
        /// The affective dimension.
        dimension: Dimension,
    },

    /// `train` was called twice, or a trial was added after training.
    #[error("the fusion model is already trained")]
    AlreadyTrained,

    /// A sub-classifier failed. The source error is kept as is.
    #[error("sub-classifier failure: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The ground truth of a trial could not be read.
    #[error("cannot read the label of {trial}: {reason}")]
    Label {
        /// The trial whose label is missing.
        trial: TrialRef,
        /// What went wrong.
        reason: String,
    },

    /// I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure while parsing a CSV label file.
    #[error(transparent)]
    Csv(#[from] polars::prelude::PolarsError),

    /// Failure while reading/writing JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


impl FusionError {
    /// Wraps an arbitrary sub-classifier error.
    pub fn collaborator<E>(err: E) -> Self
        where E: Into<Box<dyn std::error::Error + Send + Sync>>
    {
        Self::Collaborator(err.into())
    }


    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument(message.into())
    }
}
