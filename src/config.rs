//! Configuration of the fusion layer.
use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    InputMode,
    error::Result,
    weight_engine,
};


/// How an error rate is turned into a confidence weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize)]
pub enum ConfidenceRule {
    /// `(1 - e) / (2e)`, see [`weight_engine::classifier_weight`].
    #[default]
    Ratio,
    /// `ln((1 - e) / e) / 2`, see [`weight_engine::log_odds_weight`].
    LogOdds,
}


impl ConfidenceRule {
    /// Returns the confidence weight for `error_rate`.
    #[inline]
    pub fn weight(self, error_rate: f64) -> f64 {
        match self {
            Self::Ratio => weight_engine::classifier_weight(error_rate),
            Self::LogOdds => weight_engine::log_odds_weight(error_rate),
        }
    }
}


/// What to do when a sub-classifier's error rate is degenerate
/// or its confidence weight is not finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Log a warning and keep training.
    #[default]
    Warn,
    /// Abort training with [`FusionError::DegenerateErrorRate`].
    ///
    /// [`FusionError::DegenerateErrorRate`]: crate::FusionError::DegenerateErrorRate
    Strict,
}


/// Parameters of [`FusionModel`](crate::FusionModel).
///
/// The default configuration reproduces the reference behavior:
/// features-form EEG input, unnormalized sample-weight update,
/// ratio confidence rule, and warnings on degenerate error rates.
///
/// # Example
/// ```no_run
/// use fusionboost::prelude::*;
///
/// let config = FusionConfig::new()
///     .input_mode(InputMode::RawSignal)
///     .normalize(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Form of the EEG input.
    pub input_mode: InputMode,
    /// If `true`, sample weights are rescaled to sum to `1`
    /// after each update.
    pub normalize: bool,
    /// Rule deriving a confidence weight from an error rate.
    pub rule: ConfidenceRule,
    /// Policy for degenerate error rates.
    pub degenerate: DegeneratePolicy,
}


impl FusionConfig {
    /// Construct the default configuration.
    pub fn new() -> Self {
        Self::default()
    }


    /// Read a configuration from a JSON file.
    /// Missing fields take their default value.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }


    /// Set the form of the EEG input.
    /// Default is `InputMode::Features`.
    pub fn input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }


    /// Set whether sample weights are normalized after each update.
    /// Default is `false`.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }


    /// Set the confidence rule.
    /// Default is `ConfidenceRule::Ratio`.
    pub fn rule(mut self, rule: ConfidenceRule) -> Self {
        self.rule = rule;
        self
    }


    /// Set the policy for degenerate error rates.
    /// Default is `DegeneratePolicy::Warn`.
    pub fn degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }
}
