/// Added to every weighted error rate so that it is strictly positive.
pub const ERROR_RATE_BIAS: f64 = 1e-11;

/// Confidence weight of each sub-classifier before training.
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// A rating strictly above this value (after truncation) is `high`.
pub const RATING_THRESHOLD: f64 = 5.0;

/// Number of boosting rounds, one per sub-classifier.
pub const N_ROUNDS: usize = 2;

/// File name of the ground truth inside a trial directory.
pub const LABEL_FILE: &str = "label.csv";
