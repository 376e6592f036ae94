use colored::Colorize;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    FusionModel,
    LabelSource,
    SubClassifier,
    TrialRef,
    error::Result,
};

const WIDTH: usize = 9;


/// Counts the trials whose valence / arousal was predicted correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize)]
pub struct Accuracy {
    /// Number of evaluated trials.
    pub n_trials: usize,
    /// Number of trials with a correct valence prediction.
    pub valence_correct: usize,
    /// Number of trials with a correct arousal prediction.
    pub arousal_correct: usize,
}


impl Accuracy {
    /// Construct an empty counter.
    pub fn new() -> Self {
        Self::default()
    }


    /// Record the outcome of one trial.
    pub fn record(&mut self, valence_correct: bool, arousal_correct: bool) {
        self.n_trials += 1;
        self.valence_correct += valence_correct as usize;
        self.arousal_correct += arousal_correct as usize;
    }


    /// Add the counts of `other` to `self`.
    pub fn merge(&mut self, other: &Accuracy) {
        self.n_trials += other.n_trials;
        self.valence_correct += other.valence_correct;
        self.arousal_correct += other.arousal_correct;
    }


    /// Returns the valence accuracy, `0` if nothing was recorded.
    pub fn valence(&self) -> f64 {
        ratio(self.valence_correct, self.n_trials)
    }


    /// Returns the arousal accuracy, `0` if nothing was recorded.
    pub fn arousal(&self) -> f64 {
        ratio(self.arousal_correct, self.n_trials)
    }


    /// Print a colored one-line summary prefixed by `title`.
    pub fn print(&self, title: &str) {
        println!(
            "{}    {}    {}",
            format!("  [{title:>WIDTH$}]").bold().red(),
            format!("[VALENCE {:>WIDTH$.4}]", self.valence()).bold().green(),
            format!("[AROUSAL {:>WIDTH$.4}]", self.arousal()).bold().yellow(),
        );
    }
}


impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "valence {:.4} ({}/{}), arousal {:.4} ({}/{})",
            self.valence(), self.valence_correct, self.n_trials,
            self.arousal(), self.arousal_correct, self.n_trials,
        )
    }
}


#[inline(always)]
fn ratio(correct: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { correct as f64 / total as f64 }
}


/// Returns the accuracy of `model` on `trials`.
/// Stops at the first failing trial.
pub fn evaluate<F, E, L, I, T>(
    model: &FusionModel<F, E, L>,
    trials: I,
) -> Result<Accuracy>
    where F: SubClassifier,
          E: SubClassifier,
          L: LabelSource,
          I: IntoIterator<Item = T>,
          T: Into<TrialRef>,
{
    model.evaluate(trials)
}
