use std::cell::Cell;
use std::collections::HashMap;

use crate::{
    LabelPair,
    TrialRef,
    common::checker,
    error::{FusionError, Result},
};
use super::core::{SubClassifier, InputMode};


/// A sub-classifier that replays registered predictions.
/// Useful to exercise the fusion layer without a trained model.
///
/// Adding or predicting a trial with no registered prediction fails
/// the same way a real model fails on a missing trial file.
#[derive(Debug, Clone, Default)]
pub struct FixedClassifier {
    name: String,
    predictions: HashMap<TrialRef, LabelPair>,
    accumulated: Vec<TrialRef>,
    last_mode: Option<InputMode>,
    last_predict_mode: Cell<Option<InputMode>>,
    train_calls: usize,
}


impl FixedClassifier {
    /// Construct a new instance of `FixedClassifier`.
    pub fn new<S: ToString>(name: S) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }


    /// Register the prediction on `trial`.
    pub fn prediction<T, P>(mut self, trial: T, label: P) -> Self
        where T: Into<TrialRef>,
              P: Into<LabelPair>,
    {
        self.predictions.insert(trial.into(), label.into());
        self
    }


    /// Register the predictions on `trials`, in order.
    /// `valence` and `arousal` hold `{0, 1}`-coded labels.
    /// Fails if the three slices differ in length.
    pub fn predictions<T>(
        mut self,
        trials: &[T],
        valence: &[u8],
        arousal: &[u8],
    ) -> Result<Self>
        where T: Clone + Into<TrialRef>,
    {
        checker::check_columns(trials.len(), valence.len(), arousal.len())?;
        trials.iter()
            .zip(valence.iter().zip(arousal))
            .for_each(|(t, (&v, &a))| {
                let label = LabelPair::new(v == 1, a == 1);
                self.predictions.insert(t.clone().into(), label);
            });
        Ok(self)
    }


    /// Returns the trials accumulated by `add_trial`.
    pub fn accumulated(&self) -> &[TrialRef] {
        &self.accumulated
    }


    /// Returns the input mode of the latest `add_trial` call.
    pub fn last_mode(&self) -> Option<InputMode> {
        self.last_mode
    }


    /// Returns the input mode of the latest `predict` call.
    pub fn last_predict_mode(&self) -> Option<InputMode> {
        self.last_predict_mode.get()
    }


    /// Returns how many times `train` was called.
    pub fn train_calls(&self) -> usize {
        self.train_calls
    }


    fn lookup(&self, trial: &TrialRef) -> Result<LabelPair> {
        self.predictions.get(trial)
            .copied()
            .ok_or_else(|| FusionError::collaborator(
                format!("{}: no prediction for {trial}", self.name)
            ))
    }
}


impl SubClassifier for FixedClassifier {
    fn add_trial(&mut self, trial: &TrialRef, mode: InputMode) -> Result<()> {
        self.lookup(trial)?;
        self.accumulated.push(trial.clone());
        self.last_mode = Some(mode);
        Ok(())
    }


    fn train(&mut self) -> Result<()> {
        self.train_calls += 1;
        Ok(())
    }


    fn predict(&self, trial: &TrialRef, mode: InputMode) -> Result<LabelPair> {
        self.last_predict_mode.set(Some(mode));
        self.lookup(trial)
    }


    fn name(&self) -> &str {
        &self.name
    }
}
