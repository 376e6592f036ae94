use serde::{Serialize, Deserialize};

use crate::{
    LabelPair,
    TrialRef,
    error::Result,
};


/// Form of the EEG input stored in each trial.
/// Fixed when the fusion model is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
pub enum InputMode {
    /// Pre-extracted features.
    #[default]
    Features,
    /// Raw signal.
    RawSignal,
}


/// An independently trained model producing a binary label
/// per affective dimension from one modality (face or EEG).
///
/// The fusion layer only accumulates trials, trains once,
/// and queries predictions. Everything else is up to the implementor.
/// Failures should be wrapped by [`FusionError::collaborator`];
/// they are propagated to the caller unmodified.
///
/// [`FusionError::collaborator`]: crate::FusionError::collaborator
pub trait SubClassifier {
    /// Reads the data of `trial` into the training set.
    fn add_trial(&mut self, trial: &TrialRef, mode: InputMode) -> Result<()>;


    /// Trains the model on the accumulated trials.
    fn train(&mut self) -> Result<()>;


    /// Predicts the labels of `trial`.
    /// Calling this method must not change the prediction of later calls.
    fn predict(&self, trial: &TrialRef, mode: InputMode) -> Result<LabelPair>;


    /// Returns the name of the sub-classifier.
    fn name(&self) -> &str {
        "Sub-classifier"
    }
}


impl<S: SubClassifier + ?Sized> SubClassifier for Box<S> {
    fn add_trial(&mut self, trial: &TrialRef, mode: InputMode) -> Result<()> {
        (**self).add_trial(trial, mode)
    }


    fn train(&mut self) -> Result<()> {
        (**self).train()
    }


    fn predict(&self, trial: &TrialRef, mode: InputMode) -> Result<LabelPair> {
        (**self).predict(trial, mode)
    }


    fn name(&self) -> &str {
        (**self).name()
    }
}
