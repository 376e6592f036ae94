//! Provides [`FusionModel`], the late fusion of a face and an EEG classifier.
use tracing::{debug, info};

use crate::{
    Booster,
    FusionConfig,
    FusionWeights,
    LabelPair,
    LabelSource,
    PredictionTable,
    SubClassifier,
    TrialRef,
    TwoStepBoost,
    error::{FusionError, Result},
    research::Accuracy,
};


/// Late fusion of a face classifier `F` and an EEG classifier `E`,
/// with ground truth read from `L`.
///
/// The lifecycle is
/// 1. accumulate training trials with [`FusionModel::add_trial`],
/// 2. call [`FusionModel::train`] exactly once,
/// 3. query [`FusionModel::predict`] / [`FusionModel::predict_labels`].
///
/// Before training, each confidence weight is `0.5`.
///
/// # Example
/// ```no_run
/// use fusionboost::prelude::*;
///
/// # fn main() -> fusionboost::Result<()> {
/// let face = FixedClassifier::new("face");
/// let eeg = FixedClassifier::new("EEG");
/// let config = FusionConfig::new()
///     .input_mode(InputMode::Features);
/// let mut model = FusionModel::with_config(
///     face, eeg, CsvLabelSource::new(), config
/// );
///
/// for id in 1..=20 {
///     model.add_trial(format!("dataset/DEAP/1/trial_{id}/"))?;
/// }
/// model.train()?;
///
/// let (valence_correct, arousal_correct) = model.predict("dataset/DEAP/1/trial_21/")?;
/// println!("valence: {valence_correct}, arousal: {arousal_correct}");
/// # Ok(())
/// # }
/// ```
pub struct FusionModel<F, E, L> {
    face: F,
    eeg: E,
    labels: L,

    // Accumulated training trials, in insertion order.
    trials: Vec<TrialRef>,

    weights: FusionWeights,
    config: FusionConfig,

    // Weighted error rates `[valence, arousal]` of each round.
    error_rates: Vec<[f64; 2]>,

    // Set once both sub-classifiers are trained,
    // so that a failed fusion step does not train them again.
    collaborators_trained: bool,
    trained: bool,
}


impl<F, E, L> FusionModel<F, E, L> {
    /// Construct an untrained model with the default configuration.
    pub fn new(face: F, eeg: E, labels: L) -> Self {
        Self::with_config(face, eeg, labels, FusionConfig::default())
    }


    /// Construct an untrained model with the given configuration.
    /// The configuration, including the input mode forwarded
    /// to the sub-classifiers, is fixed for the lifetime of the model.
    pub fn with_config(face: F, eeg: E, labels: L, config: FusionConfig)
        -> Self
    {
        Self {
            face,
            eeg,
            labels,
            trials: Vec::new(),
            weights: FusionWeights::default(),
            config,
            error_rates: Vec::new(),
            collaborators_trained: false,
            trained: false,
        }
    }


    /// Use previously trained confidence weights.
    /// The model is considered trained afterwards,
    /// so the sub-classifiers must be trained as well.
    pub fn with_weights(mut self, weights: FusionWeights) -> Self {
        self.weights = weights;
        self.trained = true;
        self
    }


    /// Returns the confidence weights.
    pub fn weights(&self) -> &FusionWeights {
        &self.weights
    }


    /// Returns the configuration.
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }


    /// Returns the accumulated training trials.
    pub fn trials(&self) -> &[TrialRef] {
        &self.trials
    }


    /// Returns the weighted error rates `[valence, arousal]`
    /// of the face and EEG rounds.
    /// Empty until the model is trained by [`FusionModel::train`].
    pub fn error_rates(&self) -> &[[f64; 2]] {
        &self.error_rates
    }


    /// Returns `true` once the confidence weights are fixed.
    pub fn is_trained(&self) -> bool {
        self.trained
    }


    /// Returns the face classifier.
    pub fn face(&self) -> &F {
        &self.face
    }


    /// Returns the EEG classifier.
    pub fn eeg(&self) -> &E {
        &self.eeg
    }
}


impl<F, E, L> FusionModel<F, E, L>
    where F: SubClassifier,
          E: SubClassifier,
          L: LabelSource,
{
    /// Forward `trial` to both sub-classifiers and remember it.
    /// Duplicates are kept, which biases training.
    pub fn add_trial<T: Into<TrialRef>>(&mut self, trial: T) -> Result<()> {
        if self.trained {
            return Err(FusionError::AlreadyTrained);
        }

        let trial = trial.into();
        let mode = self.config.input_mode;
        self.face.add_trial(&trial, mode)?;
        self.eeg.add_trial(&trial, mode)?;
        self.trials.push(trial);
        Ok(())
    }


    /// Train both sub-classifiers, then learn the confidence weights
    /// by the two-step boosting over the accumulated trials.
    ///
    /// If the fusion step fails, the model stays untrained and
    /// `train` may be called again; the sub-classifiers are not retrained.
    pub fn train(&mut self) -> Result<&FusionWeights> {
        if self.trained {
            return Err(FusionError::AlreadyTrained);
        }
        if self.trials.is_empty() {
            return Err(FusionError::invalid("no training trial was added"));
        }

        if !self.collaborators_trained {
            self.face.train()?;
            self.eeg.train()?;
            self.collaborators_trained = true;
            debug!(
                "trained {} and {} on {} trials",
                self.face.name(), self.eeg.name(), self.trials.len(),
            );
        }

        let table = self.prediction_table()?;

        let mut booster = TwoStepBoost::init(&table)
            .config(self.config);
        self.weights = booster.run()?;
        self.error_rates = booster.error_rates().to_vec();
        self.trained = true;

        info!(
            "{} finished on {} trials, weights: {:?}",
            booster.name(), table.len(), self.weights,
        );
        Ok(&self.weights)
    }


    /// Returns the fused labels of `trial`.
    pub fn predict_labels(&self, trial: &TrialRef) -> Result<LabelPair> {
        let mode = self.config.input_mode;
        let face = self.face.predict(trial, mode)?;
        let eeg = self.eeg.predict(trial, mode)?;

        self.weights.fuse(face, eeg)
    }


    /// Predict `trial` and compare with its ground truth.
    /// Returns `(valence_correct, arousal_correct)`.
    pub fn predict<T: Into<TrialRef>>(&self, trial: T) -> Result<(bool, bool)> {
        let trial = trial.into();
        let predicted = self.predict_labels(&trial)?;
        let truth = self.labels.read_label(&trial)?;

        Ok((
            predicted.valence_high == truth.valence_high,
            predicted.arousal_high == truth.arousal_high,
        ))
    }


    /// Returns the accuracy on `trials`.
    pub fn evaluate<I, T>(&self, trials: I) -> Result<Accuracy>
        where I: IntoIterator<Item = T>,
              T: Into<TrialRef>,
    {
        let mut accuracy = Accuracy::new();
        for trial in trials {
            let (valence, arousal) = self.predict(trial)?;
            accuracy.record(valence, arousal);
        }
        Ok(accuracy)
    }


    fn prediction_table(&self) -> Result<PredictionTable> {
        let mode = self.config.input_mode;
        let mut table = PredictionTable::new();
        for trial in &self.trials {
            let face = self.face.predict(trial, mode)?;
            let eeg = self.eeg.predict(trial, mode)?;
            let truth = self.labels.read_label(trial)?;
            table.push(face, eeg, truth);
        }
        Ok(table)
    }
}
