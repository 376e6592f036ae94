//! Provides [`TwoStepBoost`], the fixed two-round fusion boosting.
use tracing::{debug, warn};

use crate::{
    Booster,
    Dimension,
    FusionWeights,
    Modality,
    config::{DegeneratePolicy, FusionConfig},
    common::constants::N_ROUNDS,
    error::{FusionError, Result},
    weight_engine,
};
use super::PredictionTable;

use std::ops::ControlFlow;


/// A two-step AdaBoost over exactly two weak learners.
///
/// Round `0` scores the face classifier under the uniform weights,
/// then re-weights the trials it mis-classified.
/// Round `1` scores the EEG classifier under the carried-over weights.
/// The order is fixed; it does not depend on which classifier is better.
/// Valence and arousal are boosted independently.
///
/// # Example
/// ```no_run
/// use fusionboost::prelude::*;
///
/// let high = LabelPair::new(true, true);
/// let low = LabelPair::new(false, false);
///
/// // (face, EEG, ground truth) per trial.
/// let table: PredictionTable = vec![
///     (high, high, high),
///     (high, low, high),
///     (low, high, high),
///     (low, low, low),
/// ].into_iter().collect();
///
/// let weights = TwoStepBoost::init(&table)
///     .normalize(false)
///     .run()?;
/// println!("face valence weight: {}", weights.face_valence);
/// # Ok::<(), fusionboost::FusionError>(())
/// ```
pub struct TwoStepBoost<'a> {
    // Training predictions
    table: &'a PredictionTable,

    config: FusionConfig,

    // Sample weights, indexed by `Dimension::index`.
    dist: [Vec<f64>; 2],

    // Weights on the sub-classifiers.
    weights: FusionWeights,

    // Weighted error rate per round, indexed by `Dimension::index`.
    error_rates: Vec<[f64; 2]>,
}


impl<'a> TwoStepBoost<'a> {
    /// Initialize the `TwoStepBoost` with the default configuration.
    pub fn init(table: &'a PredictionTable) -> Self {
        Self {
            table,
            config: FusionConfig::default(),
            dist: [Vec::new(), Vec::new()],
            weights: FusionWeights::default(),
            error_rates: Vec::with_capacity(N_ROUNDS),
        }
    }


    /// Set the configuration.
    pub fn config(mut self, config: FusionConfig) -> Self {
        self.config = config;
        self
    }


    /// Set whether sample weights are normalized after each update.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.config.normalize = normalize;
        self
    }


    /// Returns the weighted error rates `[valence, arousal]` of each round.
    pub fn error_rates(&self) -> &[[f64; 2]] {
        &self.error_rates
    }


    /// Returns the current sample weights on `dimension`.
    pub fn distribution(&self, dimension: Dimension) -> &[f64] {
        &self.dist[dimension.index()]
    }


    fn check_degenerate(
        &self,
        modality: Modality,
        dimension: Dimension,
        error_rate: f64,
        weight: f64,
    ) -> Result<()>
    {
        if !weight_engine::is_degenerate(error_rate) && weight.is_finite() {
            return Ok(());
        }

        match self.config.degenerate {
            DegeneratePolicy::Warn => {
                warn!(
                    "degenerate error rate {error_rate:e} for {modality} \
                    on {dimension}, confidence weight is {weight:e}"
                );
                Ok(())
            },
            DegeneratePolicy::Strict => {
                Err(FusionError::DegenerateErrorRate {
                    modality, dimension, error_rate,
                })
            },
        }
    }
}


impl Booster for TwoStepBoost<'_> {
    type Output = FusionWeights;


    fn preprocess(&mut self) -> Result<()> {
        let (valence, arousal) = weight_engine::init_data_weight(
            self.table.len()
        )?;
        self.dist = [valence, arousal];
        self.weights = FusionWeights::default();
        self.error_rates.clear();
        Ok(())
    }


    fn boost(&mut self, round: usize) -> Result<ControlFlow<usize>> {
        if round >= N_ROUNDS {
            return Ok(ControlFlow::Break(N_ROUNDS));
        }

        let table = self.table;
        let modality = Modality::SCHEDULE[round];
        let mut rates = [0.0; 2];

        for dimension in Dimension::ALL {
            let i = dimension.index();
            let predicted = table.predictions(modality, dimension);
            let truth = table.truth(dimension);

            let error_rate = weight_engine::error_rate(
                &self.dist[i], predicted, truth
            )?;
            let weight = self.config.rule.weight(error_rate);
            self.check_degenerate(modality, dimension, error_rate, weight)?;
            debug!(
                "round {round} ({modality}, {dimension}): \
                error rate {error_rate:.6}, confidence weight {weight:.6}"
            );

            self.weights.set(modality, dimension, weight);
            rates[i] = error_rate;

            // The last sub-classifier leaves the sample weights untouched.
            if round + 1 == N_ROUNDS { continue; }

            let dist = &mut self.dist[i];
            weight_engine::update_data_weight(dist, predicted, truth, weight)?;

            let total = dist.iter().sum::<f64>();
            if !total.is_finite() || total == 0.0 {
                warn!(
                    "sample weights on {dimension} sum to {total:e} \
                    after the {modality} round"
                );
            } else if self.config.normalize {
                weight_engine::normalize_data_weight(dist)?;
            }
        }
        self.error_rates.push(rates);

        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Result<FusionWeights> {
        Ok(self.weights)
    }


    fn name(&self) -> &str {
        "TwoStepBoost"
    }
}
