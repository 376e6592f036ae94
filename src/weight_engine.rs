//! Pure numeric steps of the fusion boosting.
//!
//! 1. [`init_data_weight`] puts a uniform weight `1 / M` on each sample,
//! 2. [`error_rate`] sums the weights of the mis-classified samples,
//! 3. [`classifier_weight`] turns the error rate into a confidence weight,
//! 4. [`update_data_weight`] emphasizes the mis-classified samples
//!    before the next sub-classifier is scored.
//!
//! The update does **not** divide by the sum of the new weights,
//! so the weights may drift away from a distribution.
//! Call [`normalize_data_weight`] afterwards to get the canonical AdaBoost update.
use crate::{
    BinaryLabel,
    common::{checker, constants::ERROR_RATE_BIAS, utils},
    error::Result,
};


/// Returns the initial sample weights for valence and arousal,
/// each of length `n_sample` with every entry equal to `1 / n_sample`.
pub fn init_data_weight(n_sample: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    checker::check_n_sample(n_sample)?;

    let uni = 1.0 / n_sample as f64;
    Ok((vec![uni; n_sample], vec![uni; n_sample]))
}


/// Returns the weighted error rate
/// `sum_i weights[i] * [predicted[i] != truth[i]] + 1e-11`.
///
/// The bias keeps the result strictly positive
/// so that [`classifier_weight`] never divides by zero.
pub fn error_rate<P, T>(
    weights: &[f64],
    predicted: &[P],
    truth: &[T],
) -> Result<f64>
    where P: BinaryLabel,
          T: BinaryLabel,
{
    checker::check_aligned(weights.len(), predicted.len(), truth.len())?;

    let err = weights.iter()
        .zip(predicted.iter().zip(truth))
        .filter(|(_, (p, t))| p.is_high() != t.is_high())
        .map(|(w, _)| *w)
        .sum::<f64>();
    Ok(err + ERROR_RATE_BIAS)
}


/// Returns the confidence weight `(1 - error_rate) / (2 * error_rate)`.
///
/// The value is `0` at `error_rate = 1`, negative beyond,
/// and grows without bound as `error_rate -> 0`.
/// No clamping is applied.
#[inline]
pub fn classifier_weight(error_rate: f64) -> f64 {
    0.5 * ((1.0 - error_rate) / error_rate)
}


/// Returns the AdaBoost confidence weight `ln((1 - error_rate) / error_rate) / 2`.
///
/// The value is `0` at `error_rate = 0.5`
/// and negative for worse-than-chance classifiers.
#[inline]
pub fn log_odds_weight(error_rate: f64) -> f64 {
    ((1.0 - error_rate) / error_rate).ln() / 2.0
}


/// Multiplies `weights[i]` by `exp(-classifier_weight)` if sample `i` is
/// classified correctly, by `exp(+classifier_weight)` otherwise.
/// The result is not normalized.
pub fn update_data_weight<P, T>(
    weights: &mut [f64],
    predicted: &[P],
    truth: &[T],
    classifier_weight: f64,
) -> Result<()>
    where P: BinaryLabel,
          T: BinaryLabel,
{
    checker::check_aligned(weights.len(), predicted.len(), truth.len())?;

    let shrink = (-classifier_weight).exp();
    let grow = classifier_weight.exp();
    weights.iter_mut()
        .zip(predicted.iter().zip(truth))
        .for_each(|(w, (p, t))| {
            *w *= if p.is_high() == t.is_high() { shrink } else { grow };
        });
    Ok(())
}


/// Rescales `weights` to sum to `1`.
pub fn normalize_data_weight(weights: &mut [f64]) -> Result<()> {
    utils::normalize(weights)
}


/// Returns `true` if `error_rate` sits on the bias floor or is not finite,
/// i.e., the confidence weight derived from it is unbounded.
#[inline]
pub fn is_degenerate(error_rate: f64) -> bool {
    !error_rate.is_finite() || error_rate <= ERROR_RATE_BIAS
}
