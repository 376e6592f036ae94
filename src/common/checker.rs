//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::error::{FusionError, Result};


/// Check whether the number of samples is positive.
#[inline(always)]
pub(crate) fn check_n_sample(n_sample: usize) -> Result<()> {
    if n_sample == 0 {
        return Err(FusionError::invalid(
            "the number of samples must be positive"
        ));
    }
    Ok(())
}


/// Check whether the weights, predictions, and true labels
/// are aligned by sample index.
#[inline(always)]
pub(crate) fn check_aligned(
    n_weight: usize,
    n_predicted: usize,
    n_true: usize,
) -> Result<()>
{
    if n_weight != n_predicted || n_weight != n_true {
        let message = format!(
            "mismatched lengths: {n_weight} weights, \
            {n_predicted} predictions, {n_true} true labels"
        );
        return Err(FusionError::invalid(message));
    }
    Ok(())
}


/// Check whether per-trial label columns have one entry per trial.
#[inline(always)]
pub(crate) fn check_columns(
    n_trial: usize,
    n_valence: usize,
    n_arousal: usize,
) -> Result<()>
{
    if n_trial != n_valence || n_trial != n_arousal {
        let message = format!(
            "mismatched lengths: {n_trial} trials, \
            {n_valence} valence labels, {n_arousal} arousal labels"
        );
        return Err(FusionError::invalid(message));
    }
    Ok(())
}
