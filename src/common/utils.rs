//! This file provides some common functions
//! such as the signed vote and normalization.
use crate::error::{FusionError, Result};


/// Maps a binary label to a signed vote, `high -> +1`, `low -> -1`.
#[inline(always)]
pub(crate) fn signed_vote(high: bool) -> f64 {
    if high { 1.0 } else { -1.0 }
}


/// Normalize `items` so that `\| items \|_1 = 1`.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) -> Result<()> {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    if z == 0.0 || !z.is_finite() {
        return Err(FusionError::invalid(
            format!("cannot normalize weights summing to {z}")
        ));
    }

    items.iter_mut()
        .for_each(|item| { *item /= z; });
    Ok(())
}
