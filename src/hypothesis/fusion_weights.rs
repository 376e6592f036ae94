use serde::{Serialize, Deserialize};
use tracing::warn;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::{
    Dimension,
    LabelPair,
    Modality,
    common::{constants::DEFAULT_CONFIDENCE, utils},
    error::{FusionError, Result},
};


/// The confidence weight of each sub-classifier on each dimension.
/// This is what the fusion boosting learns.
/// You can read/write this struct by `Serde` trait.
///
/// The fused label on a dimension is `high` iff
/// `face_weight * face_vote + eeg_weight * eeg_vote > 0`,
/// where a vote is `+1` for `high` and `-1` for `low`.
/// A score of exactly `0` is `low`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FusionWeights {
    /// Weight of the face classifier on valence.
    pub face_valence: f64,
    /// Weight of the face classifier on arousal.
    pub face_arousal: f64,
    /// Weight of the EEG classifier on valence.
    pub eeg_valence: f64,
    /// Weight of the EEG classifier on arousal.
    pub eeg_arousal: f64,
}


impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            face_valence: DEFAULT_CONFIDENCE,
            face_arousal: DEFAULT_CONFIDENCE,
            eeg_valence: DEFAULT_CONFIDENCE,
            eeg_arousal: DEFAULT_CONFIDENCE,
        }
    }
}


impl FusionWeights {
    /// Returns the weight of `modality` on `dimension`.
    #[inline]
    pub fn get(&self, modality: Modality, dimension: Dimension) -> f64 {
        match (modality, dimension) {
            (Modality::Face, Dimension::Valence) => self.face_valence,
            (Modality::Face, Dimension::Arousal) => self.face_arousal,
            (Modality::Eeg, Dimension::Valence) => self.eeg_valence,
            (Modality::Eeg, Dimension::Arousal) => self.eeg_arousal,
        }
    }


    /// Set the weight of `modality` on `dimension`.
    #[inline]
    pub fn set(&mut self, modality: Modality, dimension: Dimension, weight: f64) {
        let slot = match (modality, dimension) {
            (Modality::Face, Dimension::Valence) => &mut self.face_valence,
            (Modality::Face, Dimension::Arousal) => &mut self.face_arousal,
            (Modality::Eeg, Dimension::Valence) => &mut self.eeg_valence,
            (Modality::Eeg, Dimension::Arousal) => &mut self.eeg_arousal,
        };
        *slot = weight;
    }


    /// Returns the weighted vote on `dimension`.
    pub fn score(&self, dimension: Dimension, face: LabelPair, eeg: LabelPair)
        -> f64
    {
        let face_vote = utils::signed_vote(face.get(dimension));
        let eeg_vote = utils::signed_vote(eeg.get(dimension));

        self.get(Modality::Face, dimension) * face_vote
            + self.get(Modality::Eeg, dimension) * eeg_vote
    }


    /// Combines the predictions of the two sub-classifiers.
    /// Fails if a score is `NaN`,
    /// which happens when infinite weights cancel out.
    pub fn fuse(&self, face: LabelPair, eeg: LabelPair) -> Result<LabelPair> {
        let mut fused = [false; 2];
        for dimension in Dimension::ALL {
            let score = self.score(dimension, face, eeg);
            if score.is_nan() {
                warn!("fused {dimension} score is NaN, weights: {:?}", self);
                return Err(FusionError::NonFiniteScore { dimension });
            }
            fused[dimension.index()] = score > 0.0;
        }
        Ok(LabelPair::new(fused[0], fused[1]))
    }


    /// Write the weights to `path` as JSON.
    /// Non-finite weights are written as `null` and cannot be read back.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }


    /// Read weights written by [`FusionWeights::to_json_file`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let weights = serde_json::from_reader(BufReader::new(file))?;
        Ok(weights)
    }
}
