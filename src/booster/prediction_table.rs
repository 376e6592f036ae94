use crate::{
    Dimension,
    LabelPair,
    Modality,
};


/// Predictions of both sub-classifiers and the ground truth
/// on the training trials, aligned by trial index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionTable {
    face: [Vec<bool>; 2],
    eeg: [Vec<bool>; 2],
    truth: [Vec<bool>; 2],
}


impl PredictionTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }


    /// Append the row of one trial.
    pub fn push(&mut self, face: LabelPair, eeg: LabelPair, truth: LabelPair) {
        for dimension in Dimension::ALL {
            let i = dimension.index();
            self.face[i].push(face.get(dimension));
            self.eeg[i].push(eeg.get(dimension));
            self.truth[i].push(truth.get(dimension));
        }
    }


    /// Returns the number of trials.
    pub fn len(&self) -> usize {
        self.truth[0].len()
    }


    /// Returns `true` if the table has no row.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Returns the predictions of `modality` on `dimension`.
    pub fn predictions(&self, modality: Modality, dimension: Dimension)
        -> &[bool]
    {
        let i = dimension.index();
        match modality {
            Modality::Face => &self.face[i],
            Modality::Eeg => &self.eeg[i],
        }
    }


    /// Returns the ground truth on `dimension`.
    pub fn truth(&self, dimension: Dimension) -> &[bool] {
        &self.truth[dimension.index()]
    }
}


impl FromIterator<(LabelPair, LabelPair, LabelPair)> for PredictionTable {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = (LabelPair, LabelPair, LabelPair)>
    {
        let mut table = Self::new();
        iter.into_iter()
            .for_each(|(face, eeg, truth)| table.push(face, eeg, truth));
        table
    }
}
