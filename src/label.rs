//! Ground truth of the trials.
//!
//! Each trial carries a self-reported rating on a `1`–`9` scale
//! for valence and arousal. A rating is `high` if its integer part
//! is strictly greater than `5`.
use polars::prelude::*;
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::{
    Dimension,
    TrialRef,
    common::constants::{LABEL_FILE, RATING_THRESHOLD},
    error::{FusionError, Result},
};


/// A binary label for each affective dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(Serialize, Deserialize)]
pub struct LabelPair {
    /// `true` if the valence is high.
    pub valence_high: bool,
    /// `true` if the arousal is high.
    pub arousal_high: bool,
}


impl LabelPair {
    /// Construct a new label pair.
    pub fn new(valence_high: bool, arousal_high: bool) -> Self {
        Self { valence_high, arousal_high }
    }


    /// Threshold a pair of `1`–`9` ratings.
    pub fn from_ratings(valence: f64, arousal: f64) -> Self {
        Self::new(is_high_rating(valence), is_high_rating(arousal))
    }


    /// Returns the label on `dimension`.
    #[inline(always)]
    pub fn get(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Valence => self.valence_high,
            Dimension::Arousal => self.arousal_high,
        }
    }
}


impl From<(bool, bool)> for LabelPair {
    fn from((valence_high, arousal_high): (bool, bool)) -> Self {
        Self::new(valence_high, arousal_high)
    }
}


/// Returns `true` if the integer part of `rating` exceeds `5`.
/// So `5.9` is low and `6.0` is high.
#[inline]
pub fn is_high_rating(rating: f64) -> bool {
    rating.trunc() > RATING_THRESHOLD
}


/// A source of per-trial ground truth.
pub trait LabelSource {
    /// Returns the label pair of `trial`.
    fn read_label(&self, trial: &TrialRef) -> Result<LabelPair>;
}


impl<L: LabelSource + ?Sized> LabelSource for &L {
    fn read_label(&self, trial: &TrialRef) -> Result<LabelPair> {
        (**self).read_label(trial)
    }
}


impl<L: LabelSource + ?Sized> LabelSource for Box<L> {
    fn read_label(&self, trial: &TrialRef) -> Result<LabelPair> {
        (**self).read_label(trial)
    }
}


/// Reads `<trial>/label.csv`, a CSV file with a header row
/// holding (at least) the columns `valence` and `arousal`.
/// The file must hold exactly one data row.
/// A missing or `NaN` rating is a [`FusionError::Label`].
///
/// # Example
/// ```no_run
/// use fusionboost::prelude::*;
///
/// let labels = CsvLabelSource::new();
/// let pair = labels.read_label(&TrialRef::new("dataset/DEAP/1/trial_1/"))?;
/// # Ok::<(), fusionboost::FusionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvLabelSource {
    file_name: String,
    valence_column: String,
    arousal_column: String,
}


impl CsvLabelSource {
    /// Construct a new instance of `CsvLabelSource`
    /// reading `label.csv` with columns `valence` and `arousal`.
    pub fn new() -> Self {
        Self {
            file_name: LABEL_FILE.to_string(),
            valence_column: "valence".to_string(),
            arousal_column: "arousal".to_string(),
        }
    }


    /// Set the file name looked up inside each trial directory.
    pub fn file_name<S: ToString>(mut self, file_name: S) -> Self {
        self.file_name = file_name.to_string();
        self
    }


    /// Set the column names holding the valence and arousal ratings.
    pub fn columns<S: ToString>(mut self, valence: S, arousal: S) -> Self {
        self.valence_column = valence.to_string();
        self.arousal_column = arousal.to_string();
        self
    }


    fn rating(&self, trial: &TrialRef, data: &DataFrame, column: &str)
        -> Result<f64>
    {
        let label_error = |reason: String| FusionError::Label {
            trial: trial.clone(),
            reason,
        };
        let series = data.column(column)
            .map_err(|_| label_error(format!("no column named `{column}`")))?
            .cast(&DataType::Float64)?;

        let rating = series.f64()?
            .get(0)
            .ok_or_else(|| label_error(format!("`{column}` rating is missing")))?;
        if rating.is_nan() {
            return Err(label_error(format!("`{column}` rating is NaN")));
        }
        Ok(rating)
    }
}


impl Default for CsvLabelSource {
    fn default() -> Self {
        Self::new()
    }
}


impl LabelSource for CsvLabelSource {
    fn read_label(&self, trial: &TrialRef) -> Result<LabelPair> {
        let path = trial.join(&self.file_name);
        if !path.is_file() {
            return Err(FusionError::Label {
                trial: trial.clone(),
                reason: format!("{} does not exist", path.display()),
            });
        }

        let data = CsvReader::from_path(&path)?
            .has_header(true)
            .finish()?;
        if data.height() != 1 {
            return Err(FusionError::Label {
                trial: trial.clone(),
                reason: format!(
                    "expected exactly one row in {}, found {}",
                    path.display(), data.height(),
                ),
            });
        }

        let valence = self.rating(trial, &data, &self.valence_column)?;
        let arousal = self.rating(trial, &data, &self.arousal_column)?;
        Ok(LabelPair::from_ratings(valence, arousal))
    }
}


/// An in-memory table of label pairs, keyed by trial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelTable {
    labels: HashMap<TrialRef, LabelPair>,
}


impl LabelTable {
    /// Construct an empty table.
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the label pair of `trial`, replacing the previous one.
    pub fn insert<T, P>(&mut self, trial: T, label: P)
        where T: Into<TrialRef>,
              P: Into<LabelPair>,
    {
        self.labels.insert(trial.into(), label.into());
    }


    /// Builder-style variant of [`LabelTable::insert`].
    pub fn with<T, P>(mut self, trial: T, label: P) -> Self
        where T: Into<TrialRef>,
              P: Into<LabelPair>,
    {
        self.insert(trial, label);
        self
    }


    /// Returns the number of trials in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }


    /// Returns `true` if the table holds no trial.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}


impl<T, P> FromIterator<(T, P)> for LabelTable
    where T: Into<TrialRef>,
          P: Into<LabelPair>,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let labels = iter.into_iter()
            .map(|(t, p)| (t.into(), p.into()))
            .collect();
        Self { labels }
    }
}


impl LabelSource for LabelTable {
    fn read_label(&self, trial: &TrialRef) -> Result<LabelPair> {
        self.labels.get(trial)
            .copied()
            .ok_or_else(|| FusionError::Label {
                trial: trial.clone(),
                reason: "no label registered".to_string(),
            })
    }
}
