use serde::{Serialize, Deserialize};

use std::fmt;


/// Affective dimensions predicted by the fusion layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Pleasantness.
    Valence,
    /// Activation / intensity.
    Arousal,
}


impl Dimension {
    /// Both dimensions, in the order they are stored.
    pub const ALL: [Dimension; 2] = [Dimension::Valence, Dimension::Arousal];


    /// Position of the dimension in per-dimension arrays.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Self::Valence => 0,
            Self::Arousal => 1,
        }
    }
}


impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valence => write!(f, "valence"),
            Self::Arousal => write!(f, "arousal"),
        }
    }
}


/// The two sub-classifiers being fused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Facial-expression classifier.
    Face,
    /// EEG classifier.
    Eeg,
}


impl Modality {
    /// Boosting schedule. The face classifier is always scored first.
    pub const SCHEDULE: [Modality; 2] = [Modality::Face, Modality::Eeg];
}


impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Face => write!(f, "face"),
            Self::Eeg => write!(f, "EEG"),
        }
    }
}


/// A binary label, either a `bool` or a `{0, 1}`-coded integer.
/// Only `true` / `1` counts as `high`.
pub trait BinaryLabel: Copy {
    /// Returns `true` if the label encodes the `high` class.
    fn is_high(self) -> bool;
}


impl BinaryLabel for bool {
    #[inline(always)]
    fn is_high(self) -> bool { self }
}


macro_rules! impl_binary_label {
    ($($t:ty),*) => {
        $(
            impl BinaryLabel for $t {
                #[inline(always)]
                fn is_high(self) -> bool { self == 1 }
            }
        )*
    };
}

impl_binary_label!(u8, u32, u64, usize, i32, i64);
