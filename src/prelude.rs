//! Exports the fusion model, its collaborators, and traits.
//! 
pub use crate::booster::{
    // Booster trait
    Booster,

    // Two-step fusion boosting
    TwoStepBoost,
    PredictionTable,
};


pub use crate::sub_classifier::{
    // Sub-classifier trait
    SubClassifier,
    InputMode,

    // Stand-in replaying fixed predictions
    FixedClassifier,
};


pub use crate::label::{
    LabelPair,
    LabelSource,
    CsvLabelSource,
    LabelTable,
};


pub use crate::{
    BinaryLabel,
    Dimension,
    Modality,
    TrialRef,
    FusionError,
    FusionWeights,
    FusionModel,
    FusionConfig,
    ConfidenceRule,
    DegeneratePolicy,
};


pub use crate::research::{
    Accuracy,
    TrialSplit,
    LeaveOneOut,
};
