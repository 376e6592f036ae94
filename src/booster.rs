//! Provides the fusion boosting.

mod core;
mod prediction_table;
mod two_step;


/// Booster trait
pub use self::core::Booster;

pub use self::prediction_table::PredictionTable;
pub use self::two_step::TwoStepBoost;
