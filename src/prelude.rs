//! Exports the types most programs need.

pub use crate::booster::AdaBoost;

pub use crate::classifier::Classifier;

pub use crate::constants::DEFAULT_STUMP_COUNT;

pub use crate::error::{Result, TaalboostError};

pub use crate::model::Model;

pub use crate::report::Evaluation;

pub use crate::sample::{
    read_labeled,
    read_unlabeled,
    Attributes,
    Label,
    Observation,
};

pub use crate::tree::DecisionTree;
