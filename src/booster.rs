//! Boosting meta-algorithms.

mod adaboost;

pub use adaboost::AdaBoost;
