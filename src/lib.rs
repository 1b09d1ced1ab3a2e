#![warn(missing_docs)]

//!
//! Classifies short text snippets as English or Dutch with two
//! interchangeable supervised models:
//!
//! - [`DecisionTree`]: a single binary decision tree grown by recursive
//!   weighted information-gain splitting over binary attributes.
//!
//! - [`AdaBoost`]: an ensemble of depth-one trees ("stumps") trained by
//!   reweighting the examples each round and combined by a
//!   confidence-weighted majority vote.
//!
//! Both implement [`Classifier`] and persist to the same JSON text
//! format; [`Model`] dispatches between them at load time.
//!
//! ```no_run
//! use taalboost::prelude::*;
//!
//! let mut sample = read_labeled("train.txt")?;
//!
//! let mut ensemble = AdaBoost::new();
//! ensemble.train(&mut sample, DEFAULT_STUMP_COUNT)?;
//!
//! Model::Ensemble(ensemble).save("hypothesis.json")?;
//! # Ok::<(), taalboost::TaalboostError>(())
//! ```

pub mod booster;
pub mod classifier;
pub mod constants;
pub mod error;
pub mod model;
pub mod prelude;
pub mod report;
pub mod sample;
pub mod tree;

mod serialize;


pub use booster::AdaBoost;
pub use classifier::Classifier;
pub use error::{Result, TaalboostError};
pub use model::Model;
pub use report::Evaluation;
pub use sample::{Attributes, Label, Observation};
pub use tree::DecisionTree;
