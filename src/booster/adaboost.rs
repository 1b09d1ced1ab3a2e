//! Discrete AdaBoost over depth-one decision stumps.

use tracing::debug;

use crate::classifier::Classifier;
use crate::constants::PERFECT_STUMP_CONFIDENCE;
use crate::error::{Result, TaalboostError};
use crate::sample::{Label, Observation};
use crate::tree::DecisionTree;


/// An ordered ensemble of confidence-weighted decision stumps.
///
/// Each boosting round trains a stump against the current example
/// weights, down-weights the examples it got right, renormalizes the
/// weights to sum 1, and records the stump with a confidence derived
/// from its weighted error. Prediction is a confidence-weighted vote
/// over all stumps; ties go to English. Stump confidences are never
/// normalized across the ensemble.
///
/// # Example
/// ```
/// use taalboost::prelude::*;
///
/// let mut sample = vec![
///     Observation::labeled(Attributes::from_bits([true, false]), Label::English),
///     Observation::labeled(Attributes::from_bits([false, true]), Label::Dutch),
/// ];
///
/// let mut ensemble = AdaBoost::new();
/// ensemble.train(&mut sample, 5)?;
///
/// assert_eq!(ensemble.stumps().len(), 5);
/// assert_eq!(ensemble.predict(&sample[0])?, Label::English);
/// # Ok::<(), taalboost::TaalboostError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaBoost {
    stumps: Vec<DecisionTree>,
}


impl AdaBoost {
    /// An empty, untrained ensemble.
    pub fn new() -> Self {
        Self { stumps: Vec::new() }
    }


    /// The stumps in the order they were learned.
    pub fn stumps(&self) -> &[DecisionTree] {
        &self.stumps
    }


    pub(crate) fn from_stumps(stumps: Vec<DecisionTree>) -> Self {
        Self { stumps }
    }


    /// Run `stump_count` boosting rounds over `sample`, replacing any
    /// previously learned ensemble wholesale.
    ///
    /// The sample is borrowed exclusively because example weights are
    /// rewritten each round: initialized to `1/N`, scaled after every
    /// stump, and renormalized to sum 1. The exclusive borrow also keeps
    /// one collection from feeding two training runs at once. Training
    /// an empty sample is a no-op.
    ///
    /// # Errors
    /// Label and width problems surface from the per-round stump
    /// training, see [`DecisionTree::train`].
    pub fn train(&mut self, sample: &mut [Observation], stump_count: usize) -> Result<()> {
        if sample.is_empty() {
            return Ok(());
        }

        let uniform = 1f64 / sample.len() as f64;
        for observation in sample.iter_mut() {
            observation.set_weight(uniform);
        }

        let mut stumps = Vec::with_capacity(stump_count);
        for round in 0..stump_count {
            let mut stump = DecisionTree::new().max_depth(1);
            stump.train(sample)?;
            let predictions = stump.predict_all(sample)?;

            let error = sample.iter()
                .zip(&predictions)
                .filter(|(observation, prediction)| {
                    observation.label() != Some(**prediction)
                })
                .map(|(observation, _)| observation.weight())
                .sum::<f64>();

            // Stump leaves carry weighted-majority labels, so `error`
            // never exceeds 1/2 and the update factor stays finite. A
            // perfect round leaves the distribution alone: scaling by
            // `0` would wipe out every weight.
            if error > 0f64 {
                let update = error / (1f64 - error);
                for (observation, prediction) in sample.iter_mut().zip(&predictions) {
                    if observation.label() == Some(*prediction) {
                        let weight = observation.weight() * update;
                        observation.set_weight(weight);
                    }
                }
                Observation::normalize_weights(sample);
            }

            let confidence = if error == 0f64 {
                PERFECT_STUMP_CONFIDENCE
            } else {
                ((1f64 - error) / error).log2() / 2f64
            };
            stump.set_weight(confidence);

            debug!(round, error, confidence, "boosting round");
            stumps.push(stump);
        }

        self.stumps = stumps;
        Ok(())
    }
}


impl Classifier for AdaBoost {
    fn predict(&self, observation: &Observation) -> Result<Label> {
        if self.stumps.is_empty() {
            return Err(TaalboostError::ModelNotTrained);
        }

        let mut english_votes = 0f64;
        let mut dutch_votes = 0f64;
        for stump in &self.stumps {
            match stump.predict(observation)? {
                Label::English => english_votes += stump.weight(),
                Label::Dutch => dutch_votes += stump.weight(),
            }
        }

        Ok(if english_votes >= dutch_votes {
            Label::English
        } else {
            Label::Dutch
        })
    }
}
