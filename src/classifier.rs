//! Provides the [`Classifier`] trait.

use crate::error::Result;
use crate::sample::{Label, Observation};


/// Behavior shared by every trained model in this crate.
/// Implementors only need the single-observation `predict`.
pub trait Classifier {
    /// Predicts the language of one observation.
    ///
    /// # Errors
    /// [`TaalboostError::ModelNotTrained`](crate::TaalboostError::ModelNotTrained)
    /// if the model was never trained or loaded.
    fn predict(&self, observation: &Observation) -> Result<Label>;


    /// Predicts the language of every observation in `sample`.
    fn predict_all(&self, sample: &[Observation]) -> Result<Vec<Label>> {
        sample.iter()
            .map(|observation| self.predict(observation))
            .collect()
    }
}
