//! Model selection and on-disk persistence dispatch.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::booster::AdaBoost;
use crate::classifier::Classifier;
use crate::error::{Result, TaalboostError};
use crate::sample::{Label, Observation};
use crate::tree::DecisionTree;


/// Either trained model kind; what callers pass around when the choice
/// between a single tree and an ensemble is made at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    /// A standalone decision tree.
    Tree(DecisionTree),
    /// A boosted ensemble of stumps.
    Ensemble(AdaBoost),
}


impl Model {
    /// Parse a persisted model.
    ///
    /// Discrimination is positional: text opening with `{` is a single
    /// decision tree, anything else is read as an ensemble list.
    ///
    /// # Errors
    /// See [`DecisionTree::from_json`] and [`AdaBoost::from_json`].
    pub fn from_json(text: &str) -> Result<Self> {
        if text.starts_with('{') {
            DecisionTree::from_json(text).map(Model::Tree)
        } else {
            AdaBoost::from_json(text).map(Model::Ensemble)
        }
    }


    /// Serialize to the persisted text format.
    ///
    /// # Errors
    /// [`TaalboostError::ModelNotTrained`] for an untrained model.
    pub fn to_json(&self) -> Result<String> {
        match self {
            Model::Tree(tree) => tree.to_json(),
            Model::Ensemble(ensemble) => ensemble.to_json(),
        }
    }


    /// Read and parse a model file.
    ///
    /// # Errors
    /// [`TaalboostError::Io`] on file access, otherwise as
    /// [`Model::from_json`]. A failed load leaves no model behind.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| TaalboostError::Io { path: path.into(), source })?;
        let model = Self::from_json(&text)?;
        info!(path = %path.display(), kind = model.kind(), "model loaded");
        Ok(model)
    }


    /// Serialize and write a model file.
    ///
    /// # Errors
    /// [`TaalboostError::ModelNotTrained`] for an untrained model,
    /// [`TaalboostError::Io`] on write failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_json()?;
        fs::write(path, text)
            .map_err(|source| TaalboostError::Io { path: path.into(), source })?;
        info!(path = %path.display(), kind = self.kind(), "model saved");
        Ok(())
    }


    fn kind(&self) -> &'static str {
        match self {
            Model::Tree(_) => "decision tree",
            Model::Ensemble(_) => "adaboost ensemble",
        }
    }
}


impl Classifier for Model {
    fn predict(&self, observation: &Observation) -> Result<Label> {
        match self {
            Model::Tree(tree) => tree.predict(observation),
            Model::Ensemble(ensemble) => ensemble.predict(observation),
        }
    }
}
