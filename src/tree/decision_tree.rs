//! Decision-tree induction over weighted binary observations.

use tracing::debug;

use crate::classifier::Classifier;
use crate::error::{Result, TaalboostError};
use crate::sample::{Label, Observation};

use super::criterion;
use super::node::Node;


/// A binary decision tree classifying observations as English or Dutch.
///
/// [`train`](DecisionTree::train) grows the tree by recursive weighted
/// information-gain splitting; an untrained tree has no root and refuses
/// to predict. The `weight` is the ensemble confidence assigned by
/// boosting; standalone trees keep the default 1.
///
/// # Example
/// ```
/// use taalboost::prelude::*;
///
/// let sample = vec![
///     Observation::labeled(Attributes::from_bits([true, false]), Label::English),
///     Observation::labeled(Attributes::from_bits([false, true]), Label::Dutch),
/// ];
///
/// let mut tree = DecisionTree::new();
/// tree.train(&sample)?;
///
/// assert_eq!(tree.predict(&sample[0])?, Label::English);
/// # Ok::<(), taalboost::TaalboostError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Option<Node>,
    weight: f64,
    max_depth: Option<usize>,
}


impl DecisionTree {
    /// An untrained tree with unbounded induction depth.
    pub fn new() -> Self {
        Self {
            root: None,
            weight: 1f64,
            max_depth: None,
        }
    }


    /// Limit induction to `depth` levels of splits.
    /// `max_depth(1)` grows decision stumps, the shape boosting consumes.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }


    /// The trained tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }


    /// Ensemble confidence weight of this tree.
    pub fn weight(&self) -> f64 {
        self.weight
    }


    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }


    pub(crate) fn from_parts(root: Node, weight: f64) -> Self {
        Self {
            root: Some(root),
            weight,
            max_depth: None,
        }
    }


    /// Grow the tree from `sample`, replacing any previous one wholesale.
    ///
    /// Training an empty sample is a no-op: the tree stays untrained.
    ///
    /// # Errors
    /// [`TaalboostError::UnlabeledObservation`] if an observation has no
    /// ground truth, [`TaalboostError::AttributeWidthMismatch`] if the
    /// sample mixes attribute widths.
    pub fn train(&mut self, sample: &[Observation]) -> Result<()> {
        if sample.is_empty() {
            return Ok(());
        }
        let width = check_labeled_sample(sample)?;

        let observations = sample.iter().collect::<Vec<_>>();
        let attributes = (0..width).collect::<Vec<_>>();

        let root = learn(&observations, attributes, &observations, self.max_depth, 0);
        debug!(n_observations = sample.len(), width, "decision tree trained");
        self.root = Some(root);
        Ok(())
    }
}


impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}


impl Classifier for DecisionTree {
    fn predict(&self, observation: &Observation) -> Result<Label> {
        let root = self.root.as_ref().ok_or(TaalboostError::ModelNotTrained)?;
        Ok(root.label_for(observation.attributes()))
    }
}


/// Verify every observation is labeled and all widths agree.
/// Returns the common attribute width. `sample` must be non-empty.
fn check_labeled_sample(sample: &[Observation]) -> Result<usize> {
    let width = sample[0].attributes().len();
    for (index, observation) in sample.iter().enumerate() {
        if observation.label().is_none() {
            return Err(TaalboostError::UnlabeledObservation { index });
        }
        let found = observation.attributes().len();
        if found != width {
            return Err(TaalboostError::AttributeWidthMismatch {
                index,
                expected: width,
                found,
            });
        }
    }
    Ok(width)
}


/// One step of weighted-ID3.
///
/// Leaf cases, in order: the depth limit is reached (weighted majority
/// of the current set); the set or the attribute list is exhausted
/// (weighted majority of the parent set); the set is pure. Otherwise
/// split on the best attribute, which is withdrawn from both children's
/// attribute lists, so no root-to-leaf path reuses an attribute.
fn learn(
    observations: &[&Observation],
    mut attributes: Vec<usize>,
    parent: &[&Observation],
    max_depth: Option<usize>,
    depth: usize,
) -> Node {
    if Some(depth) == max_depth {
        return Node::leaf(criterion::majority_label(observations));
    }
    if observations.is_empty() || attributes.is_empty() {
        return Node::leaf(criterion::majority_label(parent));
    }
    let english = criterion::english_count(observations);
    if english == observations.len() {
        return Node::leaf(Label::English);
    }
    if english == 0 {
        return Node::leaf(Label::Dutch);
    }

    let best = criterion::best_attribute(&attributes, observations);
    attributes.retain(|&attribute| attribute != best);
    let (has, lacks) = criterion::split_on(best, observations);

    let has_child = learn(&has, attributes.clone(), observations, max_depth, depth + 1);
    let lacks_child = learn(&lacks, attributes, observations, max_depth, depth + 1);

    Node::branch(best, has_child, lacks_child)
}
