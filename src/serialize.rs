//! The persisted text format.
//!
//! A decision tree serializes as `{"weight": w, "tree": node}`; each
//! node is `{"value": v, "children": {..}}` where `value` holds an
//! attribute index on branches and a label token on leaves, and
//! `children` maps the edge tokens `"1"` (has) and `"0"` (lacks) to
//! subtrees, with an empty map on leaves. An ensemble is a JSON array
//! of such tree objects, in learned order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::booster::AdaBoost;
use crate::error::{Result, TaalboostError};
use crate::tree::{DecisionTree, Node};


const HAS_EDGE: &str = "1";
const LACKS_EDGE: &str = "0";


#[derive(Debug, Serialize, Deserialize)]
struct NodeRepr {
    value: String,
    children: BTreeMap<String, NodeRepr>,
}


#[derive(Debug, Serialize, Deserialize)]
struct TreeRepr {
    weight: f64,
    tree: NodeRepr,
}


impl From<&Node> for NodeRepr {
    fn from(node: &Node) -> Self {
        match node {
            Node::Branch(branch) => {
                let children = BTreeMap::from([
                    (LACKS_EDGE.to_string(), NodeRepr::from(branch.lacks())),
                    (HAS_EDGE.to_string(), NodeRepr::from(branch.has())),
                ]);
                NodeRepr {
                    value: branch.attribute().to_string(),
                    children,
                }
            }
            Node::Leaf(leaf) => NodeRepr {
                value: leaf.label().to_string(),
                children: BTreeMap::new(),
            },
        }
    }
}


impl TryFrom<NodeRepr> for Node {
    type Error = TaalboostError;

    fn try_from(repr: NodeRepr) -> Result<Self> {
        // A node is a leaf exactly when it has no children.
        if repr.children.is_empty() {
            let label = repr.value.parse()?;
            return Ok(Node::leaf(label));
        }

        let attribute = repr.value.parse::<usize>().map_err(|_| {
            TaalboostError::MalformedModel {
                reason: format!("branch value `{}` is not an attribute index", repr.value),
            }
        })?;

        let mut children = repr.children;
        let has = children.remove(HAS_EDGE).ok_or_else(|| missing_edge(HAS_EDGE))?;
        let lacks = children.remove(LACKS_EDGE).ok_or_else(|| missing_edge(LACKS_EDGE))?;
        if let Some(edge) = children.keys().next() {
            return Err(TaalboostError::MalformedModel {
                reason: format!("unexpected edge token `{edge}`"),
            });
        }

        Ok(Node::branch(
            attribute,
            Node::try_from(has)?,
            Node::try_from(lacks)?,
        ))
    }
}


fn missing_edge(edge: &str) -> TaalboostError {
    TaalboostError::MalformedModel {
        reason: format!("branch is missing its `{edge}` child"),
    }
}


impl DecisionTree {
    /// Serialize the trained tree to the persisted text format.
    ///
    /// # Errors
    /// [`TaalboostError::ModelNotTrained`] before training.
    pub fn to_json(&self) -> Result<String> {
        let root = self.root().ok_or(TaalboostError::ModelNotTrained)?;
        let repr = TreeRepr {
            weight: self.weight(),
            tree: NodeRepr::from(root),
        };
        Ok(serde_json::to_string(&repr)?)
    }


    /// Rebuild a tree from its persisted form.
    ///
    /// # Errors
    /// [`TaalboostError::ModelJson`] on invalid JSON,
    /// [`TaalboostError::MalformedModel`] or
    /// [`TaalboostError::UnknownLabel`] on a structure that does not
    /// describe a tree. Nothing is rebuilt on failure.
    pub fn from_json(text: &str) -> Result<Self> {
        let repr = serde_json::from_str::<TreeRepr>(text)?;
        let root = Node::try_from(repr.tree)?;
        Ok(DecisionTree::from_parts(root, repr.weight))
    }
}


impl AdaBoost {
    /// Serialize the ensemble as an array of weighted stumps.
    ///
    /// # Errors
    /// [`TaalboostError::ModelNotTrained`] while the ensemble is empty.
    pub fn to_json(&self) -> Result<String> {
        if self.stumps().is_empty() {
            return Err(TaalboostError::ModelNotTrained);
        }
        let reprs = self.stumps()
            .iter()
            .map(|stump| {
                let root = stump.root().ok_or(TaalboostError::ModelNotTrained)?;
                Ok(TreeRepr {
                    weight: stump.weight(),
                    tree: NodeRepr::from(root),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(serde_json::to_string(&reprs)?)
    }


    /// Rebuild an ensemble from its persisted form.
    ///
    /// # Errors
    /// As [`DecisionTree::from_json`], applied per stump; one bad stump
    /// fails the whole load.
    pub fn from_json(text: &str) -> Result<Self> {
        let reprs = serde_json::from_str::<Vec<TreeRepr>>(text)?;
        let stumps = reprs.into_iter()
            .map(|repr| {
                Ok(DecisionTree::from_parts(
                    Node::try_from(repr.tree)?,
                    repr.weight,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(AdaBoost::from_stumps(stumps))
    }
}
