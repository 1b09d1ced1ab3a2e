//! Decision-tree induction and prediction over binary attributes.

mod criterion;
mod decision_tree;
mod node;

pub use criterion::binary_entropy;
pub use decision_tree::DecisionTree;
pub use node::{BranchNode, LeafNode, Node};
