//! The tree structure shared by full decision trees and stumps.

use crate::sample::{Attributes, Label};


/// A node of a trained decision tree.
///
/// A node is a leaf exactly when it has no children; the attribute index
/// is only meaningful on branches. Nodes are built once by induction and
/// never change afterwards; each child is owned by its parent, so the
/// tree is a strict binary tree with no sharing and no cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An internal node splitting on one attribute.
    Branch(BranchNode),
    /// A terminal node carrying a class label.
    Leaf(LeafNode),
}


/// An internal node. Observations holding the attribute descend into
/// `has`, the rest into `lacks`.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchNode {
    attribute: usize,
    has: Box<Node>,
    lacks: Box<Node>,
}


/// A terminal node.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    label: Label,
}


impl Node {
    #[inline]
    pub(crate) fn branch(attribute: usize, has: Node, lacks: Node) -> Self {
        Node::Branch(BranchNode {
            attribute,
            has: Box::new(has),
            lacks: Box::new(lacks),
        })
    }


    #[inline]
    pub(crate) fn leaf(label: Label) -> Self {
        Node::Leaf(LeafNode { label })
    }


    /// Walk from this node to a leaf, following `attributes`.
    pub fn label_for(&self, attributes: &Attributes) -> Label {
        match self {
            Node::Branch(branch) => branch.child_for(attributes).label_for(attributes),
            Node::Leaf(leaf) => leaf.label(),
        }
    }


    /// `true` for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}


impl BranchNode {
    /// Index of the attribute this node splits on.
    pub fn attribute(&self) -> usize {
        self.attribute
    }


    /// Subtree for observations holding the attribute.
    pub fn has(&self) -> &Node {
        &self.has
    }


    /// Subtree for observations lacking the attribute.
    pub fn lacks(&self) -> &Node {
        &self.lacks
    }


    fn child_for(&self, attributes: &Attributes) -> &Node {
        if attributes.has(self.attribute) {
            &self.has
        } else {
            &self.lacks
        }
    }
}


impl LeafNode {
    /// The label this leaf predicts.
    pub fn label(&self) -> Label {
        self.label
    }
}
