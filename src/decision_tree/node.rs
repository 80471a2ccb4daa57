//! A node struct used in the ID3 algorithm.
use serde::{Serialize, Deserialize};
use std::fmt;

/// A node of an ID3 tree.
///
/// The children of a branch form a forest with one branch per value
/// of the next splitting column, or a single leaf.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Rows with `feature == value`.
    Branch(Branch),
    /// A predicted class.
    Leaf {
        /// The class value.
        label: String,
    },
}


/// The `feature == value` part of a tree.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub(crate) feature:    String,
    pub(crate) value:      String,
    /// Number of rows reaching this branch (`N`).
    pub(crate) n_examples: usize,
    /// Number of those rows labeled with their majority class (`Nc`).
    pub(crate) n_majority: usize,
    pub(crate) children:   Vec<Node>,
}


impl Branch {
    /// Column tested by this branch.
    #[inline]
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// Value the column must take.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of training rows that reached this branch.
    #[inline]
    pub fn n_examples(&self) -> usize {
        self.n_examples
    }

    /// Number of those rows labeled with their majority class.
    #[inline]
    pub fn n_majority(&self) -> usize {
        self.n_majority
    }

    /// The subtrees of this branch.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children[..]
    }
}


impl Node {
    /// Construct a branch.
    pub fn branch<S, T>(
        feature:    S,
        value:      T,
        n_examples: usize,
        n_majority: usize,
        children:   Vec<Node>,
    ) -> Self
        where S: Into<String>,
              T: Into<String>,
    {
        Self::Branch(Branch {
            feature: feature.into(),
            value: value.into(),
            n_examples,
            n_majority,
            children,
        })
    }

    /// Construct a leaf that predicts `label`.
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf { label: label.into(), }
    }

    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns `(N, Nc)`. A leaf carries no count.
    #[inline]
    pub(crate) fn counts(&self) -> (usize, usize) {
        match self {
            Self::Branch(branch) => (branch.n_examples, branch.n_majority),
            Self::Leaf { .. } => (0, 0),
        }
    }

    /// Returns the number of leaves below this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch(branch) => {
                branch.children.iter().map(Node::n_leaves).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch(branch) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{feat} == {value}\\n\
                     N = {n}, Nc = {nc}\" ];\n",
                    feat  = branch.feature,
                    value = branch.value,
                    n     = branch.n_examples,
                    nc    = branch.n_majority,
                )];

                let mut next_id = id + 1;
                for child in branch.children.iter() {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!("\tnode_{id} -- node_{child_id};\n"));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch(branch) => fmt::Debug::fmt(branch, f),
            Self::Leaf { label } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .finish()
            },
        }
    }
}


impl fmt::Debug for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Branch")
            .field("feature", &self.feature)
            .field("value", &self.value)
            .field("N", &self.n_examples)
            .field("Nc", &self.n_majority)
            .field("children", &self.children)
            .finish()
    }
}
