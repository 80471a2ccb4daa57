//! The ID3 decision tree: growing, post-pruning and rule extraction.
/// Defines the ID3 algorithm.
pub mod id3;
/// Defines the forest produced by `Id3`.
pub mod classifier;
/// Defines the nodes of a forest.
pub mod node;
/// Defines the splitting strategies.
pub mod split_by;

mod builder;
mod extract;
mod prune;


pub use builder::Id3Builder;
pub use classifier::DecisionTree;
pub use extract::extract_rules;
pub use id3::Id3;
pub use node::{Branch, Node};
pub use prune::prune;
pub use split_by::{InOrder, SplitBy};
