//! Post-pruning of an ID3 forest.
//!
//! A branch is collapsed into a leaf when the estimated error of the leaf,
//! `(N - Nc + 0.5) / N`, does not exceed the estimated error of its
//! children, `Σ (N_i - Nc_i + 0.5) / Σ N_i`.
//!
//! Children are visited left to right, depth first.
//! A branch whose child is a leaf is left as it is,
//! and its remaining children are not visited.
use crate::{
    constants::CONTINUITY_CORRECTION,
    error::{InductionError, Result},
    sample::{filter_rows, Row, Structure},
    statistics::majority_class,
};
use super::node::{Branch, Node};


/// What a visit of a node reports to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Leaf,
    Branch,
}


/// Prune every tree of `forest` in place.
///
/// Fails with [`InductionError::InvalidPruneState`]
/// if a branch to decide on has no observation,
/// or if none of its children has one,
/// and with [`InductionError::InvalidStructure`]
/// if a row does not have one cell per column.
pub fn prune(data: &[Row], structure: &Structure, forest: &mut [Node])
    -> Result<()>
{
    structure.check(data)?;
    let rows = data.iter().collect::<Vec<_>>();
    for node in forest.iter_mut() {
        prune_node(&rows[..], structure, node)?;
    }
    Ok(())
}


fn prune_node(rows: &[&Row], structure: &Structure, node: &mut Node)
    -> Result<Visit>
{
    let branch = match node {
        Node::Leaf { .. } => { return Ok(Visit::Leaf); },
        Node::Branch(branch) => branch,
    };

    let position = structure.position(&branch.feature)?;
    let subset = filter_rows(rows, position, &branch.value);

    let mut numerator = 0f64;
    let mut denominator = 0_usize;
    for child in branch.children.iter_mut() {
        if prune_node(&subset[..], structure, child)? == Visit::Leaf {
            return Ok(Visit::Branch);
        }

        let (n_examples, n_majority) = child.counts();
        numerator += n_examples as f64 - n_majority as f64
            + CONTINUITY_CORRECTION;
        denominator += n_examples;
    }

    if branch.n_examples == 0 {
        return Err(invalid_state(branch, "the branch has no observation"));
    }
    if denominator == 0 {
        return Err(invalid_state(branch, "its children have no observation"));
    }

    let leaf_error = (
        branch.n_examples as f64 - branch.n_majority as f64
        + CONTINUITY_CORRECTION
    ) / branch.n_examples as f64;
    let subtree_error = numerator / denominator as f64;

    if leaf_error <= subtree_error {
        let label = majority_class(subset.iter().copied(), structure);
        branch.children = vec![Node::leaf(label)];
    }
    Ok(Visit::Branch)
}


fn invalid_state(branch: &Branch, reason: &str) -> InductionError {
    InductionError::InvalidPruneState {
        feature: branch.feature.clone(),
        value:   branch.value.clone(),
        reason:  reason.to_string(),
    }
}
