use crate::{
    error::{InductionError, Result},
    learner::Learner,
    sample::{filter_rows, Row, Structure, StructureView},
    statistics::{all_same_class, count_majority_rows, majority_class},
};

use super::{
    classifier::DecisionTree,
    node::Node,
    split_by::SplitBy,
};

/// The ID3 algorithm.
/// Given a set of rows over categorical columns,
/// [`Id3`] grows a forest of `column == value` branches,
/// post-prunes it and reads one rule per leaf.
///
/// The column to split on is chosen by a [`SplitBy`] strategy.
/// Numeric columns are never split on.
///
/// [`Id3`] is constructed
/// by [`Id3Builder`](crate::decision_tree::Id3Builder).
///
/// # Example
/// ```no_run
/// use minirules::prelude::*;
///
/// let structure = Structure::new(vec![
///     Column::categorical("A", 0, ["young", "old"]),
///     Column::categorical("class", 1, ["no", "yes"]),
/// ]).unwrap();
/// let data = vec![
///     vec!["young".to_string(), "no".to_string()],
///     vec!["old".to_string(), "yes".to_string()],
/// ];
///
/// let id3 = Id3Builder::new()
///     .split_by(InOrder)
///     .pruning(true)
///     .build();
/// let rules = id3.produce(&data, &structure).unwrap();
/// for rule in rules {
///     println!("{rule}");
/// }
/// ```
pub struct Id3<S> {
    split_by: S,
    pruning:  bool,
}

impl<S> Id3<S> {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(split_by: S, pruning: bool) -> Self {
        Self { split_by, pruning, }
    }

    /// Returns `true` if the grown tree is post-pruned.
    #[inline]
    pub fn pruning(&self) -> bool {
        self.pruning
    }
}

impl<S> Id3<S>
    where S: SplitBy
{
    /// Grow the unpruned forest for `data`.
    /// An empty `data` yields a single leaf predicting `majority_hint`.
    pub fn grow(
        &self,
        data:          &[Row],
        structure:     &Structure,
        majority_hint: &str,
    ) -> Result<Vec<Node>>
    {
        structure.check(data)?;
        let rows = data.iter().collect::<Vec<_>>();
        self.grow_forest(&rows[..], &structure.view(), majority_hint)
    }

    /// Grow the forest for `data` and prune it if requested.
    pub fn tree(&self, data: &[Row], structure: &Structure)
        -> Result<DecisionTree>
    {
        structure.check(data)?;
        let hint = majority_class(data.iter(), structure);
        let forest = self.grow(data, structure, &hint)?;

        let mut tree = DecisionTree::from(forest);
        if self.pruning {
            tree.prune(data, structure)?;
        }
        Ok(tree)
    }

    fn grow_forest(
        &self,
        rows:          &[&Row],
        view:          &StructureView<'_>,
        majority_hint: &str,
    ) -> Result<Vec<Node>>
    {
        let structure = view.structure();

        // No row reaches this point, so fall back to the parent's class.
        if rows.is_empty() {
            return Ok(vec![Node::leaf(majority_hint)]);
        }

        if view.only_class_left()
            || all_same_class(rows.iter().copied(), structure)
        {
            let label = majority_class(rows.iter().copied(), structure);
            return Ok(vec![Node::leaf(label)]);
        }

        let root = self.split_by.best_split(rows, view);
        let column = view.candidate(&root)
            .ok_or_else(|| InductionError::InvalidSplit(root.clone()))?;

        let majority_hint = majority_class(rows.iter().copied(), structure);
        let view = view.without(&root)?;

        column.domain()
            .values()
            .iter()
            .map(|value| -> Result<Node> {
                let subset = filter_rows(rows, column.position(), value);
                let n_examples = subset.len();
                let n_majority = count_majority_rows(
                    subset.iter().copied(), structure
                );
                let children = self.grow_forest(
                    &subset[..], &view, &majority_hint
                )?;

                Ok(Node::branch(
                    column.name(), value.as_str(),
                    n_examples, n_majority,
                    children,
                ))
            })
            .collect()
    }
}

impl<S> Learner for Id3<S>
    where S: SplitBy
{
    fn name(&self) -> &str {
        "ID3"
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        let pruning = if self.pruning { "on" } else { "off" };
        Some(vec![("Post-pruning", pruning.to_string())])
    }

    fn produce(&self, data: &[Row], structure: &Structure)
        -> Result<Vec<String>>
    {
        let tree = self.tree(data, structure)?;
        Ok(tree.rules())
    }
}
