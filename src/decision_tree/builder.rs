use crate::constants::DEFAULT_PRUNING;
use super::{
    id3::Id3,
    split_by::{InOrder, SplitBy},
};

/// A struct that builds `Id3`.
/// `Id3Builder` keeps parameters for constructing `Id3`.
///
/// # Example
///
/// ```no_run
/// use minirules::prelude::*;
///
/// // Split on the remaining column with the fewest distinct labels.
/// fn fewest_labels(rows: &[&Row], view: &StructureView<'_>) -> String {
///     let class = view.structure().class_position();
///     view.candidates()
///         .min_by_key(|column| {
///             let mut labels = rows.iter()
///                 .map(|row| (&row[column.position()], &row[class]))
///                 .collect::<Vec<_>>();
///             labels.sort();
///             labels.dedup();
///             labels.len()
///         })
///         .map(|column| column.name().to_string())
///         .unwrap_or_default()
/// }
///
/// let id3 = Id3Builder::new()
///     .split_by(fewest_labels)
///     .pruning(false)
///     .build();
/// ```
#[derive(Clone)]
pub struct Id3Builder<S> {
    split_by: S,
    pruning:  bool,
}

impl Id3Builder<InOrder> {
    /// Construct a new instance of [`Id3Builder`].
    /// The columns are split on in order of their positions
    /// unless another strategy is given by [`Id3Builder::split_by`].
    pub fn new() -> Self {
        Self { split_by: InOrder, pruning: DEFAULT_PRUNING, }
    }
}

impl Default for Id3Builder<InOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Id3Builder<S> {
    /// Set the strategy that chooses the column to split on.
    pub fn split_by<T>(self, split_by: T) -> Id3Builder<T>
        where T: SplitBy
    {
        Id3Builder { split_by, pruning: self.pruning, }
    }

    /// Turn post-pruning on or off.
    /// Default value is `true`.
    pub fn pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Build an `Id3`.
    /// This method consumes `self`.
    pub fn build(self) -> Id3<S> {
        Id3::new(self.split_by, self.pruning)
    }
}
