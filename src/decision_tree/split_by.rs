//! The splitting strategy seam of the ID3 algorithm.
use std::fmt;

use crate::sample::{Column, Row, StructureView};


/// Chooses the column a set of rows is split on.
///
/// The builder only calls `best_split` while `view` still holds
/// a column other than `class`, and the answer must be one of
/// `view.candidates()`.
/// Any closure `Fn(&[&Row], &StructureView<'_>) -> String`
/// is a valid strategy.
pub trait SplitBy {
    /// Returns the name of the column to split `rows` on.
    fn best_split(&self, rows: &[&Row], view: &StructureView<'_>) -> String;
}


impl<F> SplitBy for F
    where F: Fn(&[&Row], &StructureView<'_>) -> String
{
    #[inline]
    fn best_split(&self, rows: &[&Row], view: &StructureView<'_>) -> String {
        self(rows, view)
    }
}


/// Splits on the remaining column with the smallest position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InOrder;


impl SplitBy for InOrder {
    fn best_split(&self, _rows: &[&Row], view: &StructureView<'_>) -> String {
        view.candidates()
            .min_by_key(|column| column.position())
            .map(Column::name)
            .unwrap_or_default()
            .to_string()
    }
}


impl fmt::Display for InOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "In order")
    }
}
