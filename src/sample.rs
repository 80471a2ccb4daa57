//! Rows of categorical data and the structure describing their columns.

pub mod structure;

pub use structure::{
    Column,
    Domain,
    Structure,
    StructureView,
};

/// A single example. The class value sits at the position
/// given by the structure's `class` column.
pub type Row = Vec<String>;

/// Returns the rows whose cell at `position` equals `value`.
#[inline]
pub(crate) fn filter_rows<'a>(
    rows:     &[&'a Row],
    position: usize,
    value:    &str,
) -> Vec<&'a Row>
{
    rows.iter()
        .copied()
        .filter(|row| row[position] == value)
        .collect()
}
