//! Class counts and Laplace-corrected estimates over a set of rows.
//!
//! Every function takes any iterator over `&Row`,
//! so the callers can pass a full dataset (`data.iter()`)
//! or a filtered slice of references (`rows.iter().copied()`).
//! The rows are expected to have passed [`Structure::check`].
use crate::sample::{Row, Structure};


/// Counts the class values of `rows`.
/// The class domain comes first, in its own order,
/// followed by the unseen values in order of first appearance.
fn class_counts<'a, I>(rows: I, structure: &'a Structure)
    -> Vec<(&'a str, usize)>
    where I: IntoIterator<Item = &'a Row>
{
    let mut counts = structure.class_values()
        .iter()
        .map(|value| (value.as_str(), 0_usize))
        .collect::<Vec<_>>();

    let position = structure.class_position();
    for row in rows {
        let label = row[position].as_str();
        match counts.iter_mut().find(|(value, _)| *value == label) {
            Some((_, count)) => { *count += 1; },
            None => { counts.push((label, 1)); },
        }
    }
    counts
}


/// Returns the most frequent `(class, count)` pair.
/// The first pair wins a tie.
fn majority<'a, I>(rows: I, structure: &'a Structure) -> (&'a str, usize)
    where I: IntoIterator<Item = &'a Row>
{
    let mut best: Option<(&'a str, usize)> = None;
    for (value, count) in class_counts(rows, structure) {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }
    best.expect("A structure always has at least one class value")
}


/// Returns the number of rows labeled with the majority class.
/// Returns `0` for an empty input.
pub fn count_majority_rows<'a, I>(rows: I, structure: &'a Structure) -> usize
    where I: IntoIterator<Item = &'a Row>
{
    majority(rows, structure).1
}


/// Returns `true` if `rows` is empty or all rows share one class.
pub fn all_same_class<'a, I>(rows: I, structure: &Structure) -> bool
    where I: IntoIterator<Item = &'a Row>
{
    let position = structure.class_position();
    let mut rows = rows.into_iter();
    match rows.next() {
        None => true,
        Some(first) => {
            let label = &first[position];
            rows.all(|row| row[position] == *label)
        },
    }
}


/// Returns the most frequent class of `rows`.
///
/// Ties go to the value listed first in the class domain.
/// For an empty input this is the first class value.
pub fn majority_class<'a, I>(rows: I, structure: &'a Structure) -> String
    where I: IntoIterator<Item = &'a Row>
{
    majority(rows, structure).0.to_string()
}


/// Laplace-corrected prior of `class_value`:
/// `(count(class_value) + 1) / (|rows| + n_classes)`.
pub fn laplace_class_probability<'a, I>(
    rows:        I,
    structure:   &Structure,
    class_value: &str,
    n_classes:   usize,
) -> f64
    where I: IntoIterator<Item = &'a Row>
{
    let position = structure.class_position();
    let (n_rows, n_match) = rows.into_iter()
        .fold((0_usize, 0_usize), |(n_rows, n_match), row| {
            let hit = (row[position] == class_value) as usize;
            (n_rows + 1, n_match + hit)
        });

    (n_match + 1) as f64 / (n_rows + n_classes) as f64
}


/// Laplace-corrected likelihood of `value` in column `position`
/// given `class_value`:
/// `(count(col == value, class == class_value) + 1)
///  / (count(class == class_value) + domain_size)`.
pub fn laplace_conditional_probability<'a, I>(
    rows:        I,
    structure:   &Structure,
    position:    usize,
    value:       &str,
    class_value: &str,
    domain_size: usize,
) -> f64
    where I: IntoIterator<Item = &'a Row>
{
    let class_position = structure.class_position();
    let (n_class, n_joint) = rows.into_iter()
        .filter(|row| row[class_position] == class_value)
        .fold((0_usize, 0_usize), |(n_class, n_joint), row| {
            let hit = (row[position] == value) as usize;
            (n_class + 1, n_joint + hit)
        });

    (n_joint + 1) as f64 / (n_class + domain_size) as f64
}
