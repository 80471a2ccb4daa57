//! Applies parsed rules to rows and scores the predictions.
use crate::error::Result;
use crate::rule::Rule;
use crate::sample::{Row, Structure};


/// Returns the class of the first rule whose conditions all hold on `row`,
/// or `None` if no rule matches.
///
/// Fails with
/// [`InductionError::UnknownColumn`](crate::InductionError::UnknownColumn)
/// if a rule tested before the match names a column
/// the structure does not have,
/// and with
/// [`InductionError::InvalidStructure`](crate::InductionError::InvalidStructure)
/// if `row` does not have one cell per column.
pub fn classify<'a>(row: &Row, structure: &Structure, rules: &'a [Rule])
    -> Result<Option<&'a str>>
{
    structure.check(std::slice::from_ref(row))?;

    for rule in rules {
        let mut matched = true;
        for (column, value) in rule.conditions() {
            let position = structure.position(column)?;
            if row[position] != *value {
                matched = false;
                break;
            }
        }

        if matched {
            return Ok(Some(rule.label()));
        }
    }
    Ok(None)
}


/// Classify every row of `rows`.
///
/// Each row is copied with its class cell replaced by the prediction.
/// A row no rule matches becomes `None`.
pub fn classify_all(rows: &[Row], structure: &Structure, rules: &[Rule])
    -> Result<Vec<Option<Row>>>
{
    structure.check(rows)?;
    let class = structure.class_position();

    rows.iter()
        .map(|row| -> Result<Option<Row>> {
            let prediction = classify(row, structure, rules)?
                .map(|label| {
                    let mut predicted = row.clone();
                    predicted[class] = label.to_string();
                    predicted
                });
            Ok(prediction)
        })
        .collect()
}


/// Returns the percentage of predicted rows equal to their true rows.
///
/// The rows are compared pairwise, over the length of `predicted`.
/// A missing prediction is a miss.
/// An empty `predicted` scores `100`.
pub fn accuracy(predicted: &[Option<Row>], truth: &[Row]) -> f64 {
    if predicted.is_empty() {
        return 100f64;
    }

    let n_correct = predicted.iter()
        .zip(truth)
        .filter(|&(p, t)| p.as_ref() == Some(t))
        .count();

    100f64 * n_correct as f64 / predicted.len() as f64
}
