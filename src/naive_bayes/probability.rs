use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::constants::TOKEN_SEPARATOR;
use crate::error::Result;
use crate::sample::{Row, Structure};
use crate::statistics::{
    laplace_class_probability,
    laplace_conditional_probability,
};


/// Returns the `column=>value` token of a probability table.
#[inline]
pub fn token(column: &str, value: &str) -> String {
    format!("{column}{TOKEN_SEPARATOR}{value}")
}


/// Rounds the exact binary value of `x` to `digits` decimal digits.
/// Only an exact tie goes to the even digit,
/// so `0.0625` becomes `0.062` while `0.125 * 0.02` becomes `0.003`.
#[inline]
pub(crate) fn round_to(x: f64, digits: usize) -> f64 {
    format!("{x:.digits$}").parse().unwrap_or(x)
}


/// Laplace-corrected likelihoods `P(column = value | class)`,
/// keyed by class value, then by `column=>value` token,
/// together with the Laplace-corrected priors `P(class)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    table:  HashMap<String, HashMap<String, f64>>,
    priors: HashMap<String, f64>,
}


impl ProbabilityTable {
    /// Estimate the likelihood of every value of every categorical column
    /// given every class value.
    /// Numeric columns are skipped.
    pub fn build(structure: &Structure, data: &[Row]) -> Result<Self> {
        structure.check(data)?;

        let n_classes = structure.class_values().len();
        let priors = structure.class_values()
            .iter()
            .map(|class_value| {
                let p = laplace_class_probability(
                    data.iter(), structure, class_value, n_classes
                );
                (class_value.clone(), p)
            })
            .collect::<HashMap<_, _>>();

        let mut table = HashMap::<String, HashMap<String, f64>>::new();
        for column in structure.categorical_features() {
            let domain = column.domain();
            for value in domain.values() {
                for class_value in structure.class_values() {
                    let p = laplace_conditional_probability(
                        data.iter(),
                        structure,
                        column.position(),
                        value,
                        class_value,
                        domain.len(),
                    );
                    table.entry(class_value.clone())
                        .or_default()
                        .insert(token(column.name(), value), p);
                }
            }
        }

        Ok(Self { table, priors, })
    }


    /// Returns `P(token | class_value)`, if it has been estimated.
    #[inline]
    pub fn get(&self, class_value: &str, token: &str) -> Option<f64> {
        self.table.get(class_value)
            .and_then(|row| row.get(token))
            .copied()
    }


    /// Returns `P(class_value)`, if it has been estimated.
    #[inline]
    pub fn prior(&self, class_value: &str) -> Option<f64> {
        self.priors.get(class_value).copied()
    }


    /// Returns the number of `(class, token)` entries.
    pub fn len(&self) -> usize {
        self.table.values().map(HashMap::len).sum()
    }


    /// Returns `true` if no likelihood has been estimated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /// Returns `P(combination | class_value)`,
    /// the product of the likelihoods of its tokens.
    /// The running product is rounded to `digits` decimal digits
    /// after each multiplication.
    /// A token missing from the table contributes nothing.
    pub fn likelihood<S>(
        &self,
        combination: &[S],
        class_value: &str,
        digits:      usize,
    ) -> f64
        where S: AsRef<str>
    {
        combination.iter()
            .filter_map(|token| self.get(class_value, token.as_ref()))
            .fold(1f64, |product, p| round_to(product * p, digits))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Column;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn structure() -> Structure {
        Structure::new(vec![
            Column::categorical("A", 0, ["young", "old"]),
            Column::numeric("Age", 1),
            Column::categorical("B", 2, ["low", "high"]),
            Column::categorical("class", 3, ["no", "yes"]),
        ]).unwrap()
    }

    fn data() -> Vec<Row> {
        [
            ["young", "13", "low",  "no"],
            ["young", "15", "high", "no"],
            ["old",   "70", "low",  "yes"],
        ].iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_round_to() {
        assert_eq!(0.062, round_to(0.0625, 3));
        assert_eq!(0.375, round_to(0.375, 3));
        assert_eq!(0.333, round_to(1f64 / 3f64, 3));
        assert_eq!(0.667, round_to(2f64 / 3f64, 3));
    }

    #[test]
    fn test_round_to_decimal_value() {
        // The scaled products land on x.5 in binary,
        // but their exact values sit above the tie.
        assert_eq!(0.003, round_to(0.125 * 0.02, 3));
        assert_eq!(0.003, round_to(0.25 * 0.01, 3));
        assert_eq!(0.062, round_to(0.0625, 3));
        assert_eq!(0.0625, round_to(0.0625, 400));
    }

    #[test]
    fn test_priors() {
        let table = ProbabilityTable::build(&structure(), &data()).unwrap();
        let p = table.prior("no").unwrap();
        assert!((0.6 - p).abs() < TEST_TOLERANCE, "expected 0.6, got {p}.");
        let p = table.prior("yes").unwrap();
        assert!((0.4 - p).abs() < TEST_TOLERANCE, "expected 0.4, got {p}.");
        assert!(table.prior("maybe").is_none());
    }

    #[test]
    fn test_short_row() {
        let data = vec![vec!["young".to_string(), "no".to_string()]];
        let result = ProbabilityTable::build(&structure(), &data);
        assert!(result.is_err());
    }

    #[test]
    fn test_table_entries() {
        let table = ProbabilityTable::build(&structure(), &data()).unwrap();
        // 2 categorical columns x 2 values x 2 classes.
        assert_eq!(8, table.len());

        let p = table.get("no", "A=>young").unwrap();
        assert!((0.75 - p).abs() < TEST_TOLERANCE, "expected 0.75, got {p}.");

        let p = table.get("yes", "B=>high").unwrap();
        let expected = 1f64 / 3f64;
        assert!(
            (expected - p).abs() < TEST_TOLERANCE,
            "expected {expected}, got {p}.",
        );
    }

    #[test]
    fn test_numeric_column_is_skipped() {
        let table = ProbabilityTable::build(&structure(), &data()).unwrap();
        assert!(table.get("no", "Age=>13").is_none());
        assert!(table.get("no", "Age=>Numeric").is_none());
    }

    #[test]
    fn test_likelihood_rounds_each_step() {
        let table = ProbabilityTable::build(&structure(), &data()).unwrap();
        let combination = [token("A", "old"), token("B", "low")];

        // round(round(2/3) * 2/3) = round(0.667 * 0.6667) = 0.445
        let p = table.likelihood(&combination, "yes", 3);
        assert!((0.445 - p).abs() < TEST_TOLERANCE, "expected 0.445, got {p}.");

        // round(0.25 * 0.5) = 0.125
        let p = table.likelihood(&combination, "no", 3);
        assert!((0.125 - p).abs() < TEST_TOLERANCE, "expected 0.125, got {p}.");
    }
}
