use crate::{
    constants::{
        BAYES_CONJUNCTION,
        CLASS_COLUMN,
        CLAUSE_SEPARATOR,
        DEFAULT_PRECISION,
        IMPLICATION,
        TOKEN_SEPARATOR,
    },
    error::{InductionError, Result},
    learner::Learner,
    sample::{Row, Structure},
};

use super::{
    combination::{combinations, Combination},
    probability::ProbabilityTable,
};


/// The categorical Naive Bayes classifier.
///
/// [`NaiveBayes`] estimates Laplace-corrected likelihoods
/// `P(column = value | class)` and priors `P(class)`,
/// enumerates every combination of values of the categorical columns,
/// and emits one rule per combination,
/// predicting the class with the maximal posterior.
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
/// let rules = NaiveBayes::new()
///     .produce(&data, &structure)
///     .unwrap();
/// assert_eq!(2, rules.len());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaiveBayes {
    precision: usize,
}


impl NaiveBayes {
    /// Initializes the `NaiveBayes` instance.
    pub fn new() -> Self {
        Self { precision: DEFAULT_PRECISION, }
    }


    /// Set the number of decimal digits kept
    /// while multiplying likelihoods.
    /// Default value is `3`.
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = digits;
        self
    }


    /// Returns `P(combination | class_value) * P(class_value)`.
    /// A class missing from `table` has no posterior mass.
    pub fn posterior<S>(
        &self,
        combination: &[S],
        table:       &ProbabilityTable,
        class_value: &str,
    ) -> f64
        where S: AsRef<str>
    {
        let prior = table.prior(class_value).unwrap_or(0f64);
        let likelihood = table.likelihood(
            combination, class_value, self.precision
        );
        likelihood * prior
    }


    /// Returns the class with the maximal posterior.
    /// Among tied classes, the last one in the class domain wins.
    pub fn class_of<S>(
        &self,
        combination: &[S],
        table:       &ProbabilityTable,
        structure:   &Structure,
    ) -> Result<String>
        where S: AsRef<str>
    {
        let mut best = 0f64;
        let mut label = None;
        for class_value in structure.class_values() {
            let p = self.posterior(combination, table, class_value);
            if p >= best {
                best = p;
                label = Some(class_value);
            }
        }

        label.cloned()
            .ok_or_else(|| InductionError::InvalidStructure(format!(
                "no value of `{CLASS_COLUMN}` has a posterior"
            )))
    }


    /// Returns the rule `A == a, B == b => class == c`
    /// for a combination and its class.
    fn rule(combination: &Combination, label: &str) -> String {
        let antecedent = combination.iter()
            .map(|token| token.replace(TOKEN_SEPARATOR, CLAUSE_SEPARATOR))
            .collect::<Vec<_>>()
            .join(BAYES_CONJUNCTION);

        format!(
            "{antecedent}{IMPLICATION}{CLASS_COLUMN}{CLAUSE_SEPARATOR}{label}"
        )
    }
}


impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}


impl Learner for NaiveBayes {
    fn name(&self) -> &str {
        "Naive Bayes"
    }

    fn info(&self) -> Option<Vec<(&str, String)>> {
        Some(vec![("Precision (digits)", format!("{}", self.precision))])
    }

    fn produce(&self, data: &[Row], structure: &Structure)
        -> Result<Vec<String>>
    {
        let table = ProbabilityTable::build(structure, data)?;

        combinations(structure)
            .into_iter()
            .map(|combination| -> Result<String> {
                let label = self.class_of(&combination[..], &table, structure)?;
                Ok(Self::rule(&combination, &label))
            })
            .collect()
    }
}
