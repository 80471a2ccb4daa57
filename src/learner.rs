//! The common interface of the rule generators.
use std::fmt;
use std::str::FromStr;

use crate::{
    decision_tree::{Id3Builder, SplitBy},
    error::{InductionError, Result},
    naive_bayes::NaiveBayes,
    sample::{Row, Structure},
};


/// A trait that defines the behavior of a rule generator.
/// Given a dataset and its structure,
/// a learner returns the rules it induced
/// in the form `a == x , b == y => class == c`.
pub trait Learner {
    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the settings of the learner.
    /// The default value is `None`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Induce the rules for `data`.
    fn produce(&self, data: &[Row], structure: &Structure)
        -> Result<Vec<String>>;
}


/// The rule generators known by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierKind {
    /// The ID3 decision tree, post-pruned.
    Id3,
    /// The categorical Naive Bayes classifier.
    NaiveBayes,
}


impl FromStr for ClassifierKind {
    type Err = InductionError;

    /// Accepts `"ID3"` and `"NAIVE BAYES"`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "ID3" => Ok(Self::Id3),
            "NAIVE BAYES" => Ok(Self::NaiveBayes),
            _ => Err(InductionError::UnknownClassifier(s.to_string())),
        }
    }
}


impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id3 => "ID3",
            Self::NaiveBayes => "Naive Bayes",
        };
        write!(f, "{name}")
    }
}


/// Induce rules with the generator named by `kind`.
///
/// `split_by` chooses the column to split on while growing an ID3 tree.
/// [`NaiveBayes`] ignores it.
pub fn build_rules<S>(
    kind:      ClassifierKind,
    data:      &[Row],
    structure: &Structure,
    split_by:  S,
) -> Result<Vec<String>>
    where S: SplitBy
{
    match kind {
        ClassifierKind::Id3 => {
            Id3Builder::new()
                .split_by(split_by)
                .build()
                .produce(data, structure)
        },
        ClassifierKind::NaiveBayes => {
            NaiveBayes::new().produce(data, structure)
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision_tree::InOrder;
    use crate::sample::Column;

    fn structure() -> Structure {
        Structure::new(vec![
            Column::categorical("A", 0, ["young", "old"]),
            Column::categorical("B", 1, ["low", "high"]),
            Column::categorical("class", 2, ["no", "yes"]),
        ]).unwrap()
    }

    fn data() -> Vec<Row> {
        [
            ["young", "low",  "no"],
            ["young", "high", "no"],
            ["old",   "low",  "yes"],
        ].iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(Ok(ClassifierKind::Id3), "ID3".parse::<ClassifierKind>());
        assert_eq!(Ok(ClassifierKind::Id3), "id3".parse::<ClassifierKind>());
        assert_eq!(Ok(ClassifierKind::NaiveBayes), "Naive Bayes".parse::<ClassifierKind>());
        assert_eq!(
            Err(InductionError::UnknownClassifier("C4.5".into())),
            "C4.5".parse::<ClassifierKind>(),
        );
    }

    #[test]
    fn test_build_rules_dispatch() {
        let s = structure();
        let data = data();

        let rules = build_rules(ClassifierKind::Id3, &data, &s, InOrder)
            .unwrap();
        let expected = vec![
            "A == young => class == no",
            "A == old => class == yes",
        ];
        assert_eq!(expected, rules);

        let rules = build_rules(ClassifierKind::NaiveBayes, &data, &s, InOrder)
            .unwrap();
        assert_eq!(4, rules.len());
    }

    #[test]
    fn test_names() {
        assert_eq!("ID3", Id3Builder::new().build().name());
        assert_eq!("Naive Bayes", NaiveBayes::new().name());
        assert_eq!("Naive Bayes", ClassifierKind::NaiveBayes.to_string());
    }
}
