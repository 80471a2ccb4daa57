//! Parsed form of the rules emitted by the learners.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    CLASS_COLUMN,
    CLAUSE_SEPARATOR,
    IMPLICATION,
    TREE_CONJUNCTION,
};
use crate::error::{InductionError, Result};


const IMPLIES: &str = "=>";
const AND: char = ',';
const EQUALS: &str = "==";


/// A rule `a == x , b == y => class == c`.
/// A rule without conditions matches every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    conditions: Vec<(String, String)>,
    label:      String,
}


impl Rule {
    /// Construct a new rule.
    pub fn new<S: Into<String>>(
        conditions: Vec<(String, String)>,
        label:      S,
    ) -> Self
    {
        Self { conditions, label: label.into(), }
    }


    /// Returns the `(column, value)` pairs of the antecedent.
    #[inline]
    pub fn conditions(&self) -> &[(String, String)] {
        &self.conditions[..]
    }


    /// Returns the predicted class.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}


impl FromStr for Rule {
    type Err = InductionError;

    fn from_str(rule: &str) -> Result<Self> {
        let malformed = |reason: &str| InductionError::MalformedRule {
            rule:   rule.to_string(),
            reason: reason.to_string(),
        };

        let (antecedent, consequent) = match rule.split(IMPLIES)
            .collect::<Vec<_>>()[..]
        {
            [antecedent, consequent] => (antecedent, consequent),
            _ => {
                return Err(malformed("expected exactly one `=>`"));
            },
        };

        let conditions = if antecedent.trim().is_empty() {
            Vec::new()
        } else {
            antecedent.split(AND)
                .map(|clause| {
                    split_clause(clause)
                        .ok_or_else(|| malformed("a condition is not `a == x`"))
                })
                .collect::<Result<Vec<_>>>()?
        };

        let (_, label) = split_clause(consequent)
            .ok_or_else(|| malformed("the consequent is not `class == c`"))?;

        Ok(Self { conditions, label, })
    }
}


impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let antecedent = self.conditions.iter()
            .map(|(column, value)| format!("{column}{CLAUSE_SEPARATOR}{value}"))
            .collect::<Vec<_>>()
            .join(TREE_CONJUNCTION);
        write!(
            f,
            "{antecedent}{IMPLICATION}{CLASS_COLUMN}{CLAUSE_SEPARATOR}{}",
            self.label,
        )
    }
}


/// Splits `a == x` into `("a", "x")`.
fn split_clause(clause: &str) -> Option<(String, String)> {
    match clause.split(EQUALS).collect::<Vec<_>>()[..] {
        [column, value] => {
            let column = column.trim();
            let value = value.trim();
            if column.is_empty() || value.is_empty() {
                None
            } else {
                Some((column.to_string(), value.to_string()))
            }
        },
        _ => None,
    }
}


/// Parse every rule of `rules`, in order.
pub fn parse_rules<S>(rules: &[S]) -> Result<Vec<Rule>>
    where S: AsRef<str>
{
    rules.iter()
        .map(|rule| rule.as_ref().parse())
        .collect()
}
