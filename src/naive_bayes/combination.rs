use crate::sample::Structure;
use super::probability::token;


/// A sequence of `column=>value` tokens, one per categorical column.
pub type Combination = Vec<String>;


/// Enumerates every combination of values of the categorical columns.
///
/// Columns follow the order of the structure, `class` and numeric columns
/// excluded. Each new column is crossed with the combinations so far,
/// its own values forming the outer loop,
/// so the earliest column varies fastest:
///
/// ```txt
/// A=>young, B=>low
/// A=>old,   B=>low
/// A=>young, B=>high
/// A=>old,   B=>high
/// ```
///
/// Returns nothing if there is no categorical column.
pub fn combinations(structure: &Structure) -> Vec<Combination> {
    let mut combinations: Vec<Combination> = Vec::new();

    for (k, column) in structure.categorical_features().enumerate() {
        let tokens = column.domain()
            .values()
            .iter()
            .map(|value| token(column.name(), value))
            .collect::<Vec<_>>();

        combinations = if k == 0 {
            tokens.into_iter()
                .map(|token| vec![token])
                .collect()
        } else {
            extend(&combinations[..], &tokens[..])
        };
    }
    combinations
}


/// Appends each token to a copy of every combination.
fn extend(combinations: &[Combination], tokens: &[String])
    -> Vec<Combination>
{
    let mut extended = Vec::with_capacity(combinations.len() * tokens.len());
    for token in tokens {
        for combination in combinations {
            let mut combination = combination.clone();
            combination.push(token.clone());
            extended.push(combination);
        }
    }
    extended
}
