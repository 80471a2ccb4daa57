//! Constants shared by the rule generators.
/// The name of the target column.
pub const CLASS_COLUMN: &str = "class";
/// The domain marker for a column that is not a categorical axis.
pub const NUMERIC_MARKER: &str = "Numeric";

/// Separator between a column name and its value
/// in a probability-table token.
pub const TOKEN_SEPARATOR: &str = "=>";
/// Separator between a column name and its value in a rule clause.
pub const CLAUSE_SEPARATOR: &str = " == ";
/// Separator between clauses in a rule extracted from a tree.
pub const TREE_CONJUNCTION: &str = " , ";
/// Separator between clauses in a Naive Bayes rule.
pub const BAYES_CONJUNCTION: &str = ", ";
/// Separator between the antecedent and the consequent of a rule.
pub const IMPLICATION: &str = " => ";

/// Continuity correction added to the error counts while pruning.
pub const CONTINUITY_CORRECTION: f64 = 0.5;

/// Decimal digits kept while multiplying likelihoods.
pub const DEFAULT_PRECISION: usize = 3;
/// Pruning is applied by default.
pub const DEFAULT_PRUNING: bool = true;
