//! The categorical Naive Bayes rule generator.
/// Defines the Naive Bayes rule generator.
pub mod nbayes;
/// Defines the Laplace-corrected probability table.
pub mod probability;
/// Enumerates the combinations of categorical values.
pub mod combination;


pub use nbayes::NaiveBayes;
pub use probability::{token, ProbabilityTable};
pub use combination::{combinations, Combination};
