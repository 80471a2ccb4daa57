#![warn(missing_docs)]

//! 
//! A crate that induces classification rules from categorical data.
//! 
//! This crate provides two rule generators.
//! 
//! - `Id3`
//!     Grows a decision tree by the ID3 recursion,
//!     post-prunes it with a continuity-corrected error estimate,
//!     and reads one rule per leaf.
//!     The column to split on is chosen by a pluggable `SplitBy` strategy.
//! 
//! 
//! - `NaiveBayes`
//!     Estimates Laplace-corrected likelihoods and priors,
//!     enumerates every combination of categorical values,
//!     and emits one rule per combination.
//! 
//! Both produce rules of the form
//! `A == young , B == low => class == no`,
//! which `parse_rules` reads back
//! and `classify` / `accuracy` apply to unseen rows.

pub mod constants;
pub mod error;
pub mod sample;
pub mod statistics;
pub mod decision_tree;
pub mod naive_bayes;
pub mod rule;
pub mod evaluation;
pub mod learner;
pub mod report;

pub mod prelude;


pub use error::{InductionError, Result};
pub use sample::{Column, Domain, Row, Structure, StructureView};

pub use decision_tree::{
    DecisionTree,
    Id3,
    Id3Builder,
    InOrder,
    SplitBy,
};
pub use naive_bayes::NaiveBayes;

pub use learner::{build_rules, ClassifierKind, Learner};
pub use rule::{parse_rules, Rule};
pub use evaluation::{accuracy, classify, classify_all};
pub use report::{Outcome, Report};
