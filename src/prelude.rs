//! Exports the rule generators, the data model and the evaluation helpers.
//! 
pub use crate::sample::{
    Column,
    Domain,
    Row,
    Structure,
    StructureView,
};


pub use crate::decision_tree::{
    // ID3 ----------------------------------
    Id3,
    Id3Builder,
    DecisionTree,
    Node,

    // Splitting strategies
    SplitBy,
    InOrder,
};


pub use crate::naive_bayes::{
    NaiveBayes,
    ProbabilityTable,
};


pub use crate::learner::{
    // Learner trait
    Learner,

    ClassifierKind,
    build_rules,
};


pub use crate::rule::{
    Rule,
    parse_rules,
};


pub use crate::evaluation::{
    classify,
    classify_all,
    accuracy,
};


pub use crate::report::Report;


pub use crate::error::InductionError;
