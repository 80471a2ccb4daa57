use crate::constants::{
    CLASS_COLUMN,
    CLAUSE_SEPARATOR,
    IMPLICATION,
    TREE_CONJUNCTION,
};
use super::node::Node;


/// Reads one rule per leaf of `forest`, in pre-order:
/// `A == x , B == y => class == c`.
///
/// A leaf at the top of the forest has no condition
/// and yields ` => class == c`.
pub fn extract_rules(forest: &[Node]) -> Vec<String> {
    let mut rules = Vec::new();
    for node in forest {
        collect(node, "", &mut rules);
    }
    rules
}


fn collect(node: &Node, path: &str, rules: &mut Vec<String>) {
    match node {
        Node::Leaf { label } => {
            let antecedent = path.strip_suffix(TREE_CONJUNCTION)
                .unwrap_or(path);
            rules.push(format!(
                "{antecedent}{IMPLICATION}{CLASS_COLUMN}{CLAUSE_SEPARATOR}{label}"
            ));
        },
        Node::Branch(branch) => {
            let path = format!(
                "{path}{feature}{CLAUSE_SEPARATOR}{value}{TREE_CONJUNCTION}",
                feature = branch.feature,
                value   = branch.value,
            );
            for child in branch.children.iter() {
                collect(child, &path, rules);
            }
        },
    }
}
