//! Defines the forest produced by `Id3`.
use serde::{Serialize, Deserialize};

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::error::Result;
use crate::sample::{Row, Structure};
use super::{
    extract::extract_rules,
    node::Node,
    prune::prune,
};


/// An ID3 forest.
/// This struct is just a wrapper of `Vec<Node>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    forest: Vec<Node>,
}


impl From<Vec<Node>> for DecisionTree {
    #[inline]
    fn from(forest: Vec<Node>) -> Self {
        Self { forest }
    }
}


impl DecisionTree {
    /// Returns the top-level nodes.
    #[inline]
    pub fn forest(&self) -> &[Node] {
        &self.forest[..]
    }

    /// Returns the number of leaves, i.e., the number of rules.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.forest.iter().map(Node::n_leaves).sum()
    }

    /// Post-prune the forest in place.
    #[inline]
    pub fn prune(&mut self, data: &[Row], structure: &Structure)
        -> Result<()>
    {
        prune(data, structure, &mut self.forest[..])
    }

    /// Returns one rule per leaf.
    #[inline]
    pub fn rules(&self) -> Vec<String> {
        extract_rules(&self.forest[..])
    }

    /// Write the current forest to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;
        f.write_all(b"\tnode_0 [ label = \"root\" ];\n")?;

        let mut id = 1;
        for node in self.forest.iter() {
            let (info, next_id) = node.to_dot_info(id);
            for row in info {
                f.write_all(row.as_bytes())?;
            }
            f.write_all(format!("\tnode_0 -- node_{id};\n").as_bytes())?;
            id = next_id;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}
