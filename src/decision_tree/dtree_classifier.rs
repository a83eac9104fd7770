//! The classifier that a fitted decision tree produces.
use serde::{Deserialize, Serialize};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::classifier::Classifier;
use crate::errors::Error;
use crate::sample::{Category, Label};

use super::node::Node;

/// A trained decision tree, together with the feature layout of the
/// dataset it was fitted on.
///
/// The stored name list is the classifier's own copy, so queries keep
/// resolving correctly however long the training sample outlives it.
/// Serializable with `serde`, so a fitted tree can be stored and
/// reloaded instead of regrown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
    names: Vec<String>,
}

impl DecisionTreeClassifier {
    pub(crate) fn new(root: Node, names: Vec<String>) -> Self {
        Self { root, names }
    }

    /// The root of the trained tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The feature names, in the column order of the training data.
    pub fn feature_names(&self) -> &[String] {
        &self.names[..]
    }

    /// Number of leaves in the tree.
    /// A plot of the tree is this many terminal boxes wide.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }

    /// Number of branch levels along the deepest path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Writes the tree to `path` in the Graphviz DOT format.
    ///
    /// # Errors
    /// Returns an I/O error when creating or writing the file fails.
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>,
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let (info, _) = self.root.to_dot_info(0);
        for line in info {
            f.write_all(line.as_bytes())?;
        }

        f.write_all(b"}")?;
        Ok(())
    }
}

impl Classifier<[Category]> for DecisionTreeClassifier {
    /// Descends the tree from the root, at each branch reading the
    /// query's value for the tested feature and following that edge.
    ///
    /// # Errors
    /// [`Error::UnseenValue`] when a branch has no edge for the
    /// query's value.
    ///
    /// # Panics
    /// Panics when the query's width differs from the number of
    /// training features.
    fn predict(&self, query: &[Category]) -> Result<Label, Error> {
        assert_eq!(
            query.len(), self.names.len(),
            "the query has {} values, but the tree was fitted on {} features",
            query.len(), self.names.len(),
        );
        self.root.classify(&self.names, query).map(|label| label.clone())
    }
}
