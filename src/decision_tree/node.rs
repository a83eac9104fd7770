//! The tree value produced by induction.
use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::Error;
use crate::sample::{Category, Label};

/// One subtree of a trained decision tree.
///
/// A branch tests a single feature by name and holds one child per value
/// the training partition observed for that feature; a leaf assigns a
/// class. Children live in a [`BTreeMap`] keyed by the observed values,
/// so traversal, printing, and serialization all follow one fixed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// An internal decision over one feature.
    Branch {
        /// Name of the feature this node tests.
        name: String,
        /// One subtree per feature value observed during training.
        children: BTreeMap<Category, Node>,
    },
    /// A terminal classification.
    Leaf {
        /// The class assigned to every query that reaches this node.
        label: Label,
    },
}

impl Node {
    /// Constructs a branch testing the feature named `name`.
    pub fn branch<S>(name: S, children: BTreeMap<Category, Node>) -> Self
        where S: AsRef<str>,
    {
        Self::Branch { name: name.as_ref().to_string(), children }
    }

    /// Constructs a leaf assigning `label`.
    pub fn leaf<L>(label: L) -> Self
        where L: Into<Label>,
    {
        Self::Leaf { label: label.into() }
    }

    /// Number of leaves under this node; a plot of the tree is this
    /// many terminal boxes wide.
    pub fn leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => children.values()
                .map(Self::leaves)
                .sum(),
            Self::Leaf { .. } => 1,
        }
    }

    /// Number of branch levels along the deepest path from this node.
    /// A bare leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.values()
                    .map(Self::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }

    /// Descends from this node following `query`, resolving feature
    /// positions through `names`, the column layout the tree was
    /// trained on.
    ///
    /// # Errors
    /// [`Error::UnseenValue`] when the query carries a value for the
    /// tested feature that no training row in this subtree's partition
    /// exhibited. The tree has no edge to follow, and guessing a branch
    /// would silently misclassify.
    ///
    /// # Panics
    /// Panics when `query` is not as wide as `names`, and when a branch
    /// names a feature absent from `names`. Trained trees only test
    /// features of the dataset they grew from, so a miss is a caller bug.
    pub fn classify<S>(&self, names: &[S], query: &[Category]) -> Result<&Label, Error>
        where S: AsRef<str>,
    {
        assert_eq!(
            query.len(), names.len(),
            "the query has {} values, but the name list has {}",
            query.len(), names.len(),
        );
        match self {
            Self::Branch { name, children } => {
                let position = names.iter()
                    .position(|n| n.as_ref() == name.as_str())
                    .unwrap_or_else(|| {
                        panic!("the tree tests feature `{name}`, \
                                which the name list does not contain")
                    });
                let value = &query[position];

                match children.get(value) {
                    Some(child) => child.classify(names, query),
                    None => Err(Error::UnseenValue {
                        feature: name.clone(),
                        value: value.clone(),
                    }),
                }
            },
            Self::Leaf { label } => Ok(label),
        }
    }

    /// Returns the Graphviz lines for this subtree rooted at `id`,
    /// together with the next unused node id.
    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Branch { name, children } => {
                let decision = format!("\tnode_{id} [ label = \"{name} ?\" ];\n");
                let mut info = vec![decision];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut rows, return_id) = child.to_dot_info(child_id);
                    info.append(&mut rows);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n"
                    ));
                    next_id = return_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n"
                );
                (vec![info], id + 1)
            },
        }
    }
}

impl fmt::Display for Node {
    /// Renders the nested `{feature: {value: subtree}}` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { name, children } => {
                write!(f, "{{{name}: {{")?;
                for (i, (value, child)) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}: {child}")?;
                }
                write!(f, "}}}}")
            },
            Self::Leaf { label } => write!(f, "{label}"),
        }
    }
}
