//! Recursive induction of information-gain decision trees.
use std::collections::BTreeMap;

use crate::logging::TrainLog;
use crate::sample::Sample;

use super::criterion::best_split_feature;
use super::dtree_classifier::DecisionTreeClassifier;
use super::entropy::majority_label;
use super::node::Node;
use super::partition::{distinct_values, split_on};

/// The decision-tree induction algorithm.
///
/// [`DecisionTree::fit`] grows a tree over a labeled [`Sample`] by
/// recursive partitioning: each level splits on the feature whose
/// partition maximizes information gain, one child per observed value,
/// until a partition is single-class, runs out of features, or no
/// remaining feature reduces entropy.
///
/// ```
/// use minilearners::prelude::*;
///
/// let sample = Sample::from_rows(
///     &["no surfacing", "flippers"],
///     vec![
///         vec![Category::new(1), Category::new(1), Category::new("yes")],
///         vec![Category::new(1), Category::new(1), Category::new("yes")],
///         vec![Category::new(1), Category::new(0), Category::new("no")],
///         vec![Category::new(0), Category::new(1), Category::new("no")],
///         vec![Category::new(0), Category::new(1), Category::new("no")],
///     ],
/// ).unwrap();
///
/// let f = DecisionTree::new().fit(&sample);
///
/// let query = [Category::new(1), Category::new(0)];
/// assert_eq!(Label::from("no"), f.predict(&query[..]).unwrap());
/// ```
pub struct DecisionTree {
    verbose: bool,
}

impl DecisionTree {
    /// Constructs the algorithm with logging turned off.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Print one `[LOG]` line per chosen split and a `[FIN]` summary
    /// of the finished tree.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Grows a tree over `sample` and wraps it, together with the
    /// sample's feature layout, into a [`DecisionTreeClassifier`].
    ///
    /// Induction is deterministic: one dataset grows one tree,
    /// independent of row order.
    ///
    /// # Panics
    /// Panics when `sample` carries no labels.
    /// A sample read from disk needs [`Sample::set_target`] first.
    pub fn fit(&self, sample: &Sample) -> DecisionTreeClassifier {
        let (n_sample, _) = sample.shape();
        assert_eq!(
            sample.target().len(), n_sample,
            "The target class is not specified. \
             Use `Sample::set_target` or `Sample::from_rows`.",
        );

        let log = self.verbose.then(TrainLog::start);
        let root = grow(sample, 0, log.as_ref());

        let f = DecisionTreeClassifier::new(root, sample.names().to_vec());
        if let Some(log) = log {
            log.finish(f.leaves(), f.depth());
        }
        f
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Grows the subtree for one partition.
///
/// Stops with a leaf when the partition is single-class, when no feature
/// columns remain, or when no remaining feature has positive gain; the
/// latter two take the partition's majority label. Otherwise branches on
/// the best-gain feature and recurses into one reduced, independently
/// owned partition per observed value.
fn grow(sample: &Sample, level: usize, log: Option<&TrainLog>) -> Node {
    let (n_sample, n_feature) = sample.shape();
    assert!(n_sample > 0, "a zero-row partition reached the tree builder");

    let labels = sample.target();
    if labels.iter().all(|label| label == &labels[0]) {
        return Node::leaf(labels[0].clone());
    }

    if n_feature == 0 {
        return Node::leaf(majority_label(labels).clone());
    }

    let (index, gain) = match best_split_feature(sample) {
        Some(best) => best,
        None => { return Node::leaf(majority_label(labels).clone()); },
    };

    let name = sample.names()[index].clone();
    if let Some(log) = log {
        log.split(level, &name, gain, n_sample);
    }

    let mut children = BTreeMap::new();
    for value in distinct_values(sample, index) {
        let part = split_on(sample, index, &value);
        children.insert(value, grow(&part, level + 1, log));
    }

    Node::branch(name, children)
}
