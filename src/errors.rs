//! Errors reported by dataset construction, training, and classification.
use crate::sample::Category;

use std::io;

use thiserror::Error;

/// The error type shared by everything in this crate.
///
/// Invalid *datasets* and *parameters* are reported through this enum
/// so that callers can match on the exact violation.
/// Broken internal invariants, such as a tree node naming a feature
/// that the classifier never stored, are bugs and panic instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset was constructed without any rows.
    #[error("invalid dataset: no rows")]
    EmptyDataset,

    /// A row's width differs from the width established by the first row.
    #[error("invalid dataset: row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of entries the row actually has.
        got: usize,
        /// Number of entries every row must have.
        expected: usize,
    },

    /// The number of labels does not match the number of rows.
    #[error("invalid dataset: {n_label} labels for {n_sample} rows")]
    LabelCount {
        /// Number of labels handed in.
        n_label: usize,
        /// Number of rows in the dataset.
        n_sample: usize,
    },

    /// Two feature columns share one name.
    #[error("invalid dataset: duplicate feature name `{0}`")]
    DuplicateFeature(String),

    /// A feature name was requested that the dataset does not contain.
    #[error("no feature named `{0}`")]
    UnknownFeature(String),

    /// Classification reached a branch whose training partition never
    /// observed the query's value for the tested feature,
    /// so the tree has no edge to follow.
    #[error("unseen value `{value}` for feature `{feature}`")]
    UnseenValue {
        /// Name of the feature tested at the branch.
        feature: String,
        /// The query value no training row exhibited.
        value: Category,
    },

    /// The requested neighbor count lies outside `1..=n_sample`.
    #[error("invalid parameter: k = {k}, but the training set has {n_sample} rows")]
    NeighborCount {
        /// The requested number of neighbors.
        k: usize,
        /// Number of rows in the training set.
        n_sample: usize,
    },

    /// An I/O failure while reading training data.
    #[error(transparent)]
    Io(#[from] io::Error),
}
