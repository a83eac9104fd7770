#![warn(missing_docs)]

//! A collection of classic supervised classifiers written in Rust 🦀
//!
//! `minilearners` currently provides:
//! - [`DecisionTree`], which grows a decision tree over categorical
//!   features by recursive information-gain splits, and its trained
//!   [`DecisionTreeClassifier`],
//! - [`NearestNeighbors`], a k-nearest-neighbor vote over numeric
//!   feature vectors, with a [`Normalizer`] for rescaling features of
//!   incomparable units.
//!
//! Training data arrives as a [`Sample`], either built in memory with
//! [`Sample::from_rows`] or read from a comma-separated file with
//! [`SampleReader`].
//!
//! # Quick start
//!
//! ```
//! use minilearners::prelude::*;
//! use std::io::BufReader;
//!
//! let csv = "no surfacing,flippers,class\n\
//!            1,1,yes\n\
//!            1,1,yes\n\
//!            1,0,no\n\
//!            0,1,no\n\
//!            0,1,no";
//! let sample = Sample::from_reader(BufReader::new(csv.as_bytes()), true)
//!     .unwrap()
//!     .set_target("class")
//!     .unwrap();
//!
//! let f = DecisionTree::new().fit(&sample);
//! assert_eq!(3, f.leaves());
//!
//! let query = [Category::new(1), Category::new(1)];
//! assert_eq!(Label::from("yes"), f.predict(&query[..]).unwrap());
//! ```
//!
//! Growing a tree is deterministic: one dataset yields one tree, no
//! matter how its rows are ordered, so classifiers can be serialized
//! with `serde`, compared, and regrown reproducibly.
pub mod classifier;
pub mod decision_tree;
pub mod errors;
pub mod nearest_neighbor;
pub mod sample;

mod logging;

pub mod prelude;

pub use classifier::Classifier;
pub use decision_tree::{
    shannon_entropy,
    DecisionTree,
    DecisionTreeClassifier,
    Node,
};
pub use errors::Error;
pub use nearest_neighbor::{NearestNeighbors, Normalizer};
pub use sample::{Category, Label, Sample, SampleReader};
