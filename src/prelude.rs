//! Exports the commonly used items of this crate.
//!
//! ```
//! use minilearners::prelude::*;
//! ```

// Training data ----------------------------------------
pub use crate::sample::{
    Category,
    Label,
    Sample,
    SampleReader,
};

// Decision tree ----------------------------------------
pub use crate::decision_tree::{
    shannon_entropy,
    DecisionTree,
    DecisionTreeClassifier,
    Node,
};

// Nearest neighbor -------------------------------------
pub use crate::nearest_neighbor::{
    NearestNeighbors,
    Normalizer,
};

// Shared interface -------------------------------------
pub use crate::classifier::Classifier;
pub use crate::errors::Error;
