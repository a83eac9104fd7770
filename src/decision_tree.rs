//! Decision trees over categorical features,
//! trained by recursive information-gain splits.
mod criterion;
mod dtree;
mod dtree_classifier;
mod entropy;
mod node;
mod partition;

pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use entropy::shannon_entropy;
pub use node::Node;
