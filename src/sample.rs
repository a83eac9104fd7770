//! Training data: categorical feature vectors, class labels,
//! and readers that load them.
mod reader;
mod sample_struct;
mod values;

pub use reader::SampleReader;
pub use sample_struct::Sample;
pub use values::{Category, Label};
