//! Instance-based classification over numeric feature vectors.
mod knn;
mod normalize;

pub use knn::NearestNeighbors;
pub use normalize::Normalizer;
