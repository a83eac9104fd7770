//! Classification by majority vote among the nearest training rows.
use std::collections::HashMap;

use crate::classifier::Classifier;
use crate::errors::Error;
use crate::sample::Label;

/// A k-nearest-neighbor classifier over numeric feature vectors.
///
/// There is no training phase: the model stores the full training
/// matrix and ranks it by Euclidean distance at query time. Feature
/// scales dominate the distance, so columns measured in wildly
/// different units should go through a
/// [`Normalizer`](crate::nearest_neighbor::Normalizer) first,
/// queries included.
///
/// Classification is deterministic: the distance ranking is stable,
/// with equally distant rows kept in training order, and vote ties
/// go to the label encountered first in ranking order.
///
/// ```
/// use minilearners::prelude::*;
///
/// let f = NearestNeighbors::new(
///     vec![
///         vec![1.0, 1.1],
///         vec![1.0, 1.0],
///         vec![0.0, 0.0],
///         vec![0.0, 0.1],
///     ],
///     vec![
///         Label::from("A"), Label::from("A"),
///         Label::from("B"), Label::from("B"),
///     ],
///     3,
/// ).unwrap();
///
/// assert_eq!(Label::from("B"), f.classify(&[0.0, 0.0]));
/// ```
#[derive(Clone, Debug)]
pub struct NearestNeighbors {
    rows: Vec<Vec<f64>>,
    labels: Vec<Label>,
    k: usize,
}

impl NearestNeighbors {
    /// Stores the training matrix, its labels, and the neighbor count.
    ///
    /// # Errors
    /// [`Error::EmptyDataset`] when `rows` is empty,
    /// [`Error::RaggedRow`] when the rows disagree on width,
    /// [`Error::LabelCount`] when `labels` and `rows` disagree on
    /// length, and [`Error::NeighborCount`] unless `1 <= k <= rows.len()`.
    pub fn new(
        rows: Vec<Vec<f64>>,
        labels: Vec<Label>,
        k: usize,
    ) -> Result<Self, Error> {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let expected = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(Error::RaggedRow { row, got: cells.len(), expected });
            }
        }

        let n_sample = rows.len();
        if labels.len() != n_sample {
            return Err(Error::LabelCount { n_label: labels.len(), n_sample });
        }
        if k < 1 || n_sample < k {
            return Err(Error::NeighborCount { k, n_sample });
        }

        Ok(Self { rows, labels, k })
    }

    /// Returns the pair `(n_sample, n_feature)` of the stored matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows[0].len())
    }

    /// The neighbor count this model votes with.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Labels `query` by majority vote among the `k` nearest rows.
    ///
    /// # Panics
    /// Panics when the query's width differs from the training rows'.
    pub fn classify(&self, query: &[f64]) -> Label {
        let (_, n_feature) = self.shape();
        assert_eq!(
            query.len(), n_feature,
            "the query has {} values, but the training rows have {n_feature}",
            query.len(),
        );

        let distances = self.rows.iter()
            .map(|row| euclidean_distance(query, row))
            .collect::<Vec<_>>();

        // A stable sort, so equally distant rows stay in training order.
        let mut ranked = (0..self.rows.len()).collect::<Vec<_>>();
        ranked.sort_by(|&i, &j| distances[i].total_cmp(&distances[j]));
        let nearest = &ranked[..self.k];

        let mut votes = HashMap::new();
        for &i in nearest {
            *votes.entry(&self.labels[i]).or_insert(0usize) += 1;
        }

        // Scan in ranking order with a strict `>`, so a tied vote goes
        // to the label whose representative ranks nearest.
        let mut best = &self.labels[nearest[0]];
        let mut best_count = 0;
        for &i in nearest {
            let count = votes[&self.labels[i]];
            if count > best_count {
                best = &self.labels[i];
                best_count = count;
            }
        }
        best.clone()
    }
}

impl Classifier<[f64]> for NearestNeighbors {
    fn predict(&self, query: &[f64]) -> Result<Label, Error> {
        Ok(self.classify(query))
    }
}

/// The Euclidean distance `sqrt(Σ (a_i - b_i)²)`.
fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
