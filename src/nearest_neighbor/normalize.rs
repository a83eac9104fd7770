//! Per-column rescaling of numeric features onto `[0, 1]`.
use crate::errors::Error;

/// A min/range scaler fitted on a training matrix.
///
/// Each column is mapped through `(x - min) / range` with the minimum
/// and range observed at fit time, which puts every training value
/// into `[0, 1]` and stops large-scale columns from dominating the
/// Euclidean distance. A constant column has zero range and maps
/// to `0.0`.
///
/// The fitted minima and ranges stay available through
/// [`Normalizer::mins`] and [`Normalizer::ranges`], so later queries
/// go through the very same mapping as the training rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalizer {
    mins: Vec<f64>,
    ranges: Vec<f64>,
}

impl Normalizer {
    /// Fits the per-column minima and ranges of `rows`.
    ///
    /// # Errors
    /// [`Error::EmptyDataset`] when `rows` is empty and
    /// [`Error::RaggedRow`] when the rows disagree on width.
    pub fn fit(rows: &[Vec<f64>]) -> Result<Self, Error> {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let expected = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(Error::RaggedRow { row, got: cells.len(), expected });
            }
        }

        let mut mins = rows[0].clone();
        let mut maxs = rows[0].clone();
        for row in rows {
            for (j, &x) in row.iter().enumerate() {
                mins[j] = mins[j].min(x);
                maxs[j] = maxs[j].max(x);
            }
        }

        let ranges = maxs.iter()
            .zip(&mins)
            .map(|(hi, lo)| hi - lo)
            .collect();

        Ok(Self { mins, ranges })
    }

    /// Returns the rescaled copy of `row`.
    ///
    /// # Panics
    /// Panics when `row` is not as wide as the fitted matrix.
    pub fn transform(&self, row: &[f64]) -> Vec<f64> {
        assert_eq!(
            row.len(), self.mins.len(),
            "the row has {} values, but the scaler was fitted on {} columns",
            row.len(), self.mins.len(),
        );

        row.iter()
            .zip(self.mins.iter().zip(&self.ranges))
            .map(|(&x, (&lo, &range))| {
                if range == 0f64 { 0f64 } else { (x - lo) / range }
            })
            .collect()
    }

    /// Returns the rescaled copy of every row.
    pub fn transform_all(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        rows.iter()
            .map(|row| self.transform(row))
            .collect()
    }

    /// The fitted per-column minima.
    pub fn mins(&self) -> &[f64] {
        &self.mins[..]
    }

    /// The fitted per-column ranges, `max - min`.
    pub fn ranges(&self) -> &[f64] {
        &self.ranges[..]
    }
}
