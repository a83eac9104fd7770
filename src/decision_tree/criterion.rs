//! Information-gain scoring and split selection.
use rayon::prelude::*;

use crate::sample::Sample;

use super::entropy::shannon_entropy;
use super::partition::{distinct_values, split_on};

/// Expected entropy reduction from partitioning `sample` on
/// feature `index`.
///
/// Each candidate partition's entropy is weighted by its share of the
/// rows, then summed over the feature's values in their sorted order.
/// The fixed summation order keeps the gain bitwise identical under
/// any permutation of the rows.
pub(crate) fn information_gain(sample: &Sample, index: usize) -> f64 {
    let (n_sample, _) = sample.shape();
    let base = shannon_entropy(sample.target());

    let expected = distinct_values(sample, index)
        .iter()
        .map(|value| {
            let part = split_on(sample, index, value);
            let weight = part.shape().0 as f64 / n_sample as f64;
            weight * shannon_entropy(part.target())
        })
        .sum::<f64>();

    base - expected
}

/// The feature maximizing information gain over `sample`, paired with
/// that gain, or `None` when no feature strictly beats the zero-gain
/// baseline.
///
/// Candidates are scored in parallel. On equal gains the smaller column
/// index wins, so the selection is reproducible however the candidate
/// scores arrive.
pub(crate) fn best_split_feature(sample: &Sample) -> Option<(usize, f64)> {
    let (_, n_feature) = sample.shape();

    (0..n_feature).into_par_iter()
        .map(|index| (index, information_gain(sample, index)))
        .max_by(|&(i, gain_i), &(j, gain_j)| {
            gain_i.partial_cmp(&gain_j)
                .unwrap()
                .then_with(|| j.cmp(&i))
        })
        .filter(|&(_, gain)| gain > 0f64)
}
