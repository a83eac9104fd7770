//! Shannon entropy of a label distribution, and majority voting.
use std::collections::{BTreeMap, HashMap};

use crate::sample::Label;

/// Shannon entropy `H = -Σ p · log2(p)` of the class distribution
/// in `labels`, in bits.
///
/// A single-class slice scores `0.0` exactly and a balanced two-class
/// slice scores `1.0` exactly. Counts accumulate into an ordered map so
/// the floating-point sum visits classes in one fixed order, which keeps
/// the result bitwise identical under any permutation of `labels`.
///
/// # Panics
/// Panics when `labels` is empty; the entropy of nothing is undefined,
/// and datasets guarantee at least one row, so an empty slice here is
/// a caller bug.
pub fn shannon_entropy(labels: &[Label]) -> f64 {
    assert!(!labels.is_empty(), "the entropy of an empty label slice is undefined");

    let mut counts = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0usize) += 1;
    }

    let n_sample = labels.len() as f64;
    counts.values()
        .map(|&count| {
            let p = count as f64 / n_sample;
            - p * p.log2()
        })
        .sum()
}

/// The most frequent label in `labels`.
///
/// The winner scan walks `labels` in row order with a strict `>`,
/// so on equal counts the class seen earliest wins.
///
/// # Panics
/// Panics when `labels` is empty.
pub(crate) fn majority_label(labels: &[Label]) -> &Label {
    assert!(!labels.is_empty(), "majority vote over an empty label slice");

    let mut counts = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0usize) += 1;
    }

    let mut best = &labels[0];
    let mut best_count = 0;
    for label in labels {
        let count = counts[label];
        if count > best_count {
            best = label;
            best_count = count;
        }
    }
    best
}
