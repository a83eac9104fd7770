//! Partitioning a dataset on one feature/value pair.
use std::collections::BTreeSet;

use crate::sample::{Category, Sample};

/// Every value of feature `index` observed in `sample`, in sorted order.
///
/// Sorted enumeration pins down the order in which candidate partitions
/// are scored and child branches are grown, so induction cannot depend
/// on row order.
pub(crate) fn distinct_values(sample: &Sample, index: usize) -> Vec<Category> {
    sample.column(index)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// The rows of `sample` whose feature `index` equals `value`, with that
/// column and its name projected out.
///
/// A stable filter: surviving rows keep their relative order, every row
/// is copied into the returned dataset, and `sample` itself is untouched.
/// Each branch of a growing tree therefore recurses into its own fully
/// independent dataset, and reductions along one branch can never leak
/// into a sibling.
pub(crate) fn split_on(sample: &Sample, index: usize, value: &Category) -> Sample {
    let names = sample.names()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, name)| name.clone())
        .collect::<Vec<_>>();

    let (n_sample, _) = sample.shape();
    let mut rows = Vec::new();
    let mut target = Vec::new();
    for i in 0..n_sample {
        let (cells, label) = sample.at(i);
        if &cells[index] == value {
            let reduced = cells.iter()
                .enumerate()
                .filter(|&(j, _)| j != index)
                .map(|(_, cell)| cell.clone())
                .collect();
            rows.push(reduced);
            target.push(label.clone());
        }
    }

    Sample::from_parts(names, rows, target)
}
