//! The labeled categorical dataset that training consumes.
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};

use crate::errors::Error;

use super::values::{Category, Label};

/// A labeled dataset of categorical feature vectors.
///
/// Every row holds one textual value per feature column, and rows are
/// owned by the `Sample`, so partitioning during tree induction copies
/// whatever survives into fresh, independent datasets.
///
/// `Sample` guarantees on construction that it has at least one row,
/// that all rows share one width, and that feature names are unique.
/// An all-feature dataset read by [`Sample::from_reader`] carries no
/// labels until [`Sample::set_target`] turns one column into the target.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) names: Vec<String>,
    pub(super) rows: Vec<Vec<Category>>,
    pub(super) target: Vec<Label>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}

impl Sample {
    /// Builds a labeled dataset from in-memory rows.
    ///
    /// Each row carries one value per name in `names` followed by the
    /// class label, mirroring the usual on-disk layout.
    ///
    /// ```
    /// use minilearners::{Category, Sample};
    ///
    /// let sample = Sample::from_rows(
    ///     &["no surfacing", "flippers"],
    ///     vec![
    ///         vec![Category::new(1), Category::new(1), Category::new("yes")],
    ///         vec![Category::new(1), Category::new(0), Category::new("no")],
    ///     ],
    /// ).unwrap();
    /// assert_eq!((2, 2), sample.shape());
    /// ```
    ///
    /// # Errors
    /// [`Error::EmptyDataset`] when `rows` is empty,
    /// [`Error::RaggedRow`] when a row's width is not `names.len() + 1`,
    /// and [`Error::DuplicateFeature`] when two names coincide.
    pub fn from_rows<S>(names: &[S], rows: Vec<Vec<Category>>) -> Result<Self, Error>
        where S: AsRef<str>,
    {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let expected = names.len() + 1;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(Error::RaggedRow { row, got: cells.len(), expected });
            }
        }

        let names = names.iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        let name_to_index = index_names(&names)?;

        let n_sample = rows.len();
        let n_feature = names.len();

        let mut cells = Vec::with_capacity(n_sample);
        let mut target = Vec::with_capacity(n_sample);
        for mut row in rows {
            let label = row.pop()
                .expect("rows of width `names.len() + 1` are never empty");
            target.push(Label::from(label));
            cells.push(row);
        }

        Ok(Self { name_to_index, names, rows: cells, target, n_sample, n_feature })
    }

    /// Reads a comma-separated dataset.
    ///
    /// Cells are trimmed, every column becomes a feature, and the label
    /// column stays in place until [`Sample::set_target`] claims it.
    /// Without a header line, columns are named `Feat. [1]`, `Feat. [2]`,
    /// and so on.
    ///
    /// # Errors
    /// The same shape violations as [`Sample::from_rows`],
    /// plus [`Error::Io`] when reading fails.
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool) -> Result<Self, Error>
        where R: Read,
    {
        let mut lines = reader.lines();

        let mut names = Vec::new();
        if has_header {
            if let Some(line) = lines.next() {
                names = line?.split(',')
                    .map(|name| name.trim().to_string())
                    .collect();
            }
        }

        let mut rows: Vec<Vec<Category>> = Vec::new();
        for line in lines {
            let cells = line?.split(',')
                .map(|cell| Category::from(cell.trim()))
                .collect::<Vec<_>>();

            if names.is_empty() {
                names = (1..=cells.len())
                    .map(|i| format!("Feat. [{i}]"))
                    .collect();
            }

            if cells.len() != names.len() {
                return Err(Error::RaggedRow {
                    row: rows.len(),
                    got: cells.len(),
                    expected: names.len(),
                });
            }
            rows.push(cells);
        }

        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let name_to_index = index_names(&names)?;
        let n_sample = rows.len();
        let n_feature = names.len();

        Ok(Self {
            name_to_index,
            names,
            rows,
            target: Vec::new(),
            n_sample,
            n_feature,
        })
    }

    /// Turns the feature column named `target` into the class labels.
    ///
    /// The column is removed from every row, so the remaining features
    /// keep their relative order and the dataset shrinks by one column.
    ///
    /// # Errors
    /// [`Error::UnknownFeature`] when no column carries that name.
    pub fn set_target<S>(mut self, target: S) -> Result<Self, Error>
        where S: AsRef<str>,
    {
        let target = target.as_ref();
        let index = self.feature_index(target)
            .ok_or_else(|| Error::UnknownFeature(target.to_string()))?;

        self.target = self.rows.iter_mut()
            .map(|row| Label::from(row.remove(index)))
            .collect();

        self.names.remove(index);
        self.n_feature -= 1;
        self.name_to_index = self.names.iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Ok(self)
    }

    /// Assembles a dataset from already-validated parts.
    /// Partitioning uses this to build the per-branch reductions.
    pub(crate) fn from_parts(
        names: Vec<String>,
        rows: Vec<Vec<Category>>,
        target: Vec<Label>,
    ) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == names.len()));
        debug_assert_eq!(rows.len(), target.len());

        let name_to_index = names.iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let n_sample = rows.len();
        let n_feature = names.len();

        Self { name_to_index, names, rows, target, n_sample, n_feature }
    }

    /// Returns the pair `(n_sample, n_feature)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }

    /// The feature names, in column order.
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }

    /// The class labels, one per row.
    /// Empty until a target column is specified.
    pub fn target(&self) -> &[Label] {
        &self.target[..]
    }

    /// The column index of the feature named `name`, if any.
    pub fn feature_index<S>(&self, name: S) -> Option<usize>
        where S: AsRef<str>,
    {
        self.name_to_index.get(name.as_ref()).copied()
    }

    /// Returns the `index`-th row and its label.
    ///
    /// # Panics
    /// Panics when `index` is out of bounds or the target is unspecified.
    pub fn at(&self, index: usize) -> (&[Category], &Label) {
        (&self.rows[index][..], &self.target[index])
    }

    /// Iterates over the values of feature column `index`, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Category> {
        assert!(
            index < self.n_feature,
            "feature index {index} is out of bounds for {} features",
            self.n_feature,
        );
        self.rows.iter().map(move |row| &row[index])
    }
}

/// Maps each name to its column index, rejecting duplicates.
fn index_names(names: &[String]) -> Result<HashMap<String, usize>, Error> {
    let mut name_to_index = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if name_to_index.insert(name.clone(), i).is_some() {
            return Err(Error::DuplicateFeature(name.clone()));
        }
    }
    Ok(name_to_index)
}
