//! The interface shared by trained models.
use crate::errors::Error;
use crate::sample::Label;

/// A trained model that labels queries of type `Q`.
///
/// The decision tree classifies slices of [`Category`](crate::Category)
/// and the nearest-neighbor model classifies slices of `f64`,
/// so the query type is a parameter of the trait.
pub trait Classifier<Q: ?Sized> {
    /// Predicts the class label of `query`.
    ///
    /// # Errors
    /// Model-specific; the decision tree reports
    /// [`Error::UnseenValue`] for queries it has no edge for.
    fn predict(&self, query: &Q) -> Result<Label, Error>;

    /// Predicts a label for each query, stopping at the first failure.
    fn predict_all<'a, I>(&self, queries: I) -> Result<Vec<Label>, Error>
        where I: IntoIterator<Item = &'a Q>,
              Q: 'a,
    {
        queries.into_iter()
            .map(|query| self.predict(query))
            .collect()
    }
}
