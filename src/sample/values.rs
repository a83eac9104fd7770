//! String-backed values for categorical features and class labels.
use serde::{Deserialize, Serialize};

use std::fmt;

/// A single categorical feature value.
///
/// Attribute values are only ever compared for equality when partitioning
/// a dataset, never interpreted numerically, so everything is carried as
/// text. Numeric-coded attributes such as `1`/`0` survey answers still
/// read naturally through [`Category::new`].
///
/// `Category` is `Ord` so that value enumerations and child maps have one
/// fixed order, independent of row order.
#[repr(transparent)]
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Builds a category from anything printable.
    ///
    /// ```
    /// use minilearners::Category;
    ///
    /// assert_eq!(Category::new(1), Category::from("1"));
    /// ```
    pub fn new<T: ToString>(value: T) -> Self {
        Self(value.to_string())
    }

    /// The textual form of the value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A class label.
///
/// Kept distinct from [`Category`] so that a feature value cannot be
/// confused with a classification, even though both are plain text.
#[repr(transparent)]
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Builds a label from anything printable.
    pub fn new<T: ToString>(value: T) -> Self {
        Self(value.to_string())
    }

    /// The textual form of the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<Category> for Label {
    fn from(value: Category) -> Self {
        Self(value.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
