//! Derived series aligned one-to-one with the input bars.

use serde::{Deserialize, Serialize};

/// A derived time series with one slot per input bar.
///
/// `None` marks positions where the value is undefined because the trailing
/// window has not filled yet. Undefined stays explicit all the way to the
/// consumer — there is no sentinel number to misread as data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(Vec<Option<f64>>);

impl Series {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }

    /// A series of `len` undefined slots.
    pub fn undefined(len: usize) -> Self {
        Self(vec![None; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at `index`; `None` when undefined or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied().flatten()
    }

    /// Value at the final position; `None` when undefined or empty.
    pub fn last(&self) -> Option<f64> {
        self.0.last().copied().flatten()
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.0
    }

    /// Number of undefined slots before the first defined value.
    pub fn leading_undefined(&self) -> usize {
        self.0.iter().take_while(|v| v.is_none()).count()
    }

    pub fn defined_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<f64>> {
        self.0.iter()
    }
}

impl From<Vec<Option<f64>>> for Series {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self(values)
    }
}

impl FromIterator<Option<f64>> for Series {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
