use serde::{Deserialize, Serialize};

use super::{NationRecord, StateRecord};

/// Ordered collection of records decoded from one response.
///
/// Order is the API response order. The top-level `data` array is required;
/// any other top-level keys (such as `source`) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    data: Vec<T>,
}

pub type StateDataset = Dataset<StateRecord>;
pub type NationDataset = Dataset<NationRecord>;

impl<T> Dataset<T> {
    pub fn records(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_records(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for Dataset<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<'a, T> IntoIterator for &'a Dataset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
