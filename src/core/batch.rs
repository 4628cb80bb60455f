use crate::core::samples::{LabeledSample, TrainingSample};
use serde::{Deserialize, Serialize};

/// Ordered samples produced by one split/fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch<T> {
    samples: Vec<T>,
}

pub type TestBatch = Batch<LabeledSample>;
pub type TrainingBatch = Batch<TrainingSample>;

impl<T> Batch<T> {
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }
}

impl TestBatch {
    /// Builds a batch from `(actual, predicted)` pairs.
    pub fn from_pairs<I, A, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, P)>,
        A: Into<String>,
        P: Into<String>,
    {
        pairs.into_iter().map(LabeledSample::from).collect()
    }
}

impl TrainingBatch {
    /// Builds a batch from `(text, label)` pairs.
    pub fn from_pairs<I, X, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (X, L)>,
        X: Into<String>,
        L: Into<String>,
    {
        pairs.into_iter().map(TrainingSample::from).collect()
    }
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self { samples: vec![] }
    }
}

impl<T> From<Vec<T>> for Batch<T> {
    fn from(samples: Vec<T>) -> Self {
        Self::new(samples)
    }
}

impl<T> FromIterator<T> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Batch<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_builds_ordered_samples() {
        let b = TestBatch::from_pairs([("A", "A"), ("A", "B")]);
        assert_eq!(b.len(), 2);
        assert_eq!(b.samples()[1], LabeledSample::new("A", "B"));
    }

    #[test]
    fn serde_is_transparent() {
        let b = TrainingBatch::from_pairs([("nice view", "Location")]);
        let v = serde_json::to_value(&b).unwrap();
        assert!(v.is_array());
        let back: TrainingBatch = serde_json::from_value(v).unwrap();
        assert_eq!(back, b);
    }
}
