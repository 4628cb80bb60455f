use crate::core::{LabelSet, ReportError};
use serde::Serialize;

/// Square count matrix over a fixed label set.
///
/// Rows are indexed by the **actual** class and columns by the **predicted**
/// class, so for a class `c`:
/// - `row_sum(c)` counts samples actually labeled `c`;
/// - `column_sum(c)` counts samples predicted as `c`;
/// - `diagonal(c)` counts the true positives of `c`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    labels: LabelSet,
    counts: Vec<Vec<u64>>,
}

impl ConfusionMatrix {
    pub fn new(labels: LabelSet) -> Self {
        let k = labels.len();
        Self {
            labels,
            counts: vec![vec![0; k]; k],
        }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Counts one `(actual, predicted)` observation.
    ///
    /// Returns the first label that is not part of the set.
    pub fn increment<'a>(&mut self, actual: &'a str, predicted: &'a str) -> Result<(), &'a str> {
        let row = self.labels.index_of(actual).ok_or(actual)?;
        let col = self.labels.index_of(predicted).ok_or(predicted)?;
        self.counts[row][col] += 1;
        Ok(())
    }

    /// Count for a pair of labels; `0` when either label is unknown.
    pub fn count(&self, actual: &str, predicted: &str) -> u64 {
        match (self.labels.index_of(actual), self.labels.index_of(predicted)) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    #[inline]
    pub fn diagonal(&self, class: usize) -> u64 {
        self.counts[class][class]
    }

    #[inline]
    pub fn row_sum(&self, class: usize) -> u64 {
        self.counts[class].iter().sum()
    }

    #[inline]
    pub fn column_sum(&self, class: usize) -> u64 {
        self.counts.iter().map(|row| row[class]).sum()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    pub fn correct(&self) -> u64 {
        (0..self.len()).map(|c| self.diagonal(c)).sum()
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.counts
    }

    /// Adds `other` cell by cell. Both matrices must share the same label set.
    pub fn merge(&mut self, other: &ConfusionMatrix) -> Result<(), ReportError> {
        if self.labels != other.labels {
            return Err(ReportError::InvalidParameter(
                "cannot merge confusion matrices over different label sets".into(),
            ));
        }
        for (row, other_row) in self.counts.iter_mut().zip(&other.counts) {
            for (cell, v) in row.iter_mut().zip(other_row) {
                *cell += v;
            }
        }
        Ok(())
    }

    /// Each row scaled to percentages of its row sum; empty rows stay zero.
    pub fn row_normalized(&self) -> Vec<Vec<f64>> {
        self.counts
            .iter()
            .map(|row| {
                let sum: u64 = row.iter().sum();
                row.iter()
                    .map(|&v| {
                        if sum == 0 {
                            0.0
                        } else {
                            v as f64 * 100.0 / sum as f64
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> LabelSet {
        names.iter().collect()
    }

    fn abab() -> ConfusionMatrix {
        let mut m = ConfusionMatrix::new(labels(&["A", "B"]));
        m.increment("A", "A").unwrap();
        m.increment("A", "B").unwrap();
        m.increment("B", "B").unwrap();
        m
    }

    #[test]
    fn rows_are_actual_columns_are_predicted() {
        let m = abab();
        assert_eq!(m.count("A", "B"), 1);
        assert_eq!(m.count("B", "A"), 0);
        assert_eq!(m.row_sum(0), 2);
        assert_eq!(m.column_sum(0), 1);
        assert_eq!(m.diagonal(1), 1);
        assert_eq!(m.total(), 3);
        assert_eq!(m.correct(), 2);
    }

    #[test]
    fn unknown_label_is_reported() {
        let mut m = ConfusionMatrix::new(labels(&["A"]));
        assert_eq!(m.increment("A", "Z"), Err("Z"));
        assert_eq!(m.increment("Y", "A"), Err("Y"));
        assert_eq!(m.total(), 0);
        assert_eq!(m.count("Y", "A"), 0);
    }

    #[test]
    fn merge_adds_cells() {
        let mut total = abab();
        total.merge(&abab()).unwrap();
        assert_eq!(total.rows(), &[vec![2, 2], vec![0, 2]]);
    }

    #[test]
    fn merge_rejects_different_labels() {
        let mut m = abab();
        let other = ConfusionMatrix::new(labels(&["B", "A"]));
        assert!(matches!(
            m.merge(&other),
            Err(ReportError::InvalidParameter(_))
        ));
    }

    #[test]
    fn row_normalized_in_percent_with_empty_rows() {
        let mut m = ConfusionMatrix::new(labels(&["A", "B", "C"]));
        m.increment("A", "A").unwrap();
        m.increment("A", "B").unwrap();
        m.increment("A", "B").unwrap();
        m.increment("A", "C").unwrap();
        m.increment("B", "B").unwrap();
        let n = m.row_normalized();
        assert_eq!(n[0], vec![25.0, 50.0, 25.0]);
        assert_eq!(n[1], vec![0.0, 100.0, 0.0]);
        assert_eq!(n[2], vec![0.0, 0.0, 0.0]);
    }
}
