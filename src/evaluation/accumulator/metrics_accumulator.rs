use crate::core::{LabelSet, ReportError, TestBatch};
use crate::evaluation::ConfusionMatrix;
use crate::evaluation::accumulator::LabelPolicy;
use tracing::{debug, info};

/// Confusion counts gathered from a set of test batches.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulation {
    pub labels: LabelSet,
    pub total: ConfusionMatrix,
    pub per_batch: Vec<ConfusionMatrix>,
    pub total_correct: u64,
    pub total_count: u64,
}

/// Builds the total and per-batch confusion matrices in one pass over the
/// batches. The call is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct MetricsAccumulator {
    policy: LabelPolicy,
}

impl MetricsAccumulator {
    pub fn new(policy: LabelPolicy) -> Self {
        Self { policy }
    }

    pub fn accumulate(&self, batches: &[TestBatch]) -> Result<Accumulation, ReportError> {
        if batches.is_empty() {
            return Err(ReportError::EmptyDataset("no test batches"));
        }
        if batches.iter().all(TestBatch::is_empty) {
            return Err(ReportError::EmptyDataset("test batches contain no samples"));
        }

        let labels = self.label_set(batches)?;
        debug!(labels = labels.len(), policy = ?self.policy, "label set fixed");

        let per_batch = batches
            .iter()
            .enumerate()
            .map(|(i, batch)| Self::batch_matrix(&labels, i, batch))
            .collect::<Result<Vec<_>, _>>()?;

        let mut total = ConfusionMatrix::new(labels.clone());
        for m in &per_batch {
            total.merge(m)?;
        }

        let total_correct = total.correct();
        let total_count = total.total();
        info!(
            batches = batches.len(),
            samples = total_count,
            correct = total_correct,
            classes = labels.len(),
            "accumulated test results"
        );

        Ok(Accumulation {
            labels,
            total,
            per_batch,
            total_correct,
            total_count,
        })
    }

    fn label_set(&self, batches: &[TestBatch]) -> Result<LabelSet, ReportError> {
        let labels = match &self.policy {
            LabelPolicy::Union => {
                let mut set = LabelSet::new();
                for sample in batches.iter().flat_map(TestBatch::iter) {
                    set.insert(&sample.actual);
                    set.insert(&sample.predicted);
                }
                set
            }
            LabelPolicy::Declared(declared) => declared.iter().collect(),
        };
        if labels.is_empty() {
            return Err(ReportError::EmptyDataset("label set is empty"));
        }
        Ok(labels)
    }

    fn batch_matrix(
        labels: &LabelSet,
        index: usize,
        batch: &TestBatch,
    ) -> Result<ConfusionMatrix, ReportError> {
        let mut m = ConfusionMatrix::new(labels.clone());
        for sample in batch {
            m.increment(&sample.actual, &sample.predicted)
                .map_err(|label| ReportError::LabelMismatch {
                    label: label.to_string(),
                    batch: index,
                })?;
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_batch;

    #[test]
    fn builds_total_and_per_batch() {
        let batches = vec![
            test_batch(&[("A", "A"), ("A", "B")]),
            test_batch(&[("B", "B"), ("B", "A"), ("A", "A")]),
        ];
        let acc = MetricsAccumulator::default().accumulate(&batches).unwrap();

        assert_eq!(acc.labels.as_slice(), &["A".to_string(), "B".to_string()]);
        assert_eq!(acc.per_batch.len(), 2);
        assert_eq!(acc.per_batch[0].rows(), &[vec![1, 1], vec![0, 0]]);
        assert_eq!(acc.per_batch[1].rows(), &[vec![1, 0], vec![1, 1]]);
        assert_eq!(acc.total.rows(), &[vec![2, 1], vec![1, 1]]);
        assert_eq!(acc.total_correct, 3);
        assert_eq!(acc.total_count, 5);
    }

    #[test]
    fn union_covers_labels_missing_from_some_batches() {
        let batches = vec![
            test_batch(&[("Room", "Room")]),
            test_batch(&[("Staff", "Food")]),
        ];
        let acc = MetricsAccumulator::default().accumulate(&batches).unwrap();
        assert_eq!(acc.labels.len(), 3);
        assert!(acc.labels.contains("Food"));
        assert_eq!(acc.per_batch[0].len(), 3);
    }

    #[test]
    fn declared_policy_fails_fast_on_unknown_label() {
        let batches = vec![
            test_batch(&[("A", "A")]),
            test_batch(&[("A", "C")]),
        ];
        let acc = MetricsAccumulator::new(LabelPolicy::Declared(vec!["A".into(), "B".into()]));
        match acc.accumulate(&batches) {
            Err(ReportError::LabelMismatch { label, batch }) => {
                assert_eq!(label, "C");
                assert_eq!(batch, 1);
            }
            other => panic!("expected LabelMismatch, got {other:?}"),
        }
    }

    #[test]
    fn declared_policy_keeps_declared_order_and_unused_labels() {
        let batches = vec![test_batch(&[("A", "A")])];
        let acc = MetricsAccumulator::new(LabelPolicy::Declared(vec!["B".into(), "A".into()]))
            .accumulate(&batches)
            .unwrap();
        assert_eq!(acc.labels.index_of("B"), Some(0));
        assert_eq!(acc.total.rows(), &[vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let acc = MetricsAccumulator::default();
        assert!(matches!(
            acc.accumulate(&[]),
            Err(ReportError::EmptyDataset(_))
        ));
        assert!(matches!(
            acc.accumulate(&[TestBatch::default(), TestBatch::default()]),
            Err(ReportError::EmptyDataset(_))
        ));

        let declared = MetricsAccumulator::new(LabelPolicy::Declared(vec![]));
        assert!(matches!(
            declared.accumulate(&[test_batch(&[("A", "A")])]),
            Err(ReportError::EmptyDataset(_))
        ));
    }

    #[test]
    fn empty_batch_among_others_is_allowed() {
        let batches = vec![test_batch(&[("A", "B")]), TestBatch::default()];
        let acc = MetricsAccumulator::default().accumulate(&batches).unwrap();
        assert_eq!(acc.per_batch[1].total(), 0);
        assert_eq!(acc.total_count, 1);
    }

    #[test]
    fn marginals_sum_to_total_count() {
        let batches = crate::testing::random_folds(7, 5, 200, &["A", "B", "C", "D"]);
        let acc = MetricsAccumulator::default().accumulate(&batches).unwrap();
        let k = acc.labels.len();
        let predicted: u64 = (0..k).map(|c| acc.total.column_sum(c)).sum();
        let actual: u64 = (0..k).map(|c| acc.total.row_sum(c)).sum();
        assert_eq!(predicted, acc.total_count);
        assert_eq!(actual, acc.total_count);
        assert_eq!(acc.total_count, 1000);
    }
}
