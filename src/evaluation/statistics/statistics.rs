use crate::core::{LabelSet, ReportError};
use crate::evaluation::accumulator::Accumulation;
use crate::evaluation::statistics::{
    AggregateStats, AverageStats, BoxSummary, ClassStats, SplitSeries, class_stats,
};
use crate::evaluation::{Measured, Measurement};
use serde::Serialize;
use tracing::debug;

/// Everything derived from an [`Accumulation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub labels: LabelSet,
    pub per_class: Vec<ClassStats>,
    pub aggregate: AggregateStats,
    pub per_split: SplitSeries,
}

impl Statistics {
    pub fn derive(acc: &Accumulation) -> Result<Self, ReportError> {
        if acc.total_count == 0 {
            return Err(ReportError::EmptyDataset("no samples to derive statistics from"));
        }

        let per_class = class_stats(&acc.total);
        let aggregate = AggregateStats {
            accuracy: acc.total_correct as f64 / acc.total_count as f64,
            macro_average: AverageStats::macro_average(&per_class),
            weighted_average: AverageStats::weighted_average(&per_class),
        };

        let k = acc.labels.len();
        let mut f1 = vec![Vec::with_capacity(acc.per_batch.len()); k];
        let mut accuracy = Vec::with_capacity(acc.per_batch.len());
        for m in &acc.per_batch {
            for (c, stats) in class_stats(m).into_iter().enumerate() {
                f1[c].push(stats.f_score);
            }
            let n = m.total();
            accuracy.push((n > 0).then(|| m.correct() as f64 / n as f64));
        }
        let f1_summary = f1.iter().map(|s| BoxSummary::from_values(s)).collect();

        debug!(
            accuracy = aggregate.accuracy,
            macro_f1 = aggregate.macro_average.f_score,
            weighted_f1 = aggregate.weighted_average.f_score,
            splits = acc.per_batch.len(),
            "derived statistics"
        );

        Ok(Self {
            labels: acc.labels.clone(),
            per_class,
            aggregate,
            per_split: SplitSeries {
                f1,
                accuracy,
                f1_summary,
            },
        })
    }

    pub fn class(&self, label: &str) -> Option<&ClassStats> {
        self.labels.index_of(label).map(|i| &self.per_class[i])
    }

    /// F1 of `label` in every split.
    pub fn f1_series(&self, label: &str) -> Option<&[f64]> {
        self.labels
            .index_of(label)
            .map(|i| self.per_split.f1[i].as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassStats)> {
        self.labels.iter().zip(&self.per_class)
    }
}

impl Measured for Statistics {
    fn performance(&self) -> Vec<Measurement> {
        let agg = &self.aggregate;
        let mut m = vec![
            Measurement::new("accuracy", agg.accuracy),
            Measurement::new("precision", agg.macro_average.precision),
            Measurement::new("recall", agg.macro_average.recall),
            Measurement::new("f1", agg.macro_average.f_score),
            Measurement::new("weighted_precision", agg.weighted_average.precision),
            Measurement::new("weighted_recall", agg.weighted_average.recall),
            Measurement::new("weighted_f1", agg.weighted_average.f_score),
        ];
        for (label, s) in self.iter() {
            m.push(Measurement::new(format!("precision_class_{label}"), s.precision));
            m.push(Measurement::new(format!("recall_class_{label}"), s.recall));
            m.push(Measurement::new(format!("f1_class_{label}"), s.f_score));
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TestBatch;
    use crate::evaluation::MeasuredExt;
    use crate::evaluation::accumulator::MetricsAccumulator;
    use crate::testing::{random_folds, test_batch};

    fn derive(batches: &[TestBatch]) -> Statistics {
        let acc = MetricsAccumulator::default().accumulate(batches).unwrap();
        Statistics::derive(&acc).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn perfect_predictions_score_one_everywhere() {
        let s = derive(&[
            test_batch(&[("A", "A"), ("B", "B"), ("C", "C")]),
            test_batch(&[("C", "C"), ("A", "A")]),
        ]);
        assert_eq!(s.aggregate.accuracy, 1.0);
        for (_, c) in s.iter() {
            assert_eq!(c.precision, 1.0);
            assert_eq!(c.recall, 1.0);
            assert_eq!(c.f_score, 1.0);
        }
    }

    #[test]
    fn always_wrong_binary_has_zero_accuracy() {
        let s = derive(&[test_batch(&[("A", "B"), ("B", "A"), ("A", "B")])]);
        assert_eq!(s.aggregate.accuracy, 0.0);
        assert_eq!(s.aggregate.macro_average.f_score, 0.0);
    }

    #[test]
    fn worked_example_from_single_batch() {
        let s = derive(&[test_batch(&[("A", "A"), ("A", "B"), ("B", "B")])]);
        let a = s.class("A").unwrap();
        assert!(close(a.precision, 1.0));
        assert!(close(a.recall, 0.5));
        assert!((a.f_score - 0.667).abs() < 1e-3);
        assert!(close(s.aggregate.accuracy, 2.0 / 3.0));
    }

    #[test]
    fn class_never_predicted_reports_zero_precision() {
        let s = derive(&[test_batch(&[("A", "B"), ("B", "B")])]);
        let a = s.class("A").unwrap();
        assert_eq!(a.precision, 0.0);
        assert_eq!(a.f_score, 0.0);
        assert_eq!(a.support, 0);
    }

    #[test]
    fn per_split_series_have_one_value_per_batch() {
        let s = derive(&[
            test_batch(&[("A", "A"), ("B", "A")]),
            test_batch(&[("A", "A"), ("B", "B")]),
            TestBatch::default(),
        ]);
        let a = s.f1_series("A").unwrap();
        assert_eq!(a.len(), 3);
        assert!(close(a[0], 2.0 / 3.0));
        assert_eq!(a[1], 1.0);
        assert_eq!(a[2], 0.0);
        assert_eq!(s.per_split.accuracy, vec![Some(0.5), Some(1.0), None]);

        let summary = s.per_split.f1_summary[0].unwrap();
        assert_eq!(summary.max, 1.0);
        assert_eq!(summary.min, 0.0);
    }

    #[test]
    fn per_split_matches_aggregate_for_single_batch() {
        let batches = random_folds(3, 1, 300, &["x", "y", "z"]);
        let s = derive(&batches);
        for (c, stats) in s.per_class.iter().enumerate() {
            assert_eq!(s.per_split.f1[c], vec![stats.f_score]);
        }
    }

    #[test]
    fn derivation_is_repeatable() {
        let batches = random_folds(11, 10, 100, &["Location", "Room", "Food", "Staff"]);
        let acc = MetricsAccumulator::default().accumulate(&batches).unwrap();
        let first = Statistics::derive(&acc).unwrap();
        let second = Statistics::derive(&acc).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_accumulation_is_rejected() {
        let labels: LabelSet = ["A"].into_iter().collect();
        let acc = Accumulation {
            total: crate::evaluation::ConfusionMatrix::new(labels.clone()),
            labels,
            per_batch: vec![],
            total_correct: 0,
            total_count: 0,
        };
        assert!(matches!(
            Statistics::derive(&acc),
            Err(ReportError::EmptyDataset(_))
        ));
    }

    #[test]
    fn measurements_expose_aggregate_and_per_class_values() {
        let s = derive(&[test_batch(&[("A", "A"), ("A", "B"), ("B", "B")])]);
        assert!(close(s.metric("accuracy").unwrap(), 2.0 / 3.0));
        assert!(close(s.metric("precision_class_A").unwrap(), 1.0));
        assert!(close(s.metric("recall_class_A").unwrap(), 0.5));
        assert!(s.metric("f1_class_C").is_none());
        assert_eq!(s.performance().len(), 7 + 3 * 2);
    }
}
