use crate::evaluation::ConfusionMatrix;
use crate::evaluation::estimators::{BasicEstimator, Estimator};
use serde::Serialize;

/// Precision, recall and F-score of one class.
///
/// `support` is the number of samples *predicted* as the class, the same
/// quantity that divides the true positives for precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassStats {
    pub precision: f64,
    pub recall: f64,
    pub f_score: f64,
    pub support: u64,
}

impl ClassStats {
    /// Zero denominators are floored to 1, so an absent class scores 0.
    pub fn from_counts(true_positives: u64, predicted: u64, actual: u64) -> Self {
        let precision = true_positives as f64 / predicted.max(1) as f64;
        let recall = true_positives as f64 / actual.max(1) as f64;
        Self {
            precision,
            recall,
            f_score: f_score(precision, recall),
            support: predicted,
        }
    }
}

/// Harmonic mean; `0.0` when both inputs are zero.
#[inline]
pub fn f_score(precision: f64, recall: f64) -> f64 {
    let s = precision + recall;
    if s > 0.0 {
        2.0 * precision * recall / s
    } else {
        0.0
    }
}

/// Per-class statistics of `matrix`, in label order.
///
/// This is the only place precision/recall/F-score are computed; the total
/// matrix and every per-split matrix go through it.
pub fn class_stats(matrix: &ConfusionMatrix) -> Vec<ClassStats> {
    (0..matrix.len())
        .map(|c| ClassStats::from_counts(matrix.diagonal(c), matrix.column_sum(c), matrix.row_sum(c)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AverageStats {
    pub precision: f64,
    pub recall: f64,
    pub f_score: f64,
}

impl AverageStats {
    /// Unweighted mean over classes.
    pub fn macro_average(stats: &[ClassStats]) -> Self {
        if stats.is_empty() {
            return Self::default();
        }
        Self {
            precision: BasicEstimator::mean_of(stats.iter().map(|s| s.precision)),
            recall: BasicEstimator::mean_of(stats.iter().map(|s| s.recall)),
            f_score: BasicEstimator::mean_of(stats.iter().map(|s| s.f_score)),
        }
    }

    /// Mean over classes weighted by [`ClassStats::support`].
    pub fn weighted_average(stats: &[ClassStats]) -> Self {
        let total: u64 = stats.iter().map(|s| s.support).sum();
        let weight = |f: fn(&ClassStats) -> f64| {
            stats.iter().map(|s| f(s) * s.support as f64).sum::<f64>() / total.max(1) as f64
        };
        Self {
            precision: weight(|s| s.precision),
            recall: weight(|s| s.recall),
            f_score: weight(|s| s.f_score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStats {
    pub accuracy: f64,
    pub macro_average: AverageStats,
    pub weighted_average: AverageStats,
}
