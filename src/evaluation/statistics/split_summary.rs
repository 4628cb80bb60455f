use crate::evaluation::estimators::{Estimator, VarianceEstimator};
use serde::Serialize;

/// Five-number summary plus mean and spread of one per-split series.
///
/// Quartiles use linear interpolation between closest ranks, the default of
/// most box-plot tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl BoxSummary {
    /// `None` for an empty series.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mut spread = VarianceEstimator::default();
        spread.extend(values.iter().copied());

        Some(Self {
            min: sorted[0],
            q1: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q3: percentile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
            mean: spread.estimation(),
            std_dev: spread.std_dev(),
        })
    }
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// Per-split view of the derived statistics, used for variance charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitSeries {
    /// `f1[class][batch]`, classes in label order.
    pub f1: Vec<Vec<f64>>,
    /// Accuracy of each batch; `None` for a batch without samples.
    pub accuracy: Vec<Option<f64>>,
    /// Summary of `f1[class]`; `None` only when there are no batches.
    pub f1_summary: Vec<Option<BoxSummary>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn quartiles_interpolate() {
        let s = BoxSummary::from_values(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
        assert!(close(s.q1, 1.75));
        assert!(close(s.median, 2.5));
        assert!(close(s.q3, 3.25));
        assert!(close(s.mean, 2.5));
        assert!(close(s.std_dev, 1.25f64.sqrt()));
    }

    #[test]
    fn single_value() {
        let s = BoxSummary::from_values(&[0.5]).unwrap();
        assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (0.5, 0.5, 0.5, 0.5, 0.5));
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn empty_series() {
        assert!(BoxSummary::from_values(&[]).is_none());
    }
}
