use crate::evaluation::estimators::Estimator;

/// Arithmetic mean: `sum / len`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: u64,
    sum: f64,
}

impl BasicEstimator {
    /// Mean of `values`, `NaN` when empty.
    pub fn mean_of<I: IntoIterator<Item = f64>>(values: I) -> f64 {
        let mut e = Self::default();
        e.extend(values);
        e.estimation()
    }
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        assert!(BasicEstimator::default().estimation().is_nan());
    }

    #[test]
    fn mean_skips_nan() {
        let mut e = BasicEstimator::default();
        e.extend([1.0, f64::NAN, 3.0]);
        assert_eq!(e.count(), 2);
        assert!((e.estimation() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn mean_of_helper() {
        assert!((BasicEstimator::mean_of([2.0, 4.0, 9.0]) - 5.0).abs() < 1e-12);
    }
}
