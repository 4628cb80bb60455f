use crate::evaluation::estimators::Estimator;

/// Welford running mean and population variance.
#[derive(Debug, Default, Clone, Copy)]
pub struct VarianceEstimator {
    len: u64,
    mean: f64,
    m2: f64,
}

impl VarianceEstimator {
    /// Population variance, `NaN` when empty.
    pub fn variance(&self) -> f64 {
        if self.len == 0 {
            f64::NAN
        } else {
            self.m2 / self.len as f64
        }
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Estimator for VarianceEstimator {
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        let delta = v - self.mean;
        self.mean += delta / self.len as f64;
        self.m2 += delta * (v - self.mean);
    }

    fn estimation(&self) -> f64 {
        if self.len == 0 { f64::NAN } else { self.mean }
    }

    fn count(&self) -> u64 {
        self.len
    }
}
