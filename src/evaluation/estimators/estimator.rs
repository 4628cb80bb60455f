/// Streaming scalar estimator.
///
/// Values are fed one at a time through [`add`](Estimator::add) and the
/// current estimate is read back with [`estimation`](Estimator::estimation).
/// `NaN` observations are ignored.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// Current estimate, `NaN` before the first observation.
    fn estimation(&self) -> f64;

    /// Number of observations accepted so far.
    fn count(&self) -> u64;

    /// Feeds every value of `values`.
    fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I)
    where
        Self: Sized,
    {
        for v in values {
            self.add(v);
        }
    }
}
