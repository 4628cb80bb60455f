mod basic_estimator;
mod estimator;
mod variance_estimator;

pub use basic_estimator::BasicEstimator;
pub use estimator::Estimator;
pub use variance_estimator::VarianceEstimator;
