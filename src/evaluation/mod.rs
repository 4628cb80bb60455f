pub mod accumulator;
mod confusion_matrix;
mod estimators;
mod measured;
mod measurement;
pub mod statistics;

pub use accumulator::{Accumulation, LabelPolicy, MetricsAccumulator};
pub use confusion_matrix::ConfusionMatrix;
pub use estimators::{BasicEstimator, Estimator, VarianceEstimator};
pub use measured::{Measured, MeasuredExt};
pub use measurement::Measurement;
pub use statistics::{AggregateStats, AverageStats, BoxSummary, ClassStats, SplitSeries, Statistics};
