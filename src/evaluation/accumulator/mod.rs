mod label_policy;
mod metrics_accumulator;

pub use label_policy::LabelPolicy;
pub use metrics_accumulator::{Accumulation, MetricsAccumulator};
