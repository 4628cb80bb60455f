mod class_stats;
mod split_summary;
mod statistics;

pub use class_stats::{AggregateStats, AverageStats, ClassStats, class_stats, f_score};
pub use split_summary::{BoxSummary, SplitSeries};
pub use statistics::Statistics;
