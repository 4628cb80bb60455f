use crate::core::{Batch, LabelSet, Labeled};
use crate::evaluation::{BasicEstimator, Estimator};
use serde::Serialize;
use tracing::debug;

/// Size of one class across the batches of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassShare {
    pub label: String,
    pub counts_per_batch: Vec<u64>,
    pub mean_count: f64,
    /// Percentage of the class in the mean distribution.
    pub share: f64,
}

/// Class counts per batch, ranked by mean count (descending).
///
/// Ties keep the order in which classes were first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Composition {
    pub batches: usize,
    pub classes: Vec<ClassShare>,
}

impl Composition {
    pub fn summarize<T: Labeled>(batches: &[Batch<T>]) -> Self {
        let mut labels = LabelSet::new();
        let mut counts: Vec<Vec<u64>> = Vec::new();

        for (b, batch) in batches.iter().enumerate() {
            for sample in batch {
                let i = labels.insert(sample.label());
                if i == counts.len() {
                    counts.push(vec![0; batches.len()]);
                }
                counts[i][b] += 1;
            }
        }

        let means: Vec<f64> = counts
            .iter()
            .map(|per_batch| {
                let mut e = BasicEstimator::default();
                e.extend(per_batch.iter().map(|&n| n as f64));
                e.estimation()
            })
            .collect();
        let total: f64 = means.iter().sum();

        let mut classes: Vec<ClassShare> = labels
            .iter()
            .zip(counts)
            .zip(&means)
            .map(|((label, counts_per_batch), &mean_count)| ClassShare {
                label: label.to_string(),
                counts_per_batch,
                mean_count,
                share: if total > 0.0 {
                    mean_count * 100.0 / total
                } else {
                    0.0
                },
            })
            .collect();
        // stable: equal means keep first-seen order
        classes.sort_by(|a, b| b.mean_count.total_cmp(&a.mean_count));

        debug!(batches = batches.len(), classes = classes.len(), "summarized composition");
        Self {
            batches: batches.len(),
            classes,
        }
    }

    pub fn get(&self, label: &str) -> Option<&ClassShare> {
        self.classes.iter().find(|c| c.label == label)
    }

    /// `(label, mean_count)` in rank order.
    pub fn ranked(&self) -> impl Iterator<Item = (&str, f64)> {
        self.classes.iter().map(|c| (c.label.as_str(), c.mean_count))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
