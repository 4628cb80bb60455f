use crate::core::{LabeledSample, TestBatch, TrainingBatch};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// `folds` test batches of `samples` uniformly random `(actual, predicted)`
/// pairs drawn from `classes`.
pub fn random_folds(seed: u64, folds: usize, samples: usize, classes: &[&str]) -> Vec<TestBatch> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..folds)
        .map(|_| {
            (0..samples)
                .map(|_| {
                    let actual = classes[rng.random_range(0..classes.len())];
                    let predicted = classes[rng.random_range(0..classes.len())];
                    LabeledSample::new(actual, predicted)
                })
                .collect()
        })
        .collect()
}

/// `splits` training batches, each a fresh shuffle of `base` without its
/// last `holdout` samples.
pub fn shuffled_training_splits(
    seed: u64,
    base: &TrainingBatch,
    splits: usize,
    holdout: usize,
) -> Vec<TrainingBatch> {
    let mut rng = StdRng::seed_from_u64(seed);
    let keep = base.len().saturating_sub(holdout);
    (0..splits)
        .map(|_| {
            let mut samples = base.samples().to_vec();
            samples.shuffle(&mut rng);
            samples.truncate(keep);
            TrainingBatch::new(samples)
        })
        .collect()
}
