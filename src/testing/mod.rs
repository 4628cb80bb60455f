mod builders;
mod folds;

pub use builders::{fixed_date, test_batch, training_batch};
pub use folds::{random_folds, shuffled_training_splits};
