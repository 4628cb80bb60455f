use crate::core::{TestBatch, TrainingBatch};
use chrono::{NaiveDate, NaiveDateTime};

/// Test batch from `(actual, predicted)` pairs.
pub fn test_batch(pairs: &[(&str, &str)]) -> TestBatch {
    TestBatch::from_pairs(pairs.iter().copied())
}

/// Training batch from `(text, label)` pairs.
pub fn training_batch(pairs: &[(&str, &str)]) -> TrainingBatch {
    TrainingBatch::from_pairs(pairs.iter().copied())
}

/// 05/03/2024 14:07:09
pub fn fixed_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(14, 7, 9))
        .expect("valid fixed date")
}
