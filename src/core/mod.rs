pub mod batch;
pub mod error;
pub mod label_set;
pub mod samples;

pub use batch::{Batch, TestBatch, TrainingBatch};
pub use error::ReportError;
pub use label_set::LabelSet;
pub use samples::{Labeled, LabeledSample, TrainingSample};
