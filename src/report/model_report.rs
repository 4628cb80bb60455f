use crate::composition::{ColorAssignment, Composition};
use crate::core::{ReportError, TestBatch, TrainingBatch};
use crate::evaluation::{LabelPolicy, MetricsAccumulator, Statistics};
use crate::report::{ReportData, ReportMetadata};
use chrono::{Local, NaiveDateTime};
use tracing::info;

pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// The full, immutable input of one report: every training split and every
/// test split.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationRun {
    pub training: Vec<TrainingBatch>,
    pub test: Vec<TestBatch>,
}

impl EvaluationRun {
    pub fn new(training: Vec<TrainingBatch>, test: Vec<TestBatch>) -> Self {
        Self { training, test }
    }

    pub fn with_training_batch(mut self, batch: TrainingBatch) -> Self {
        self.training.push(batch);
        self
    }

    pub fn with_test_batch(mut self, batch: TestBatch) -> Self {
        self.test.push(batch);
        self
    }
}

/// Turns an [`EvaluationRun`] into [`ReportData`].
///
/// Nothing is retained between calls; each report is computed from scratch.
#[derive(Debug, Clone)]
pub struct ModelReport {
    metadata: ReportMetadata,
    label_policy: LabelPolicy,
}

impl ModelReport {
    pub fn new(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            label_policy: LabelPolicy::default(),
        }
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    pub fn create_report(&self, run: &EvaluationRun) -> Result<ReportData, ReportError> {
        self.create_report_at(run, Local::now().naive_local())
    }

    /// Same as [`create_report`](Self::create_report) with a fixed report date.
    pub fn create_report_at(
        &self,
        run: &EvaluationRun,
        date: NaiveDateTime,
    ) -> Result<ReportData, ReportError> {
        let accumulation = MetricsAccumulator::new(self.label_policy.clone()).accumulate(&run.test)?;
        let statistics = Statistics::derive(&accumulation)?;

        let training = Composition::summarize(&run.training);
        let test = Composition::summarize(&run.test);
        let mut colors = ColorAssignment::new();
        colors.assign_all(&training);
        colors.assign_all(&test);

        info!(
            model = %self.metadata.model_name,
            training_splits = run.training.len(),
            test_splits = run.test.len(),
            accuracy = statistics.aggregate.accuracy,
            "report created"
        );

        Ok(ReportData {
            metadata: self.metadata.clone(),
            date: date.format(DATE_FORMAT).to_string(),
            training,
            test,
            colors,
            normalized_confusion_matrix: accumulation.total.row_normalized(),
            confusion_matrix: accumulation.total,
            statistics,
            total_correct: accumulation.total_correct,
            total_count: accumulation.total_count,
        })
    }
}
