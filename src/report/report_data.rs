use crate::composition::{ColorAssignment, Composition};
use crate::evaluation::{ConfusionMatrix, Statistics};
use crate::report::ReportMetadata;
use serde::Serialize;

/// Everything a renderer needs for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportData {
    pub metadata: ReportMetadata,
    /// Creation time, `dd/mm/YYYY HH:MM:SS`.
    pub date: String,
    pub training: Composition,
    pub test: Composition,
    pub colors: ColorAssignment,
    pub confusion_matrix: ConfusionMatrix,
    /// Confusion matrix rows in percent of each actual class.
    pub normalized_confusion_matrix: Vec<Vec<f64>>,
    pub statistics: Statistics,
    pub total_correct: u64,
    pub total_count: u64,
}

impl ReportData {
    #[inline]
    pub fn accuracy(&self) -> f64 {
        self.statistics.aggregate.accuracy
    }
}
