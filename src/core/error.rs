use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by report generation.
///
/// Degenerate metric denominators are not errors: they resolve to `0.0`
/// inside the statistics derivation and never reach the caller.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    #[error("label '{label}' in batch {batch} is outside the label set")]
    LabelMismatch { label: String, batch: usize },

    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
