pub mod export;
mod metadata;
mod model_report;
mod report_data;

pub use export::ReportFormat;
pub use metadata::{Reference, ReportMetadata};
pub use model_report::{DATE_FORMAT, EvaluationRun, ModelReport};
pub use report_data::ReportData;
