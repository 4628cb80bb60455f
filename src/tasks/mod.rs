mod report_task;

pub use report_task::ReportTask;
