use crate::config::ReportConfig;
use crate::core::ReportError;
use crate::report::{EvaluationRun, ModelReport, ReportData};
use crate::utils::file_parsing::{read_test_batch, read_training_batch};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Loads the split files of a [`ReportConfig`], builds the report and
/// writes every requested format.
pub struct ReportTask {
    config: ReportConfig,
    report: ModelReport,
}

impl ReportTask {
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        if config.test_files.is_empty() {
            return Err(ReportError::InvalidParameter(
                "test_files must list at least one file".into(),
            ));
        }
        if config.formats.is_empty() {
            return Err(ReportError::InvalidParameter(
                "formats must list at least one format".into(),
            ));
        }
        if config.file_stem.trim().is_empty() {
            return Err(ReportError::InvalidParameter("file_stem must not be empty".into()));
        }

        let report = ModelReport::new(config.metadata.clone())
            .with_label_policy(config.label_policy.clone());
        Ok(Self { config, report })
    }

    /// Reads every training and test file, in configuration order.
    pub fn load(&self) -> Result<EvaluationRun, ReportError> {
        let skip = self.config.skip_header;
        let training = self
            .config
            .training_files
            .iter()
            .map(|p| read_training_batch(p, skip))
            .collect::<Result<Vec<_>, _>>()?;
        let test = self
            .config
            .test_files
            .iter()
            .map(|p| read_test_batch(p, skip))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(EvaluationRun::new(training, test))
    }

    pub fn build(&self) -> Result<ReportData, ReportError> {
        self.report.create_report(&self.load()?)
    }

    /// Builds the report and returns the written file paths.
    pub fn run(&self) -> Result<Vec<PathBuf>, ReportError> {
        let start = Instant::now();
        let data = self.build()?;

        fs::create_dir_all(&self.config.output_dir)?;
        let mut written = Vec::with_capacity(self.config.formats.len());
        for &format in &self.config.formats {
            let path = self.config.output_path(format);
            data.export(&path, format)?;
            written.push(path);
        }

        info!(
            files = written.len(),
            seconds = start.elapsed().as_secs_f64(),
            "report task finished"
        );
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::LabelPolicy;
    use crate::report::{ReportFormat, ReportMetadata};
    use std::path::Path;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let p = dir.join(name);
        fs::write(&p, content).unwrap();
        p
    }

    fn config(dir: &Path) -> ReportConfig {
        ReportConfig {
            metadata: ReportMetadata::new("TestModel", "QA"),
            training_files: vec![
                write(dir, "train1.csv", "text,label\nnice room,Room\ngood food,Food\n"),
                write(dir, "train2.csv", "text,label\nbig bed,Room\n"),
            ],
            test_files: vec![
                write(dir, "test1.csv", "actual,predicted\nRoom,Room\nFood,Room\n"),
                write(dir, "test2.csv", "actual,predicted\nFood,Food\n"),
            ],
            skip_header: true,
            label_policy: LabelPolicy::Union,
            output_dir: dir.join("out"),
            file_stem: "Hotel".into(),
            formats: vec![ReportFormat::Json, ReportFormat::Csv, ReportFormat::Html],
        }
    }

    #[test]
    fn ctor_guards() {
        let dir = tempfile::tempdir().unwrap();

        let mut c = config(dir.path());
        c.test_files.clear();
        assert!(matches!(
            ReportTask::new(c),
            Err(ReportError::InvalidParameter(_))
        ));

        let mut c = config(dir.path());
        c.formats.clear();
        assert!(matches!(
            ReportTask::new(c),
            Err(ReportError::InvalidParameter(_))
        ));

        let mut c = config(dir.path());
        c.file_stem = " ".into();
        assert!(ReportTask::new(c).is_err());
    }

    #[test]
    fn loads_batches_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let task = ReportTask::new(config(dir.path())).unwrap();
        let run = task.load().unwrap();
        assert_eq!(run.training.len(), 2);
        assert_eq!(run.test.len(), 2);
        assert_eq!(run.test[0].len(), 2);
        assert_eq!(run.training[1].samples()[0].label, "Room");
    }

    #[test]
    fn run_writes_every_format() {
        let dir = tempfile::tempdir().unwrap();
        let task = ReportTask::new(config(dir.path())).unwrap();
        let written = task.run().unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("out/Hotel.json"),
                dir.path().join("out/Hotel.csv"),
                dir.path().join("out/Hotel.html"),
            ]
        );
        assert!(written.iter().all(|p| p.is_file()));

        let csv = fs::read_to_string(&written[1]).unwrap();
        assert!(csv.contains("accuracy,,,0.666667,3"));
    }

    #[test]
    fn build_reports_training_composition() {
        let dir = tempfile::tempdir().unwrap();
        let data = ReportTask::new(config(dir.path())).unwrap().build().unwrap();
        let ranked: Vec<_> = data.training.ranked().collect();
        assert_eq!(ranked, vec![("Room", 1.0), ("Food", 0.5)]);
    }

    #[test]
    fn malformed_file_surfaces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = config(dir.path());
        c.test_files.push(write(dir.path(), "bad.csv", "actual,predicted\nRoom\n"));
        let task = ReportTask::new(c).unwrap();
        assert!(matches!(
            task.run(),
            Err(ReportError::Parse { line: 2, .. })
        ));
    }
}
