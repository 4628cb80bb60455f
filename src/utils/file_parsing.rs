use crate::core::{LabeledSample, ReportError, TestBatch, TrainingBatch, TrainingSample};
use std::fs;
use std::path::Path;
use tracing::debug;

#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

fn parse_error(path: &Path, line: u64, reason: impl Into<String>) -> ReportError {
    ReportError::Parse {
        path: path.to_path_buf(),
        line: line as usize,
        reason: reason.into(),
    }
}

/// Non-blank records with their 1-based line numbers, header dropped on request.
///
/// Double quotes follow CSV rules; single quotes only unwrap a whole field,
/// so apostrophes inside text are plain characters.
fn data_records(
    content: &str,
    skip_header: bool,
    path: &Path,
) -> Result<Vec<(u64, Vec<String>)>, ReportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            parse_error(path, line, e.to_string())
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, |p| p.line());
        let fields = record.iter().map(|f| strip_surrounding_quotes(f).to_string()).collect();
        records.push((line, fields));
    }
    Ok(records.into_iter().skip(usize::from(skip_header)).collect())
}

/// Parses `actual,predicted` lines.
pub fn parse_test_batch(content: &str, skip_header: bool, path: &Path) -> Result<TestBatch, ReportError> {
    data_records(content, skip_header, path)?
        .into_iter()
        .map(|(line, fields)| match fields.as_slice() {
            [actual, predicted] if !actual.is_empty() && !predicted.is_empty() => {
                Ok(LabeledSample::new(actual.as_str(), predicted.as_str()))
            }
            _ => Err(parse_error(
                path,
                line,
                format!("expected 'actual,predicted', got {} field(s)", fields.len()),
            )),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(TestBatch::new)
}

/// Parses `text,label` lines. The label is the last field; any earlier
/// fields are joined back into the text.
pub fn parse_training_batch(
    content: &str,
    skip_header: bool,
    path: &Path,
) -> Result<TrainingBatch, ReportError> {
    data_records(content, skip_header, path)?
        .into_iter()
        .map(|(line, fields)| match fields.split_last() {
            Some((label, text)) if !text.is_empty() && !label.is_empty() => {
                Ok(TrainingSample::new(text.join(","), label.as_str()))
            }
            _ => Err(parse_error(path, line, "expected 'text,label'")),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(TrainingBatch::new)
}

pub fn read_test_batch<P: AsRef<Path>>(path: P, skip_header: bool) -> Result<TestBatch, ReportError> {
    let path = path.as_ref();
    let batch = parse_test_batch(&fs::read_to_string(path)?, skip_header, path)?;
    debug!(path = %path.display(), samples = batch.len(), "loaded test batch");
    Ok(batch)
}

pub fn read_training_batch<P: AsRef<Path>>(
    path: P,
    skip_header: bool,
) -> Result<TrainingBatch, ReportError> {
    let path = path.as_ref();
    let batch = parse_training_batch(&fs::read_to_string(path)?, skip_header, path)?;
    debug!(path = %path.display(), samples = batch.len(), "loaded training batch");
    Ok(batch)
}
