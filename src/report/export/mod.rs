mod delimited;
mod format;
mod html;

pub use format::ReportFormat;

use crate::core::ReportError;
use crate::report::ReportData;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

impl ReportData {
    /// Writes the report to `path` in the requested format.
    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ReportFormat) -> Result<(), ReportError> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        match fmt {
            ReportFormat::Json => serde_json::to_writer_pretty(&mut w, self)?,
            ReportFormat::Csv => delimited::write_delimited(self, &mut w, ',')?,
            ReportFormat::Tsv => delimited::write_delimited(self, &mut w, '\t')?,
            ReportFormat::Html => w.write_all(self.to_html().as_bytes())?,
        }
        w.flush()?;
        info!(path = %path.display(), format = %fmt, "report written");
        Ok(())
    }

    pub fn to_html(&self) -> String {
        html::render(self)
    }
}
