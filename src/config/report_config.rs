use crate::evaluation::LabelPolicy;
use crate::report::{ReportFormat, ReportMetadata};
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_stem() -> String {
    "ModelReport".to_string()
}

fn default_formats() -> Vec<ReportFormat> {
    vec![ReportFormat::Html]
}

/// Input of one report run, usually read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReportConfig {
    pub metadata: ReportMetadata,

    #[serde(default)]
    #[schemars(
        title = "Training Files",
        description = "One 'text,label' file per training split"
    )]
    pub training_files: Vec<PathBuf>,

    #[schemars(
        title = "Test Files",
        description = "One 'actual,predicted' file per test split",
        length(min = 1)
    )]
    pub test_files: Vec<PathBuf>,

    #[serde(default)]
    #[schemars(title = "Skip Header", description = "Ignore the first non-blank line of every file")]
    pub skip_header: bool,

    #[serde(default)]
    #[schemars(
        title = "Label Policy",
        description = "Union of all labels, or a declared superset"
    )]
    pub label_policy: LabelPolicy,

    #[serde(default = "default_output_dir")]
    #[schemars(title = "Output Directory")]
    pub output_dir: PathBuf,

    #[serde(default = "default_file_stem")]
    #[schemars(title = "File Stem", description = "Report file name without extension")]
    pub file_stem: String,

    #[serde(default = "default_formats")]
    #[schemars(title = "Formats", description = "Formats to export")]
    pub formats: Vec<ReportFormat>,
}

impl ReportConfig {
    pub fn schema() -> Schema {
        schema_for!(ReportConfig)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid report configuration")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Target file for `format`.
    pub fn output_path(&self, format: ReportFormat) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.file_stem, format.extension()))
    }
}
