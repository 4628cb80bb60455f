use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ReportFormat {
    /// Whole report as pretty-printed JSON.
    Json,
    /// Per-class performance table, comma separated.
    Csv,
    /// Per-class performance table, tab separated.
    Tsv,
    /// Static, self-contained HTML document.
    Html,
}

impl ReportFormat {
    /// File extension, without the dot.
    #[inline]
    pub fn extension(self) -> &'static str {
        self.into()
    }
}
