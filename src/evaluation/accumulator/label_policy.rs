use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the accumulator fixes the rows/columns of every confusion matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "labels", rename_all = "kebab-case")]
pub enum LabelPolicy {
    /// Union of actual and predicted labels across all batches, first-seen order.
    #[default]
    Union,
    /// Pre-declared superset, in the given order. Any other label is a mismatch.
    Declared(Vec<String>),
}
