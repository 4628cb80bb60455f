use serde::{Deserialize, Serialize};

/// Anything that carries a class label usable as a composition key.
pub trait Labeled {
    fn label(&self) -> &str;
}

/// One classified test sample, always ordered `(actual, predicted)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledSample {
    pub actual: String,
    pub predicted: String,
}

impl LabeledSample {
    pub fn new<A: Into<String>, P: Into<String>>(actual: A, predicted: P) -> Self {
        Self {
            actual: actual.into(),
            predicted: predicted.into(),
        }
    }

    #[inline]
    pub fn is_correct(&self) -> bool {
        self.actual == self.predicted
    }
}

impl<A: Into<String>, P: Into<String>> From<(A, P)> for LabeledSample {
    fn from((actual, predicted): (A, P)) -> Self {
        Self::new(actual, predicted)
    }
}

/// Test composition counts the actual class.
impl Labeled for LabeledSample {
    fn label(&self) -> &str {
        &self.actual
    }
}

/// One training sample: raw text and its class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainingSample {
    pub text: String,
    pub label: String,
}

impl TrainingSample {
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

impl<T: Into<String>, L: Into<String>> From<(T, L)> for TrainingSample {
    fn from((text, label): (T, L)) -> Self {
        Self::new(text, label)
    }
}

impl Labeled for TrainingSample {
    fn label(&self) -> &str {
        &self.label
    }
}
