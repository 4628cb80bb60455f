use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Reference {
    #[schemars(title = "Name", description = "Display name of the link")]
    pub name: String,
    #[schemars(title = "URL")]
    pub url: String,
}

impl Reference {
    pub fn new<N: Into<String>, U: Into<String>>(name: N, url: U) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Overview section of a report: who built which model, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportMetadata {
    #[schemars(title = "Model Name")]
    pub model_name: String,

    #[schemars(title = "Creator", description = "Author of the report")]
    pub creator: String,

    #[serde(default)]
    #[schemars(
        title = "ML Principle",
        description = "Underlying learning principle (e.g. Naive Bayes)"
    )]
    pub ml_principle: String,

    #[serde(default)]
    #[schemars(title = "References", description = "Links listed in the overview, in order")]
    pub references: Vec<Reference>,

    #[serde(default)]
    #[schemars(title = "Algorithm Description")]
    pub algorithm_description: String,

    #[serde(default)]
    #[schemars(
        title = "Description Graphic",
        description = "Image placed next to the algorithm description"
    )]
    pub description_graphic: Option<PathBuf>,

    #[serde(default)]
    #[schemars(title = "Graphic Description", description = "Caption of the description graphic")]
    pub graphic_description: String,

    #[serde(default)]
    #[schemars(title = "Dataset Version")]
    pub dataset_version: Option<String>,

    #[serde(default)]
    #[schemars(title = "Build Id", description = "Identifier of the evaluated model build")]
    pub build_id: Option<String>,
}

impl ReportMetadata {
    pub fn new<M: Into<String>, C: Into<String>>(model_name: M, creator: C) -> Self {
        Self {
            model_name: model_name.into(),
            creator: creator.into(),
            ..Self::default()
        }
    }

    pub fn with_ml_principle<S: Into<String>>(mut self, principle: S) -> Self {
        self.ml_principle = principle.into();
        self
    }

    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }

    pub fn with_algorithm_description<S: Into<String>>(mut self, description: S) -> Self {
        self.algorithm_description = description.into();
        self
    }

    pub fn with_graphic<P: Into<PathBuf>, S: Into<String>>(mut self, path: P, caption: S) -> Self {
        self.description_graphic = Some(path.into());
        self.graphic_description = caption.into();
        self
    }

    pub fn with_dataset_version<S: Into<String>>(mut self, version: S) -> Self {
        self.dataset_version = Some(version.into());
        self
    }

    pub fn with_build_id<S: Into<String>>(mut self, id: S) -> Self {
        self.build_id = Some(id.into());
        self
    }
}
