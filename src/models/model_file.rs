use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Result;
use crate::models::{CountsModel, ProbabilisticModel, TableModel};

#[derive(Debug, Error)]
pub enum ModelFileError {
    #[error("failed to access model file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse model file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    Invalid(String),
}

/// A model as persisted on disk, tagged by `"kind"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ModelFile {
    Table(TableModel),
    Counts(CountsModel),
}

impl ModelFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelFileError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let model: ModelFile = serde_json::from_reader(reader)?;
        model.validate()?;
        tracing::debug!(
            path = %path.as_ref().display(),
            classes = model.labels().len(),
            "loaded model file"
        );
        Ok(model)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelFileError> {
        let model: ModelFile = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ModelFileError> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Class labels in file order.
    pub fn labels(&self) -> Vec<String> {
        match self {
            ModelFile::Table(m) => m.labels(),
            ModelFile::Counts(m) => m.labels(),
        }
    }

    fn validate(&self) -> Result<(), ModelFileError> {
        let labels = self.labels();
        if labels.is_empty() {
            return Err(ModelFileError::Invalid("model declares no classes".into()));
        }
        for (i, label) in labels.iter().enumerate() {
            if labels[..i].contains(label) {
                return Err(ModelFileError::Invalid(format!(
                    "class '{label}' is declared more than once"
                )));
            }
        }
        Ok(())
    }
}

impl ProbabilisticModel<String, String> for ModelFile {
    fn prior(&self, class: &String) -> Result<f64> {
        match self {
            ModelFile::Table(m) => m.prior(class),
            ModelFile::Counts(m) => m.prior(class),
        }
    }

    fn conditional_probability(&self, feature: &String, class: &String) -> Result<f64> {
        match self {
            ModelFile::Table(m) => m.conditional_probability(feature, class),
            ModelFile::Counts(m) => m.conditional_probability(feature, class),
        }
    }
}
