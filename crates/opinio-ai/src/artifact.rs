//! Persisted per-language model artifacts.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use opinio_core::Language;

use crate::error::ModelError;
use crate::pipeline::{PipelineParams, TextPipeline};

/// Bump when the serialized layout changes incompatibly.
pub const MODEL_VERSION: i64 = 1;

/// File name of a language's model artifact (`model_ia_fr.json`).
pub fn model_file_name(language: Language) -> String {
    format!("model_ia_{}.json", language.code())
}

/// Full artifact path inside a model directory.
pub fn artifact_path(dir: &Path, language: Language) -> PathBuf {
    dir.join(model_file_name(language))
}

/// One language's trained model plus how it was selected.
///
/// Written once by the trainer, then only ever read: predictions reload the
/// file and never write back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_version: i64,
    pub language: Language,
    /// RFC 3339 timestamp.
    pub trained_at: String,
    /// Grid-search winner the pipeline was refit with.
    pub params: PipelineParams,
    /// Mean 2-fold accuracy of the winning candidate on the training split.
    pub cv_accuracy: f64,
    /// Accuracy on the untouched held-out split.
    pub test_accuracy: f64,
    pub pipeline: TextPipeline,
}

impl ModelArtifact {
    /// Whether a persisted artifact exists for the language.
    pub fn exists(dir: &Path, language: Language) -> bool {
        artifact_path(dir, language).is_file()
    }

    /// Serialize to `model_ia_<lang>.json` inside `dir`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, ModelError> {
        let path = artifact_path(dir, self.language);
        let file = File::create(&path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        info!(language = %self.language, path = %path.display(), "saved model artifact");
        Ok(path)
    }

    /// Load a language's artifact; a missing file is [`ModelError::ModelUnavailable`].
    pub fn load(dir: &Path, language: Language) -> Result<Self, ModelError> {
        let path = artifact_path(dir, language);
        if !path.is_file() {
            return Err(ModelError::ModelUnavailable { language, path });
        }

        let file = File::open(&path)?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))?;
        if artifact.model_version != MODEL_VERSION {
            return Err(ModelError::UnsupportedVersion {
                path,
                version: artifact.model_version,
            });
        }
        Ok(artifact)
    }
}
