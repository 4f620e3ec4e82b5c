//! Single-text prediction against a persisted model.

use std::path::Path;

use opinio_core::Language;

use crate::artifact::ModelArtifact;
use crate::error::ModelError;

/// Classify one cleaned text with the language's persisted model.
///
/// The artifact is reloaded from disk on every call and never written back.
/// Returns `true` for positive polarity.
pub fn predict(model_dir: &Path, language: Language, cleaned_text: &str) -> Result<bool, ModelError> {
    let artifact = ModelArtifact::load(model_dir, language)?;
    Ok(artifact.pipeline.predict(cleaned_text) == 1)
}
