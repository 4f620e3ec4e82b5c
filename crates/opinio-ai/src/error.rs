use std::path::PathBuf;

use thiserror::Error;

use opinio_core::Language;

/// Failure while training, persisting, or loading a model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The requested language has no persisted artifact. Callers surface
    /// this as a user-facing "cannot classify" condition, never a crash.
    #[error("no trained model for '{language}' at {path}")]
    ModelUnavailable { language: Language, path: PathBuf },

    #[error("model artifact {path} has unsupported version {version}")]
    UnsupportedVersion { path: PathBuf, version: i64 },

    #[error("corpus for '{0}' has no rows")]
    EmptyCorpus(Language),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejection of a single submitted comment, before or during prediction.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("submission text is empty")]
    EmptySubmission,

    /// Detected language outside the supported set; raised before any model
    /// artifact is touched.
    #[error("unsupported language '{0}': only French and English comments can be classified")]
    UnsupportedLanguage(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}
