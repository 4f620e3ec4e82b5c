//! Per-language training job.

use std::path::{Path, PathBuf};

use tracing::info;

use opinio_core::{Language, clean_text};

use crate::artifact::{MODEL_VERSION, ModelArtifact, artifact_path};
use crate::error::ModelError;
use crate::pipeline::{PipelineParams, TextPipeline};
use crate::search::{ParamGrid, grid_search};
use crate::split::{SPLIT_SEED, TEST_FRACTION, train_test_split};

/// What the training job decided for one language.
#[derive(Debug)]
pub enum TrainOutcome {
    /// An artifact already exists; nothing was touched.
    AlreadyTrained(PathBuf),
    Trained(TrainReport),
}

/// Summary of a completed training run.
#[derive(Debug)]
pub struct TrainReport {
    pub language: Language,
    pub params: PipelineParams,
    pub cv_accuracy: f64,
    pub test_accuracy: f64,
    pub train_rows: usize,
    pub test_rows: usize,
    pub artifact_path: PathBuf,
}

/// Train and persist a language's classifier, unless one already exists.
///
/// Training is create-if-absent: an existing artifact short-circuits the job
/// and is never overwritten. The corpus text is passed raw; this function
/// applies the same cleaning the inference path uses, so the vectorizer only
/// ever sees canonical text.
pub fn train_language(
    model_dir: &Path,
    language: Language,
    labels: &[i64],
    texts: &[String],
    grid: &ParamGrid,
) -> Result<TrainOutcome, ModelError> {
    if ModelArtifact::exists(model_dir, language) {
        info!(language = %language, "model artifact already present, skipping training");
        return Ok(TrainOutcome::AlreadyTrained(artifact_path(
            model_dir, language,
        )));
    }
    if texts.is_empty() {
        return Err(ModelError::EmptyCorpus(language));
    }

    let cleaned: Vec<String> = texts.iter().map(|t| clean_text(t, language)).collect();
    let split = train_test_split(&cleaned, labels, TEST_FRACTION, SPLIT_SEED);
    info!(
        language = %language,
        train = split.train_texts.len(),
        test = split.test_texts.len(),
        "split corpus"
    );

    let outcome = grid_search(grid, &split.train_texts, &split.train_labels);
    let pipeline = TextPipeline::fit(&outcome.params, &split.train_texts, &split.train_labels);
    let test_accuracy = pipeline.score(&split.test_texts, &split.test_labels);
    info!(
        language = %language,
        cv_accuracy = outcome.cv_accuracy,
        test_accuracy,
        "selected model"
    );

    let artifact = ModelArtifact {
        model_version: MODEL_VERSION,
        language,
        trained_at: chrono::Utc::now().to_rfc3339(),
        params: outcome.params.clone(),
        cv_accuracy: outcome.cv_accuracy,
        test_accuracy,
        pipeline,
    };
    let path = artifact.save(model_dir)?;

    Ok(TrainOutcome::Trained(TrainReport {
        language,
        params: outcome.params,
        cv_accuracy: outcome.cv_accuracy,
        test_accuracy,
        train_rows: split.train_texts.len(),
        test_rows: split.test_texts.len(),
        artifact_path: path,
    }))
}
