//! Training entry: read each language's corpus and fit its classifier.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use opinio_ai::{ModelArtifact, ParamGrid, TrainOutcome, train_language};
use opinio_core::Language;
use opinio_store::CorpusStore;

/// Train every language whose model artifact is absent.
///
/// Languages are independent: an existing artifact is skipped without even
/// reading that language's corpus, and a failure for one language surfaces
/// before the next is attempted.
pub fn run_training(data_dir: &Path) -> anyhow::Result<()> {
    let store = CorpusStore::new(data_dir);
    let grid = ParamGrid::default();

    for language in Language::ALL {
        if ModelArtifact::exists(data_dir, language) {
            info!(language = %language, "model already trained, skipping");
            continue;
        }

        let table = store.read(language).with_context(|| {
            format!("reading the '{language}' corpus; run build-corpus first")
        })?;

        match train_language(data_dir, language, table.labels(), table.texts(), &grid)? {
            TrainOutcome::AlreadyTrained(path) => {
                info!(language = %language, path = %path.display(), "model already trained");
            }
            TrainOutcome::Trained(report) => {
                info!(
                    language = %language,
                    cv_accuracy = report.cv_accuracy,
                    test_accuracy = report.test_accuracy,
                    train_rows = report.train_rows,
                    test_rows = report.test_rows,
                    params = ?report.params,
                    "trained model"
                );
            }
        }
    }
    Ok(())
}
