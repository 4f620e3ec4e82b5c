//! Corpus build pipeline: normalize each raw source, translate the gaps,
//! and write the per-language corpus files.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use opinio_core::{Language, ProgressSink};
use opinio_store::{
    CorpusStore, NormalizedSource, ReviewTable, default_sources, normalize_source, read_csv,
};
use opinio_translate::{Translate, translate_rows};

/// Row counts of a completed build.
pub struct BuildStats {
    pub skipped: bool,
    pub fr_rows: usize,
    pub en_rows: usize,
}

/// Run the full corpus build: read raw CSVs → normalize → translate gaps →
/// concatenate → write `dataframe_fr.csv` and `dataframe_en.csv`.
///
/// No-op when both corpus files already exist. Every raw file is validated
/// up front, so a missing source aborts before any translation work starts
/// and nothing partial is ever written.
pub async fn run_corpus_pipeline(
    data_dir: &Path,
    translator: &dyn Translate,
    delay: Duration,
    sink: &dyn ProgressSink,
) -> anyhow::Result<BuildStats> {
    let store = CorpusStore::new(data_dir);
    if store.both_exist() {
        info!("corpus files already present, nothing to build");
        return Ok(BuildStats {
            skipped: true,
            fr_rows: 0,
            en_rows: 0,
        });
    }

    let sources = default_sources();
    for spec in &sources {
        let path = data_dir.join(spec.file);
        anyhow::ensure!(path.is_file(), "source file not found: {}", path.display());
    }

    let mut corpus_fr = ReviewTable::new();
    let mut corpus_en = ReviewTable::new();

    for spec in &sources {
        sink.on_stage_start(spec.file);

        let batches =
            read_csv(&data_dir.join(spec.file)).with_context(|| format!("reading {}", spec.file))?;
        let NormalizedSource { fr, en, .. } = normalize_source(spec, &batches)
            .with_context(|| format!("normalizing {}", spec.file))?;

        let (mut fr, mut en) = (fr, en);
        if spec.kind.needs_augmentation() {
            let native_language = spec.kind.native_language();
            let counterpart = native_language.other();
            let native = match native_language {
                Language::Fr => fr.as_ref(),
                Language::En => en.as_ref(),
            };
            if let Some(native) = native {
                let translated = translate_rows(
                    translator,
                    native.texts(),
                    native_language,
                    counterpart,
                    delay,
                    sink,
                )
                .await;
                let table = ReviewTable::from_rows(native.labels().to_vec(), translated);
                match counterpart {
                    Language::Fr => fr = Some(table),
                    Language::En => en = Some(table),
                }
            }
        }

        let mut rows = 0;
        if let Some(table) = fr {
            rows += table.len();
            corpus_fr.append(table);
        }
        if let Some(table) = en {
            rows += table.len();
            corpus_en.append(table);
        }
        sink.on_stage_end(spec.file, rows);
    }

    let (fr_negative, fr_positive) = corpus_fr.label_counts();
    let (en_negative, en_positive) = corpus_en.label_counts();
    info!(negative = fr_negative, positive = fr_positive, "french corpus distribution");
    info!(negative = en_negative, positive = en_positive, "english corpus distribution");

    store
        .write(Language::Fr, &corpus_fr)
        .context("writing french corpus")?;
    store
        .write(Language::En, &corpus_en)
        .context("writing english corpus")?;

    Ok(BuildStats {
        skipped: false,
        fr_rows: corpus_fr.len(),
        en_rows: corpus_en.len(),
    })
}
