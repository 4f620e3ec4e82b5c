//! Raw source registry and per-source normalization.
//!
//! Each raw review export maps onto the canonical `(satisfaction, text)`
//! shape through a [`SourceKind`] variant carrying its column names and
//! label derivation; dispatch is on the variant, never on the file name.

use arrow::record_batch::RecordBatch;

use opinio_core::Language;

use crate::DataSourceError;
use crate::ingest::{get_f64, get_string};
use crate::table::{ReviewTable, sample_indices};

/// Rows kept from each externally-collected source.
pub const SAMPLE_SIZE: usize = 200;
/// Seed for the per-source sample, fixed so rebuilt corpora are identical.
pub const SAMPLE_SEED: u64 = 42;

/// How a raw source file maps onto the canonical review shape.
#[derive(Debug, Clone)]
pub enum SourceKind {
    /// 1–5 star ratings; positive at or above `threshold`. May carry a
    /// ready-made counterpart translation column. Sampled.
    StarRating {
        native: Language,
        text: &'static str,
        rating: &'static str,
        translation: Option<&'static str>,
        threshold: f64,
    },
    /// Labels already binary; native-language text only. Sampled.
    Binary {
        native: Language,
        text: &'static str,
        label: &'static str,
    },
    /// Pre-labelled synthetic reviews in a single language; used whole.
    Synthetic {
        language: Language,
        text: &'static str,
        label: &'static str,
    },
}

impl SourceKind {
    /// Whether the counterpart language must be synthesized by translation.
    ///
    /// Synthetic sources come in per-language pairs and star-rating sources
    /// may ship their own translation column; everything else needs the
    /// augmenter to fill the gap.
    pub fn needs_augmentation(&self) -> bool {
        match self {
            SourceKind::StarRating { translation, .. } => translation.is_none(),
            SourceKind::Binary { .. } => true,
            SourceKind::Synthetic { .. } => false,
        }
    }

    /// The language of the source's own text column.
    pub fn native_language(&self) -> Language {
        match self {
            SourceKind::StarRating { native, .. } | SourceKind::Binary { native, .. } => *native,
            SourceKind::Synthetic { language, .. } => *language,
        }
    }
}

/// One raw source file and its normalization policy.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub file: &'static str,
    pub kind: SourceKind,
}

/// The raw review sources the corpus is built from.
pub fn default_sources() -> Vec<SourceSpec> {
    let synthetic = |file, language| SourceSpec {
        file,
        kind: SourceKind::Synthetic {
            language,
            text: "review",
            label: "satisfaction",
        },
    };

    vec![
        // Cinema reviews, already binary-labelled, French only.
        SourceSpec {
            file: "allocine_french_review.csv",
            kind: SourceKind::Binary {
                native: Language::Fr,
                text: "review",
                label: "polarity",
            },
        },
        // Product reviews with 1–5 star ratings and a bundled English translation.
        SourceSpec {
            file: "amazon_fr_en_review.csv",
            kind: SourceKind::StarRating {
                native: Language::Fr,
                text: "review",
                rating: "rating",
                translation: Some("translation"),
                threshold: 2.5,
            },
        },
        // Short-message sentiment dump, already binary-labelled, French only.
        SourceSpec {
            file: "french_tweets.csv",
            kind: SourceKind::Binary {
                native: Language::Fr,
                text: "text",
                label: "label",
            },
        },
        // Synthetic reviews generated per language; small, used whole.
        synthetic("chatgpt_fr.csv", Language::Fr),
        synthetic("chatgpt_en.csv", Language::En),
        synthetic("claude_fr.csv", Language::Fr),
        synthetic("claude_en.csv", Language::En),
        synthetic("lechat_fr.csv", Language::Fr),
        synthetic("lechat_en.csv", Language::En),
    ]
}

/// Canonical tables produced from one source, keyed by language.
///
/// A side is `None` when the source does not cover that language natively;
/// the pipeline decides (via [`SourceKind::needs_augmentation`]) whether the
/// gap is translated or simply left to the paired source file.
#[derive(Debug)]
pub struct NormalizedSource {
    pub file: &'static str,
    pub fr: Option<ReviewTable>,
    pub en: Option<ReviewTable>,
}

impl NormalizedSource {
    fn single(spec: &SourceSpec, language: Language, table: ReviewTable) -> Self {
        let (fr, en) = match language {
            Language::Fr => (Some(table), None),
            Language::En => (None, Some(table)),
        };
        Self {
            file: spec.file,
            fr,
            en,
        }
    }
}

/// Normalize one source's record batches into canonical per-language tables.
///
/// Labels always come out as 0 or 1 and texts are never null (a null text
/// cell becomes an empty string). Rows whose label cell is null are dropped;
/// there is nothing to learn from them. Unmapped source columns (urls,
/// export indices, ratings once consumed) are simply not carried over.
pub fn normalize_source(
    spec: &SourceSpec,
    batches: &[RecordBatch],
) -> Result<NormalizedSource, DataSourceError> {
    match &spec.kind {
        SourceKind::Binary {
            native,
            text,
            label,
        } => {
            let rows = extract_rows(spec.file, batches, label, text, None)?;
            let table = binary_table(&rows);
            Ok(NormalizedSource::single(
                spec,
                *native,
                table.sample(SAMPLE_SIZE, SAMPLE_SEED),
            ))
        }

        SourceKind::Synthetic {
            language,
            text,
            label,
        } => {
            let rows = extract_rows(spec.file, batches, label, text, None)?;
            Ok(NormalizedSource::single(spec, *language, binary_table(&rows)))
        }

        SourceKind::StarRating {
            native,
            text,
            rating,
            translation,
            threshold,
        } => {
            let rows = extract_rows(spec.file, batches, rating, text, *translation)?;

            let mut native_table = ReviewTable::new();
            let mut counterpart = translation.map(|_| ReviewTable::new());
            for (value, text, translated) in &rows {
                let label = (*value >= *threshold) as i64;
                native_table.push(label, text.clone());
                if let Some(table) = counterpart.as_mut() {
                    table.push(label, translated.clone().unwrap_or_default());
                }
            }

            // One index draw for both languages keeps the sampled rows aligned.
            let indices = sample_indices(native_table.len(), SAMPLE_SIZE, SAMPLE_SEED);
            let native_table = native_table.select(&indices);
            let counterpart = counterpart.map(|t| t.select(&indices));

            let mut normalized = NormalizedSource::single(spec, *native, native_table);
            if let Some(table) = counterpart {
                match native.other() {
                    Language::Fr => normalized.fr = Some(table),
                    Language::En => normalized.en = Some(table),
                }
            }
            Ok(normalized)
        }
    }
}

/// Pull `(label-ish value, text, optional translation)` rows out of batches.
///
/// Rows with a null value cell are dropped; null text cells become `""`.
fn extract_rows(
    file: &str,
    batches: &[RecordBatch],
    value_column: &str,
    text_column: &str,
    translation_column: Option<&str>,
) -> Result<Vec<(f64, String, Option<String>)>, DataSourceError> {
    let mut rows = Vec::new();
    for batch in batches {
        let missing = |column: &str| DataSourceError::MissingColumn {
            file: file.to_string(),
            column: column.to_string(),
        };

        let values = batch
            .column_by_name(value_column)
            .ok_or_else(|| missing(value_column))?;
        let texts = batch
            .column_by_name(text_column)
            .ok_or_else(|| missing(text_column))?;
        let translations = translation_column
            .map(|name| batch.column_by_name(name).ok_or_else(|| missing(name)))
            .transpose()?;

        for row in 0..batch.num_rows() {
            let Some(value) = get_f64(values.as_ref(), row) else {
                continue;
            };
            let text = get_string(texts.as_ref(), row).unwrap_or_default();
            let translated = translations
                .map(|col| get_string(col.as_ref(), row).unwrap_or_default());
            rows.push((value, text, translated));
        }
    }
    Ok(rows)
}

/// Build a table from verbatim binary labels; any non-zero value is positive.
fn binary_table(rows: &[(f64, String, Option<String>)]) -> ReviewTable {
    let mut table = ReviewTable::new();
    for (value, text, _) in rows {
        table.push((*value != 0.0) as i64, text.clone());
    }
    table
}
