//! Column-oriented canonical review table.

use std::sync::Arc;

use arrow::array::{Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;

use opinio_core::schema::corpus::{SATISFACTION, TEXT, corpus_schema};

use crate::DataSourceError;
use crate::ingest::{get_f64, get_string};

/// Canonical `(satisfaction, text)` rows for one language.
///
/// Labels are always 0 or 1, and there is a text entry for every label:
/// a row whose translation failed holds an empty string rather than being
/// dropped, so row position stays a valid join key across languages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewTable {
    labels: Vec<i64>,
    texts: Vec<String>,
}

impl ReviewTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pre-aligned columns.
    ///
    /// # Panics
    ///
    /// Panics when the columns differ in length.
    pub fn from_rows(labels: Vec<i64>, texts: Vec<String>) -> Self {
        assert_eq!(labels.len(), texts.len(), "misaligned review columns");
        Self { labels, texts }
    }

    pub fn push(&mut self, label: i64, text: String) {
        self.labels.push(label);
        self.texts.push(text);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Append all rows of `other`, preserving order.
    pub fn append(&mut self, mut other: ReviewTable) {
        self.labels.append(&mut other.labels);
        self.texts.append(&mut other.texts);
    }

    /// `(negative, positive)` row counts.
    pub fn label_counts(&self) -> (usize, usize) {
        let positive = self.labels.iter().filter(|&&l| l == 1).count();
        (self.len() - positive, positive)
    }

    /// Rows at `indices`, in the given order.
    pub fn select(&self, indices: &[usize]) -> ReviewTable {
        let labels = indices.iter().map(|&i| self.labels[i]).collect();
        let texts = indices.iter().map(|&i| self.texts[i].clone()).collect();
        ReviewTable { labels, texts }
    }

    /// Reproducible random sample of at most `amount` rows.
    pub fn sample(&self, amount: usize, seed: u64) -> ReviewTable {
        self.select(&sample_indices(self.len(), amount, seed))
    }

    /// Render as a RecordBatch with `satisfaction` as the first column.
    pub fn to_batch(&self) -> Result<RecordBatch, DataSourceError> {
        let batch = RecordBatch::try_new(
            Arc::new(corpus_schema()),
            vec![
                Arc::new(Int64Array::from(self.labels.clone())),
                Arc::new(StringArray::from(self.texts.clone())),
            ],
        )?;
        Ok(batch)
    }

    /// Rebuild from corpus-file batches.
    ///
    /// Expects `satisfaction` and `text` columns. Rows with a null label are
    /// skipped; null text becomes an empty string; any non-zero label counts
    /// as positive.
    pub fn from_batches(batches: &[RecordBatch], file: &str) -> Result<Self, DataSourceError> {
        let mut table = ReviewTable::new();
        for batch in batches {
            let labels = batch.column_by_name(SATISFACTION).ok_or_else(|| {
                DataSourceError::MissingColumn {
                    file: file.to_string(),
                    column: SATISFACTION.to_string(),
                }
            })?;
            let texts =
                batch
                    .column_by_name(TEXT)
                    .ok_or_else(|| DataSourceError::MissingColumn {
                        file: file.to_string(),
                        column: TEXT.to_string(),
                    })?;

            for row in 0..batch.num_rows() {
                let Some(label) = get_f64(labels.as_ref(), row) else {
                    continue;
                };
                let text = get_string(texts.as_ref(), row).unwrap_or_default();
                table.push((label != 0.0) as i64, text);
            }
        }
        Ok(table)
    }
}

/// Reproducible random choice of at most `amount` distinct indices in `0..len`.
pub fn sample_indices(len: usize, amount: usize, seed: u64) -> Vec<usize> {
    let amount = amount.min(len);
    let mut rng = StdRng::seed_from_u64(seed);
    index::sample(&mut rng, len, amount).into_vec()
}
