//! Persisted per-language corpus files.

use std::fs::File;
use std::path::PathBuf;

use arrow::csv::WriterBuilder;
use tracing::info;

use opinio_core::Language;

use crate::ingest::read_csv;
use crate::table::ReviewTable;
use crate::DataSourceError;

/// File name of a language's persisted corpus (`dataframe_fr.csv`).
pub fn corpus_file_name(language: Language) -> String {
    format!("dataframe_{}.csv", language.code())
}

/// Corpus file store rooted at a data directory.
///
/// The corpus lifecycle is create-once: [`both_exist`](Self::both_exist)
/// backs the build job's no-op contract, and regeneration means deleting the
/// files and re-running the job.
pub struct CorpusStore {
    dir: PathBuf,
}

impl CorpusStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of a language's corpus file.
    pub fn path(&self, language: Language) -> PathBuf {
        self.dir.join(corpus_file_name(language))
    }

    pub fn exists(&self, language: Language) -> bool {
        self.path(language).is_file()
    }

    /// Whether every supported language already has a corpus file.
    pub fn both_exist(&self) -> bool {
        Language::ALL.iter().all(|l| self.exists(*l))
    }

    /// Write a language's corpus file: header plus `satisfaction,text` rows.
    pub fn write(
        &self,
        language: Language,
        table: &ReviewTable,
    ) -> Result<PathBuf, DataSourceError> {
        let path = self.path(language);
        let file = File::create(&path)?;
        let mut writer = WriterBuilder::new().with_header(true).build(file);
        writer.write(&table.to_batch()?)?;
        info!(language = %language, rows = table.len(), path = %path.display(), "wrote corpus file");
        Ok(path)
    }

    /// Read a language's corpus file back into memory.
    pub fn read(&self, language: Language) -> Result<ReviewTable, DataSourceError> {
        let batches = read_csv(&self.path(language))?;
        ReviewTable::from_batches(&batches, &corpus_file_name(language))
    }
}
