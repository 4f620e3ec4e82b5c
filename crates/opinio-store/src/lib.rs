//! Storage layer: raw source ingestion, normalization, corpus persistence.

mod corpus;
mod error;
mod ingest;
mod source;
mod table;

pub use corpus::{CorpusStore, corpus_file_name};
pub use error::DataSourceError;
pub use ingest::read_csv;
pub use source::{
    NormalizedSource, SAMPLE_SEED, SAMPLE_SIZE, SourceKind, SourceSpec, default_sources,
    normalize_source,
};
pub use table::{ReviewTable, sample_indices};
