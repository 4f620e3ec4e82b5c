use std::path::PathBuf;

use thiserror::Error;

/// Structural failure while reading raw sources or corpus files.
///
/// Every variant is fatal to a batch run: the job aborts without writing a
/// partial corpus.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: arrow::error::ArrowError,
    },

    #[error("{file}: missing expected column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
