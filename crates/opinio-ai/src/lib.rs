//! Text classification: TF-IDF features, multinomial naive Bayes, grid
//! search, persisted model artifacts, and the submission classify facade.

mod artifact;
mod bayes;
mod error;
mod pipeline;
mod predict;
mod search;
mod service;
mod split;
mod train;
mod vectorizer;

pub use artifact::{MODEL_VERSION, ModelArtifact, artifact_path, model_file_name};
pub use bayes::{MultinomialNb, NbParams};
pub use error::{ClassifyError, ModelError};
pub use pipeline::{PipelineParams, TextPipeline};
pub use predict::predict;
pub use search::{CV_FOLDS, ParamGrid, SEARCH_WORKERS, SearchOutcome, grid_search};
pub use service::{Classification, classify_comment};
pub use split::{SPLIT_SEED, Split, TEST_FRACTION, train_test_split};
pub use train::{TrainOutcome, TrainReport, train_language};
pub use vectorizer::{SparseVec, TfIdfParams, TfIdfVectorizer};
