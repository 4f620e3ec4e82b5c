//! Cross-validated grid search over pipeline hyperparameters.

use tracing::{debug, info};

use crate::bayes::NbParams;
use crate::pipeline::{PipelineParams, TextPipeline};
use crate::vectorizer::TfIdfParams;

/// Folds used to score each candidate on the training split.
pub const CV_FOLDS: usize = 2;

/// Fixed worker-thread count for candidate evaluation. Wall-clock only:
/// workers share nothing mutable, and selection order is independent of
/// completion order.
pub const SEARCH_WORKERS: usize = 2;

/// Exhaustive hyperparameter grid.
#[derive(Debug, Clone)]
pub struct ParamGrid {
    pub max_df: Vec<f64>,
    pub min_df: Vec<usize>,
    pub ngram_max: Vec<usize>,
    pub sublinear_tf: Vec<bool>,
    pub alpha: Vec<f64>,
    pub fit_prior: Vec<bool>,
}

impl Default for ParamGrid {
    /// The production search space.
    fn default() -> Self {
        Self {
            max_df: vec![0.25, 0.5, 0.75, 1.0],
            min_df: vec![1, 2, 5],
            ngram_max: vec![1, 2, 3],
            sublinear_tf: vec![true, false],
            alpha: vec![1e-2, 1e-3, 1e-1],
            fit_prior: vec![true, false],
        }
    }
}

impl ParamGrid {
    /// Cartesian product of every knob, in declaration order.
    pub fn candidates(&self) -> Vec<PipelineParams> {
        let mut out = Vec::new();
        for &max_df in &self.max_df {
            for &min_df in &self.min_df {
                for &ngram_max in &self.ngram_max {
                    for &sublinear_tf in &self.sublinear_tf {
                        for &alpha in &self.alpha {
                            for &fit_prior in &self.fit_prior {
                                out.push(PipelineParams {
                                    tfidf: TfIdfParams {
                                        max_df,
                                        min_df,
                                        ngram_max,
                                        sublinear_tf,
                                    },
                                    nb: NbParams { alpha, fit_prior },
                                });
                            }
                        }
                    }
                }
            }
        }
        out
    }
}

/// Winning configuration and its cross-validated score.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub params: PipelineParams,
    pub cv_accuracy: f64,
}

/// Pick the best candidate by mean k-fold accuracy on the training split.
///
/// Each candidate's folds are fit and scored independently on a fixed pool
/// of [`SEARCH_WORKERS`] threads; the winner is the first candidate in grid
/// order reaching the top score, so results are deterministic.
pub fn grid_search(grid: &ParamGrid, texts: &[String], labels: &[i64]) -> SearchOutcome {
    let candidates = grid.candidates();
    assert!(!candidates.is_empty(), "empty parameter grid");

    let folds = fold_bounds(texts.len(), CV_FOLDS);
    info!(
        candidates = candidates.len(),
        folds = folds.len(),
        rows = texts.len(),
        "starting grid search"
    );

    let chunk_size = candidates.len().div_ceil(SEARCH_WORKERS);
    let scores: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .chunks(chunk_size)
            .map(|chunk| {
                let folds = &folds;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|params| cv_accuracy(params, texts, labels, folds))
                        .collect::<Vec<f64>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("grid-search worker panicked"))
            .collect()
    });

    let mut best = 0;
    for (index, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = index;
        }
    }

    info!(cv_accuracy = scores[best], params = ?candidates[best], "grid search finished");
    SearchOutcome {
        params: candidates[best].clone(),
        cv_accuracy: scores[best],
    }
}

/// Mean accuracy of a candidate over the precomputed folds.
fn cv_accuracy(
    params: &PipelineParams,
    texts: &[String],
    labels: &[i64],
    folds: &[(usize, usize)],
) -> f64 {
    let mut total = 0.0;
    for &(start, end) in folds {
        let mut train_texts = Vec::with_capacity(texts.len() - (end - start));
        let mut train_labels = Vec::with_capacity(train_texts.capacity());
        for i in (0..texts.len()).filter(|i| *i < start || *i >= end) {
            train_texts.push(texts[i].clone());
            train_labels.push(labels[i]);
        }

        let pipeline = TextPipeline::fit(params, &train_texts, &train_labels);
        total += pipeline.score(&texts[start..end], &labels[start..end]);
    }
    let mean = total / folds.len() as f64;
    debug!(?params, cv_accuracy = mean, "scored candidate");
    mean
}

/// Contiguous fold boundaries with sizes differing by at most one.
fn fold_bounds(n: usize, k: usize) -> Vec<(usize, usize)> {
    (0..k).map(|i| (i * n / k, (i + 1) * n / k)).collect()
}
