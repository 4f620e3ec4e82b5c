//! Multinomial naive Bayes over sparse TF-IDF features.

use serde::{Deserialize, Serialize};

use crate::vectorizer::SparseVec;

/// Classifier hyperparameters explored by the grid search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NbParams {
    /// Additive (Lidstone) smoothing constant.
    pub alpha: f64,
    /// Learn class priors from label frequencies; uniform priors otherwise.
    pub fit_prior: bool,
}

impl Default for NbParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            fit_prior: true,
        }
    }
}

/// Binary multinomial naive Bayes.
///
/// The one-vs-rest reduction for two polarities: one log-prior and one
/// per-feature log-likelihood table per class, decided by argmax. Feature
/// weights may be fractional (TF-IDF), which the multinomial likelihood
/// accepts as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    params: NbParams,
    class_log_prior: [f64; 2],
    /// `[class][feature]` smoothed log-likelihoods.
    feature_log_prob: Vec<Vec<f64>>,
    n_features: usize,
}

impl MultinomialNb {
    /// Fit on sparse feature vectors and binary labels.
    ///
    /// Labels are read as negative (`0`) or positive (anything else).
    pub fn fit(params: &NbParams, x: &[SparseVec], y: &[i64], n_features: usize) -> Self {
        debug_assert_eq!(x.len(), y.len());

        let mut class_counts = [0usize; 2];
        let mut feature_totals = vec![vec![0.0f64; n_features]; 2];

        for (features, &label) in x.iter().zip(y) {
            let class = (label != 0) as usize;
            class_counts[class] += 1;
            for &(index, weight) in features {
                feature_totals[class][index] += weight;
            }
        }

        let n_samples = x.len() as f64;
        let class_log_prior = if params.fit_prior {
            // An unobserved class gets ln(0) = -inf and can never win argmax.
            [
                (class_counts[0] as f64 / n_samples).ln(),
                (class_counts[1] as f64 / n_samples).ln(),
            ]
        } else {
            [0.5f64.ln(); 2]
        };

        let feature_log_prob = feature_totals
            .iter()
            .map(|totals| {
                let class_total: f64 = totals.iter().sum();
                let denominator = class_total + params.alpha * n_features as f64;
                totals
                    .iter()
                    .map(|count| ((count + params.alpha) / denominator).ln())
                    .collect()
            })
            .collect();

        Self {
            params: params.clone(),
            class_log_prior,
            feature_log_prob,
            n_features,
        }
    }

    /// Binary decision: 1 when the positive class scores higher.
    pub fn predict(&self, features: &SparseVec) -> i64 {
        let scores = self.joint_log_likelihood(features);
        (scores[1] > scores[0]) as i64
    }

    fn joint_log_likelihood(&self, features: &SparseVec) -> [f64; 2] {
        let mut scores = self.class_log_prior;
        for &(index, weight) in features {
            if index >= self.n_features {
                continue;
            }
            scores[0] += weight * self.feature_log_prob[0][index];
            scores[1] += weight * self.feature_log_prob[1][index];
        }
        scores
    }

    pub fn params(&self) -> &NbParams {
        &self.params
    }
}
