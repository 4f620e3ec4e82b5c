//! Vectorizer + classifier pipeline fit and scored as one unit.

use serde::{Deserialize, Serialize};

use crate::bayes::{MultinomialNb, NbParams};
use crate::vectorizer::{SparseVec, TfIdfParams, TfIdfVectorizer};

/// Hyperparameters for one pipeline candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineParams {
    pub tfidf: TfIdfParams,
    pub nb: NbParams,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            tfidf: TfIdfParams::default(),
            nb: NbParams::default(),
        }
    }
}

/// Fitted TF-IDF + naive-Bayes pipeline, persisted as one unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPipeline {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNb,
}

impl TextPipeline {
    /// Fit both stages on cleaned training texts.
    pub fn fit(params: &PipelineParams, texts: &[String], labels: &[i64]) -> Self {
        let vectorizer = TfIdfVectorizer::fit(params.tfidf.clone(), texts);
        let x: Vec<SparseVec> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let classifier = MultinomialNb::fit(&params.nb, &x, labels, vectorizer.vocabulary_size());
        Self {
            vectorizer,
            classifier,
        }
    }

    /// Binary decision for one cleaned text.
    pub fn predict(&self, text: &str) -> i64 {
        self.classifier.predict(&self.vectorizer.transform(text))
    }

    /// Accuracy over a labelled set.
    pub fn score(&self, texts: &[String], labels: &[i64]) -> f64 {
        if texts.is_empty() {
            return 0.0;
        }
        let hits = texts
            .iter()
            .zip(labels)
            .filter(|&(text, &label)| self.predict(text) == label)
            .count();
        hits as f64 / texts.len() as f64
    }

    pub fn params(&self) -> PipelineParams {
        PipelineParams {
            tfidf: self.vectorizer.params().clone(),
            nb: self.classifier.params().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> (Vec<String>, Vec<i64>) {
        let texts = [
            "service nul et affreux",
            "produit nul vraiment mauvais",
            "affreux vendeur mauvais service",
            "zero vraiment decevant",
            "tres bon produit magnifique",
            "excellent service j adore",
            "magnifique vraiment excellent",
            "j adore tres bon",
        ];
        let labels = vec![0, 0, 0, 0, 1, 1, 1, 1];
        (texts.iter().map(|t| t.to_string()).collect(), labels)
    }

    #[test]
    fn fit_then_predict_on_seen_vocabulary() {
        let (texts, labels) = corpus();
        let pipeline = TextPipeline::fit(&PipelineParams::default(), &texts, &labels);

        assert_eq!(pipeline.predict("affreux service nul"), 0);
        assert_eq!(pipeline.predict("excellent produit magnifique"), 1);
    }

    #[test]
    fn training_accuracy_is_high_on_separable_corpus() {
        let (texts, labels) = corpus();
        let pipeline = TextPipeline::fit(&PipelineParams::default(), &texts, &labels);
        assert!(pipeline.score(&texts, &labels) >= 0.9);
    }

    #[test]
    fn score_on_empty_set_is_zero() {
        let (texts, labels) = corpus();
        let pipeline = TextPipeline::fit(&PipelineParams::default(), &texts, &labels);
        assert_eq!(pipeline.score(&[], &[]), 0.0);
    }

    #[test]
    fn params_roundtrip_through_fit() {
        let params = PipelineParams {
            tfidf: TfIdfParams {
                max_df: 0.75,
                min_df: 1,
                ngram_max: 2,
                sublinear_tf: true,
            },
            nb: NbParams {
                alpha: 0.01,
                fit_prior: false,
            },
        };
        let (texts, labels) = corpus();
        let pipeline = TextPipeline::fit(&params, &texts, &labels);
        assert_eq!(pipeline.params(), params);
    }

    #[test]
    fn serde_roundtrip_preserves_predictions() {
        let (texts, labels) = corpus();
        let pipeline = TextPipeline::fit(&PipelineParams::default(), &texts, &labels);

        let json = serde_json::to_string(&pipeline).unwrap();
        let restored: TextPipeline = serde_json::from_str(&json).unwrap();

        for text in ["affreux service", "magnifique produit", "bon service"] {
            assert_eq!(pipeline.predict(text), restored.predict(text));
        }
    }
}
