//! Term-frequency / inverse-document-frequency feature extraction.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Sparse feature vector: `(vocabulary index, weight)` pairs, index-sorted.
pub type SparseVec = Vec<(usize, f64)>;

/// Vectorizer hyperparameters explored by the grid search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfParams {
    /// Drop terms appearing in more than this fraction of documents.
    pub max_df: f64,
    /// Drop terms appearing in fewer than this many documents.
    pub min_df: usize,
    /// Longest n-gram emitted; 1 keeps unigrams only.
    pub ngram_max: usize,
    /// Dampen raw counts to `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for TfIdfParams {
    fn default() -> Self {
        Self {
            max_df: 1.0,
            min_df: 1,
            ngram_max: 1,
            sublinear_tf: false,
        }
    }
}

/// TF-IDF vectorizer over whitespace-tokenized, pre-cleaned text.
///
/// The vocabulary is index-assigned in sorted term order and kept in a
/// `BTreeMap`, so a fitted vectorizer serializes identically run to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    params: TfIdfParams,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Fit vocabulary and idf weights on training documents.
    pub fn fit(params: TfIdfParams, documents: &[String]) -> Self {
        let n_documents = documents.len();

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique: HashSet<String> = ngrams(doc, params.ngram_max).collect();
            for gram in unique {
                *document_frequency.entry(gram).or_insert(0) += 1;
            }
        }

        // max_df is a fraction of documents, min_df an absolute count.
        let max_count = params.max_df * n_documents as f64 + 1e-9;
        let mut terms: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|(_, df)| *df >= params.min_df && (*df as f64) <= max_count)
            .collect();
        terms.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(terms.len());
        for (index, (term, df)) in terms.into_iter().enumerate() {
            vocabulary.insert(term, index);
            // Smoothed idf: ln((1 + N) / (1 + df)) + 1.
            idf.push(((1.0 + n_documents as f64) / (1.0 + df as f64)).ln() + 1.0);
        }

        Self {
            params,
            vocabulary,
            idf,
            n_documents,
        }
    }

    /// Transform one document into an L2-normalized sparse feature vector.
    ///
    /// Terms outside the fitted vocabulary are ignored; a document with no
    /// known terms maps to the empty vector.
    pub fn transform(&self, document: &str) -> SparseVec {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for gram in ngrams(document, self.params.ngram_max) {
            if let Some(&index) = self.vocabulary.get(&gram) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseVec = counts
            .into_iter()
            .map(|(index, tf)| {
                let tf = if self.params.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (index, tf * self.idf[index])
            })
            .collect();

        let norm = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut features {
                *w /= norm;
            }
        }

        features.sort_by_key(|(index, _)| *index);
        features
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn params(&self) -> &TfIdfParams {
        &self.params
    }
}

/// All n-grams of the document up to `ngram_max` words, space-joined.
fn ngrams(document: &str, ngram_max: usize) -> impl Iterator<Item = String> + '_ {
    let tokens: Vec<&str> = document.split_whitespace().collect();
    let max = ngram_max.max(1);
    (1..=max).flat_map(move |n| {
        let tokens = tokens.clone();
        (0..tokens.len().saturating_sub(n - 1)).map(move |start| tokens[start..start + n].join(" "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn fit_builds_sorted_vocabulary() {
        let v = TfIdfVectorizer::fit(TfIdfParams::default(), &docs(&["b a", "c a"]));
        assert_eq!(v.vocabulary_size(), 3);
        // Sorted order: a=0, b=1, c=2.
        assert_eq!(v.vocabulary["a"], 0);
        assert_eq!(v.vocabulary["b"], 1);
        assert_eq!(v.vocabulary["c"], 2);
    }

    #[test]
    fn min_df_drops_rare_terms() {
        let params = TfIdfParams {
            min_df: 2,
            ..TfIdfParams::default()
        };
        let v = TfIdfVectorizer::fit(params, &docs(&["rare common", "common", "common"]));
        assert_eq!(v.vocabulary_size(), 1);
        assert!(v.vocabulary.contains_key("common"));
    }

    #[test]
    fn max_df_drops_ubiquitous_terms() {
        let params = TfIdfParams {
            max_df: 0.5,
            ..TfIdfParams::default()
        };
        let v = TfIdfVectorizer::fit(
            params,
            &docs(&["stop bon", "stop nul", "stop moyen", "stop top"]),
        );
        assert!(!v.vocabulary.contains_key("stop"));
        assert_eq!(v.vocabulary_size(), 4);
    }

    #[test]
    fn bigrams_join_adjacent_tokens() {
        let params = TfIdfParams {
            ngram_max: 2,
            ..TfIdfParams::default()
        };
        let v = TfIdfVectorizer::fit(params, &docs(&["pas bon"]));
        assert!(v.vocabulary.contains_key("pas"));
        assert!(v.vocabulary.contains_key("bon"));
        assert!(v.vocabulary.contains_key("pas bon"));
        assert_eq!(v.vocabulary_size(), 3);
    }

    #[test]
    fn transform_is_l2_normalized_and_sorted() {
        let v = TfIdfVectorizer::fit(TfIdfParams::default(), &docs(&["a b c", "a b", "a"]));
        let features = v.transform("c b a");

        let norm: f64 = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "expected unit norm, got {norm}");

        let indices: Vec<usize> = features.iter().map(|(i, _)| *i).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        let v = TfIdfVectorizer::fit(
            TfIdfParams::default(),
            &docs(&["common rare", "common", "common word"]),
        );
        let features = v.transform("common rare");
        let weight = |term: &str| {
            let index = v.vocabulary[term];
            features.iter().find(|(i, _)| *i == index).unwrap().1
        };
        assert!(weight("rare") > weight("common"));
    }

    #[test]
    fn unknown_terms_map_to_empty_vector() {
        let v = TfIdfVectorizer::fit(TfIdfParams::default(), &docs(&["bon produit"]));
        assert!(v.transform("inconnu totalement").is_empty());
        assert!(v.transform("").is_empty());
    }

    #[test]
    fn sublinear_dampens_repeats() {
        let raw = TfIdfVectorizer::fit(TfIdfParams::default(), &docs(&["bon bon bon nul"]));
        let damped = TfIdfVectorizer::fit(
            TfIdfParams {
                sublinear_tf: true,
                ..TfIdfParams::default()
            },
            &docs(&["bon bon bon nul"]),
        );

        // Ratio of the repeated term's weight to the single term's weight
        // shrinks under sublinear scaling.
        let ratio = |v: &TfIdfVectorizer| {
            let features = v.transform("bon bon bon nul");
            let get = |term: &str| {
                let index = v.vocabulary[term];
                features.iter().find(|(i, _)| *i == index).unwrap().1
            };
            get("bon") / get("nul")
        };
        assert!(ratio(&damped) < ratio(&raw));
    }

    #[test]
    fn fitted_vectorizer_serializes_deterministically() {
        let fit = || {
            TfIdfVectorizer::fit(
                TfIdfParams::default(),
                &docs(&["tres bon produit", "vraiment nul", "bon mais cher"]),
            )
        };
        let a = serde_json::to_string(&fit()).unwrap();
        let b = serde_json::to_string(&fit()).unwrap();
        assert_eq!(a, b);
    }
}
