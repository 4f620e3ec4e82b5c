//! Submission classification facade: detect, gate, clean, predict.
//!
//! This is the synchronous entry point the feedback-validation layer calls
//! with a raw comment. The language gate runs before any model artifact is
//! touched, so an unsupported language never pays the model-load I/O.

use std::path::Path;

use tracing::debug;

use opinio_core::{Language, clean_text, detect_language};

use crate::error::ClassifyError;
use crate::predict::predict;

/// Outcome of classifying one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub language: Language,
    /// `true` = positive comment.
    pub polarity: bool,
}

/// Classify a raw submitted comment.
///
/// Detects the language, rejects anything outside the supported set, cleans
/// the text with the same transform the trainer used, and predicts against
/// the language's persisted model.
pub fn classify_comment(model_dir: &Path, raw_text: &str) -> Result<Classification, ClassifyError> {
    if raw_text.trim().is_empty() {
        return Err(ClassifyError::EmptySubmission);
    }

    let code = detect_language(raw_text)
        .ok_or_else(|| ClassifyError::UnsupportedLanguage("unknown".to_string()))?;
    let language =
        Language::from_code(code).ok_or_else(|| ClassifyError::UnsupportedLanguage(code.to_string()))?;

    let cleaned = clean_text(raw_text, language);
    debug!(language = %language, cleaned = %cleaned, "classifying submission");

    let polarity = predict(model_dir, language, &cleaned)?;
    Ok(Classification { language, polarity })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::search::ParamGrid;
    use crate::train::train_language;

    fn tiny_grid() -> ParamGrid {
        ParamGrid {
            max_df: vec![1.0],
            min_df: vec![1],
            ngram_max: vec![1],
            sublinear_tf: vec![false],
            alpha: vec![0.1],
            fit_prior: vec![true],
        }
    }

    /// Train both language models into `dir` from small polarized corpora.
    fn train_both(dir: &Path) {
        let fr: [(&str, i64); 12] = [
            ("Vous etes nul affreux c'est zero", 0),
            ("service affreux vraiment nul", 0),
            ("produit nul tres mauvais", 0),
            ("c'est zero vraiment decevant", 0),
            ("mauvais affreux et decevant", 0),
            ("zero nul je deteste", 0),
            ("j'adore ce produit magnifique", 1),
            ("tres beau produit je vous adore", 1),
            ("excellent produit je l'adore", 1),
            ("magnifique vraiment excellent", 1),
            ("vous etes beau je vous aime", 1),
            ("excellent service j'adore", 1),
        ];
        let en: [(&str, i64); 12] = [
            ("you are awful this is zero", 0),
            ("terrible awful service", 0),
            ("really bad and terrible", 0),
            ("zero stars awful product", 0),
            ("bad terrible experience", 0),
            ("awful zero would not return", 0),
            ("i love you you are so beautiful", 1),
            ("beautiful product i love it", 1),
            ("great service i love it", 1),
            ("so beautiful and great", 1),
            ("love this great product", 1),
            ("beautiful great experience", 1),
        ];

        let (labels, texts): (Vec<i64>, Vec<String>) =
            fr.iter().map(|(t, l)| (*l, t.to_string())).unzip();
        train_language(dir, Language::Fr, &labels, &texts, &tiny_grid()).unwrap();

        let (labels, texts): (Vec<i64>, Vec<String>) =
            en.iter().map(|(t, l)| (*l, t.to_string())).unzip();
        train_language(dir, Language::En, &labels, &texts, &tiny_grid()).unwrap();
    }

    #[test]
    fn negative_french_submission() {
        let tmp = tempfile::TempDir::new().unwrap();
        train_both(tmp.path());

        let result = classify_comment(tmp.path(), "Vous etes nul affreux c'est zero").unwrap();
        assert_eq!(result.language, Language::Fr);
        assert!(!result.polarity);
    }

    #[test]
    fn positive_english_submission() {
        let tmp = tempfile::TempDir::new().unwrap();
        train_both(tmp.path());

        let result = classify_comment(tmp.path(), "I love you, you are so beautiful").unwrap();
        assert_eq!(result.language, Language::En);
        assert!(result.polarity);
    }

    #[test]
    fn german_is_rejected_before_any_model_is_touched() {
        // No models exist in this directory: if the gate let German through,
        // we would see ModelUnavailable instead of UnsupportedLanguage.
        let tmp = tempfile::TempDir::new().unwrap();
        let err = classify_comment(tmp.path(), "Das Wetter ist heute nicht gut").unwrap_err();
        assert!(matches!(err, ClassifyError::UnsupportedLanguage(code) if code == "de"));
    }

    #[test]
    fn empty_submission_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = classify_comment(tmp.path(), "   ").unwrap_err();
        assert!(matches!(err, ClassifyError::EmptySubmission));
    }

    #[test]
    fn missing_model_surfaces_as_model_unavailable() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = classify_comment(tmp.path(), "Bonjour le monde merci").unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Model(ModelError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn training_and_inference_share_the_cleaning_function() {
        // Both sides call opinio_core::clean_text; feeding the facade a
        // pre-cleaned text must be indistinguishable from the raw one.
        let tmp = tempfile::TempDir::new().unwrap();
        train_both(tmp.path());

        let raw = "Vous etes NUL, affreux... c'est zero!";
        let cleaned = clean_text(raw, Language::Fr);
        let a = classify_comment(tmp.path(), raw).unwrap();
        let b = classify_comment(tmp.path(), &cleaned).unwrap();
        assert_eq!(a, b);
    }
}
