//! Row-isolating batch translation for corpus augmentation.

use std::time::Duration;

use tracing::warn;

use opinio_core::{Language, ProgressSink};

use crate::http::Translate;

/// Pause between provider calls, keeping the batch under the provider's rate.
pub const TRANSLATE_DELAY: Duration = Duration::from_millis(100);

/// Translate every row of `texts` from `src` to `dst`.
///
/// The output is positionally aligned with the input: a row that fails to
/// translate becomes an empty string instead of shifting later rows, so row
/// position stays a valid join key between the two language tables. Empty
/// input rows short-circuit without touching the provider.
///
/// `delay` is inserted after each provider call; pass [`TRANSLATE_DELAY`]
/// for real providers and [`Duration::ZERO`] under test.
pub async fn translate_rows(
    translator: &dyn Translate,
    texts: &[String],
    src: Language,
    dst: Language,
    delay: Duration,
    sink: &dyn ProgressSink,
) -> Vec<String> {
    let mut out = Vec::with_capacity(texts.len());

    for (index, text) in texts.iter().enumerate() {
        if text.trim().is_empty() {
            out.push(String::new());
            continue;
        }

        match translator.translate(text, src, dst).await {
            Ok(translated) => out.push(translated),
            Err(error) => {
                warn!(index, text = %text, error = %error, "translation failed, substituting empty text");
                sink.on_row_error(index, text, &error.to_string());
                out.push(String::new());
            }
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::TranslateError;
    use async_trait::async_trait;
    use opinio_core::SilentSink;
    use std::sync::Mutex;

    /// Uppercases its input; fails on the row indices it is told to.
    struct FakeTranslator {
        fail_on: Vec<usize>,
        calls: Mutex<usize>,
    }

    impl FakeTranslator {
        fn new(fail_on: Vec<usize>) -> Self {
            Self {
                fail_on,
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl Translate for FakeTranslator {
        async fn translate(
            &self,
            text: &str,
            _src: Language,
            _dst: Language,
        ) -> Result<String, TranslateError> {
            let mut calls = self.calls.lock().unwrap();
            let call_index = *calls;
            *calls += 1;
            if self.fail_on.contains(&call_index) {
                return Err(TranslateError::Server {
                    status: 503,
                    body: "overloaded".into(),
                });
            }
            Ok(text.to_uppercase())
        }
    }

    /// Records row errors reported by the augmenter.
    struct RecordingSink(Mutex<Vec<usize>>);

    impl ProgressSink for RecordingSink {
        fn on_stage_start(&self, _stage: &str) {}
        fn on_stage_end(&self, _stage: &str, _rows: usize) {}
        fn on_row_error(&self, index: usize, _text: &str, _error: &str) {
            self.0.lock().unwrap().push(index);
        }
    }

    fn rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("avis {i}")).collect()
    }

    #[tokio::test]
    async fn translates_every_row() {
        let translator = FakeTranslator::new(vec![]);
        let out = translate_rows(
            &translator,
            &rows(3),
            Language::Fr,
            Language::En,
            Duration::ZERO,
            &SilentSink,
        )
        .await;
        assert_eq!(out, vec!["AVIS 0", "AVIS 1", "AVIS 2"]);
    }

    #[tokio::test]
    async fn failed_row_is_isolated_and_alignment_preserved() {
        let translator = FakeTranslator::new(vec![5]);
        let input = rows(10);
        let sink = RecordingSink(Mutex::new(Vec::new()));

        let out = translate_rows(
            &translator,
            &input,
            Language::Fr,
            Language::En,
            Duration::ZERO,
            &sink,
        )
        .await;

        assert_eq!(out.len(), input.len());
        for (i, translated) in out.iter().enumerate() {
            if i == 5 {
                assert_eq!(translated, "", "failed row must become empty text");
            } else {
                assert_eq!(translated, &input[i].to_uppercase());
            }
        }
        assert_eq!(*sink.0.lock().unwrap(), vec![5]);
    }

    #[tokio::test]
    async fn empty_rows_short_circuit_without_provider_calls() {
        let translator = FakeTranslator::new(vec![]);
        let input = vec!["bon".to_string(), String::new(), "  ".to_string(), "top".to_string()];

        let out = translate_rows(
            &translator,
            &input,
            Language::Fr,
            Language::En,
            Duration::ZERO,
            &SilentSink,
        )
        .await;

        assert_eq!(out, vec!["BON", "", "", "TOP"]);
        assert_eq!(translator.calls(), 2);
    }

    #[tokio::test]
    async fn all_rows_failing_still_yields_aligned_output() {
        let translator = FakeTranslator::new((0..4).collect());
        let out = translate_rows(
            &translator,
            &rows(4),
            Language::Fr,
            Language::En,
            Duration::ZERO,
            &SilentSink,
        )
        .await;
        assert_eq!(out, vec![""; 4]);
    }
}
