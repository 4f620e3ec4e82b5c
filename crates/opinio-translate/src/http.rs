//! HTTP client for a LibreTranslate-compatible translation endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use opinio_core::Language;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// Pluggable translation provider.
///
/// Addressed as a pure text-in/text-out function so the batch augmenter can
/// run against the real HTTP provider or an in-process fake.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        src: Language,
        dst: Language,
    ) -> Result<String, TranslateError>;
}

/// Client for a LibreTranslate-compatible `/translate` endpoint.
pub struct HttpTranslator {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    /// Create a client for the given base URL.
    ///
    /// `base_url` should be like `http://localhost:5000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Translate for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        src: Language,
        dst: Language,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            q: text,
            source: src.code(),
            target: dst.code(),
            format: "text",
        };

        debug!(url = %url, src = %src, dst = %dst, "requesting translation");
        let resp = self.client.post(&url).json(&request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TranslateError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = resp.json().await?;
        Ok(parsed.translated_text)
    }
}
