use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Request(String),
    #[error("unexpected translation response shape")]
    Malformed,
}

/// A translation collaborator: one source string in, one translated string
/// out. Batch semantics and fallback live in [`translate_batch`], not in
/// implementations.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;
}

/// Translates a batch with strict index alignment: the output always has
/// exactly one string per input, in input order.
///
/// Whitespace-only items pass through untouched without a collaborator
/// call. A per-item collaborator failure (or an empty reply) is logged and
/// falls back to that item's original text; it never aborts the rest of the
/// batch.
pub async fn translate_batch(
    translator: &dyn Translator,
    texts: &[String],
    target: &str,
    source: &str,
) -> Vec<String> {
    let mut results = Vec::with_capacity(texts.len());
    for original in texts {
        let clean = original.trim();
        if clean.is_empty() {
            results.push(original.clone());
            continue;
        }
        let result = match translator.translate(clean, source, target).await {
            Ok(translated) if !translated.is_empty() => translated,
            Ok(_) => original.clone(),
            Err(e) => {
                warn!(
                    error = %e,
                    text = %preview(original),
                    "translation failed, keeping original text"
                );
                original.clone()
            }
        };
        results.push(result);
    }
    results
}

fn preview(text: &str) -> String {
    text.chars().take(10).collect()
}

/// Collaborator backed by the public Google web-translation endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
}

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(TRANSLATE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source),
                ("tl", target),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranslateError::Request(format!(
                "status {}",
                response.status().as_u16()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Request(e.to_string()))?;

        // Reply shape: [[["translated","source",...], ...], ...] where the
        // first element holds one segment per source sentence.
        let segments = body
            .get(0)
            .and_then(serde_json::Value::as_array)
            .ok_or(TranslateError::Malformed)?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(piece) = segment.get(0).and_then(serde_json::Value::as_str) {
                translated.push_str(piece);
            }
        }
        Ok(translated)
    }
}
