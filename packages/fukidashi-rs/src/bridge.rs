//! The line-oriented JSON boundary: one request object per input line,
//! exactly one JSON response line per request, emitted even on error.
//! Diagnostics only ever go through `tracing` (stderr in the binary), so
//! the response stream stays parseable no matter what a collaborator
//! prints or fails with.

use std::sync::Arc;

use anyhow::Result;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use fukidashi_ocr::OcrEngine;

use crate::block::{assemble_blocks, Block, PipelineOptions};
use crate::image_source::resolve_image;
use crate::lang::{ocr_language, translation_language};
use crate::translator::{translate_batch, Translator};

#[derive(Debug, Deserialize)]
struct OcrRequest {
    url: String,
    #[serde(default = "default_ocr_lang")]
    lang: String,
}

fn default_ocr_lang() -> String {
    "Japanese".to_string()
}

#[derive(Debug, Deserialize)]
struct TranslateRequest {
    #[serde(default)]
    texts: Vec<String>,
    #[serde(default = "default_target")]
    target: String,
    #[serde(default = "default_source")]
    source: String,
}

fn default_target() -> String {
    "en".to_string()
}

fn default_source() -> String {
    "auto".to_string()
}

fn error_response(message: &str) -> String {
    json!({ "error": message }).to_string()
}

/// Serves OCR and translation requests over any line-oriented channel.
pub struct Bridge {
    engine: Arc<dyn OcrEngine>,
    translator: Arc<dyn Translator>,
    options: PipelineOptions,
}

impl Bridge {
    pub fn new(
        engine: Arc<dyn OcrEngine>,
        translator: Arc<dyn Translator>,
        options: PipelineOptions,
    ) -> Self {
        Self {
            engine,
            translator,
            options,
        }
    }

    /// Handles one request line and produces the single response line for
    /// it. Every failure mode maps to a response object; nothing escapes as
    /// a panic or a closed channel.
    pub async fn handle_line(&self, line: &str) -> String {
        let request: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, "invalid JSON input: {line}");
                return error_response("Invalid JSON input");
            }
        };

        let mode = request
            .get("mode")
            .and_then(Value::as_str)
            .map(str::to_owned);
        match mode.as_deref() {
            Some("ocr") => self.handle_ocr(request).await,
            Some("translate") => self.handle_translate(request).await,
            Some(mode) => {
                error!("unknown request mode: {mode}");
                error_response(&format!("Unknown mode: {mode}"))
            }
            None => {
                error!("request without a mode field: {request}");
                error_response("Missing request mode")
            }
        }
    }

    async fn handle_ocr(&self, request: Value) -> String {
        let request: OcrRequest = match serde_json::from_value(request) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "malformed ocr request");
                return error_response("Missing or invalid 'url' field");
            }
        };
        match self.run_ocr(&request).await {
            Ok(blocks) => json!({ "blocks": blocks }).to_string(),
            Err(e) => {
                // full chain to diagnostics, top-level message to the caller
                error!("OCR error: {e:#}");
                error_response(&e.to_string())
            }
        }
    }

    async fn run_ocr(&self, request: &OcrRequest) -> Result<Vec<Block>> {
        let lang = ocr_language(&request.lang);
        let input = resolve_image(&request.url).await?;
        let detections = self.engine.detect(&input, lang).await?;
        debug!(
            detections = detections.len(),
            lang, "assembling blocks from detections"
        );
        Ok(assemble_blocks(&detections, &self.options))
    }

    async fn handle_translate(&self, request: Value) -> String {
        let request: TranslateRequest = match serde_json::from_value(request) {
            Ok(request) => request,
            Err(e) => {
                error!(error = %e, "malformed translate request");
                return error_response("Invalid translate request");
            }
        };
        let source = translation_language(&request.source);
        let results = translate_batch(
            self.translator.as_ref(),
            &request.texts,
            &request.target,
            &source,
        )
        .await;
        serde_json::to_string(&results).unwrap_or_else(|_| "[]".to_string())
    }

    /// Drives the request loop until the reader is exhausted. Blank lines
    /// are skipped without a response; a bad line never closes the channel.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let response = self.handle_line(line).await;
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fukidashi_ocr::{Detection, OcrError, OcrInput};

    use crate::translator::TranslateError;

    /// Engine that returns a fixed pair of adjacent detections.
    struct StubEngine;

    #[async_trait]
    impl OcrEngine for StubEngine {
        async fn detect(
            &self,
            _input: &OcrInput,
            _lang: &str,
        ) -> Result<Vec<Detection>, OcrError> {
            Ok(vec![
                Detection::from_rect(0.0, 0.0, 50.0, 20.0, "hello".to_string(), 0.8),
                Detection::from_rect(55.0, 2.0, 50.0, 20.0, "world".to_string(), 0.9),
            ])
        }
    }

    /// Engine whose backing binary is missing.
    struct AbsentEngine;

    #[async_trait]
    impl OcrEngine for AbsentEngine {
        async fn detect(
            &self,
            _input: &OcrInput,
            _lang: &str,
        ) -> Result<Vec<Detection>, OcrError> {
            Err(OcrError::NotInstalled("tesseract"))
        }
    }

    struct EchoTranslator;

    #[async_trait]
    impl Translator for EchoTranslator {
        async fn translate(
            &self,
            text: &str,
            _source: &str,
            _target: &str,
        ) -> Result<String, TranslateError> {
            Ok(format!("<{text}>"))
        }
    }

    fn bridge(engine: Arc<dyn OcrEngine>) -> Bridge {
        Bridge::new(engine, Arc::new(EchoTranslator), PipelineOptions::default())
    }

    #[tokio::test]
    async fn test_malformed_line_yields_error_object() {
        let b = bridge(Arc::new(StubEngine));
        let response = b.handle_line("this is not json").await;
        assert_eq!(response, r#"{"error":"Invalid JSON input"}"#);
    }

    #[tokio::test]
    async fn test_unknown_mode() {
        let b = bridge(Arc::new(StubEngine));
        let response = b.handle_line(r#"{"mode":"paint"}"#).await;
        assert_eq!(response, r#"{"error":"Unknown mode: paint"}"#);
    }

    #[tokio::test]
    async fn test_missing_mode() {
        let b = bridge(Arc::new(StubEngine));
        let response = b.handle_line(r#"{"url":"page.png"}"#).await;
        assert_eq!(response, r#"{"error":"Missing request mode"}"#);
    }

    #[tokio::test]
    async fn test_ocr_request_produces_blocks() {
        let b = bridge(Arc::new(StubEngine));
        let response = b
            .handle_line(r#"{"mode":"ocr","url":"page.png","lang":"Japanese"}"#)
            .await;
        let value: Value = serde_json::from_str(&response).unwrap();
        let blocks = value["blocks"].as_array().unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0]["text"], "hello world");
        assert_eq!(blocks[0]["x"], 0);
        assert_eq!(blocks[0]["width"], 105);
        assert!((blocks[0]["confidence"].as_f64().unwrap() - 0.85).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_ocr_without_url_is_an_error_object() {
        let b = bridge(Arc::new(StubEngine));
        let response = b.handle_line(r#"{"mode":"ocr"}"#).await;
        assert_eq!(response, r#"{"error":"Missing or invalid 'url' field"}"#);
    }

    #[tokio::test]
    async fn test_missing_engine_reports_not_installed() {
        let b = bridge(Arc::new(AbsentEngine));
        let response = b.handle_line(r#"{"mode":"ocr","url":"page.png"}"#).await;
        assert_eq!(response, r#"{"error":"tesseract not installed"}"#);
    }

    #[tokio::test]
    async fn test_translate_request_stays_index_aligned() {
        let b = bridge(Arc::new(StubEngine));
        let response = b
            .handle_line(r#"{"mode":"translate","texts":["a","","b"],"target":"en","source":"japan"}"#)
            .await;
        assert_eq!(response, r#"["<a>","","<b>"]"#);
    }

    #[tokio::test]
    async fn test_bad_line_never_closes_the_channel() {
        let b = bridge(Arc::new(StubEngine));
        let input = b"not json\n\n{\"mode\":\"translate\",\"texts\":[\"hi\"]}\n";
        let mut output: Vec<u8> = Vec::new();
        b.run(&input[..], &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        // two responses: the blank line is skipped, the bad line answered
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"error":"Invalid JSON input"}"#);
        assert_eq!(lines[1], r#"["<hi>"]"#);
    }
}
