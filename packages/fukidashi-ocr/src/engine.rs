use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::detection::Detection;

/// Image handed to an OCR engine.
#[derive(Debug, Clone)]
pub enum OcrInput {
    FilePath(PathBuf),
    Bytes(Vec<u8>),
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("{0} not installed")]
    NotInstalled(&'static str),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("engine error: {0}")]
    EngineError(String),
}

/// An OCR collaborator: given an image and a language code in the engine's
/// native vocabulary, produce the raw per-line detections. The pipeline
/// treats implementations as black boxes.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn detect(&self, input: &OcrInput, lang: &str) -> Result<Vec<Detection>, OcrError>;
}
