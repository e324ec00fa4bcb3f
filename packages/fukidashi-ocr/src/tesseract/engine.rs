use std::io::Write;
use std::path::Path;
use std::process::Command;

use async_trait::async_trait;

use crate::detection::Detection;
use crate::engine::{OcrEngine, OcrError, OcrInput};

use super::tsv;

/// OCR engine backed by an external `tesseract` binary.
///
/// The binary is invoked once per image in TSV output mode and its word rows
/// are folded back into per-line detections. Page segmentation mode 6 (one
/// uniform block of text) keeps tesseract from inventing its own layout,
/// which is the pipeline's job.
pub struct TesseractEngine {
    program: String,
}

impl TesseractEngine {
    pub fn new() -> Self {
        Self {
            program: "tesseract".into(),
        }
    }

    /// Use a specific binary instead of `tesseract` from `PATH`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn run_tesseract(program: &str, path: &Path, lang: &str) -> Result<String, OcrError> {
    let output = Command::new(program)
        .arg(path)
        .arg("stdout")
        .arg("-l")
        .arg(lang)
        .arg("--psm")
        .arg("6")
        .arg("tsv")
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => OcrError::NotInstalled("tesseract"),
            _ => OcrError::EngineError(e.to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OcrError::EngineError(format!(
            "tesseract failed: {}",
            stderr.trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn detect(&self, input: &OcrInput, lang: &str) -> Result<Vec<Detection>, OcrError> {
        let program = self.program.clone();
        let lang = lang.to_string();

        let raw = match input {
            OcrInput::FilePath(path) => {
                let path = path.clone();
                tokio::task::spawn_blocking(move || run_tesseract(&program, &path, &lang))
                    .await
                    .map_err(|e| OcrError::EngineError(e.to_string()))??
            }
            OcrInput::Bytes(data) => {
                let data = data.clone();
                tokio::task::spawn_blocking(move || {
                    let mut tmp = tempfile::Builder::new()
                        .suffix(".png")
                        .tempfile()
                        .map_err(|e| OcrError::EngineError(format!("temp image: {e}")))?;
                    tmp.write_all(&data)
                        .map_err(|e| OcrError::EngineError(format!("temp image: {e}")))?;
                    run_tesseract(&program, tmp.path(), &lang)
                })
                .await
                .map_err(|e| OcrError::EngineError(e.to_string()))??
            }
        };

        Ok(tsv::parse_detections(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_missing_binary_maps_to_not_installed() {
        let engine = TesseractEngine::with_program("tesseract-definitely-not-on-path");
        let input = OcrInput::FilePath(PathBuf::from("page.png"));
        let err = engine.detect(&input, "jpn").await.unwrap_err();
        assert_eq!(err.to_string(), "tesseract not installed");
    }
}
