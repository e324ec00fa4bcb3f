use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use fukidashi_ocr::OcrInput;

/// Resolves the `url` field of an OCR request into engine input.
///
/// http(s) URLs are downloaded, `data:image/*` URIs have their base64
/// payload decoded, and anything else is treated as a local file path. The
/// path branch does not touch the filesystem; a missing file surfaces as an
/// engine error later.
pub async fn resolve_image(source: &str) -> Result<OcrInput> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source)
            .await
            .context("Failed to download image")?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "Failed to download image: {}",
                response.status().as_u16()
            ));
        }
        let bytes = response.bytes().await.context("Failed to download image")?;
        return Ok(OcrInput::Bytes(bytes.to_vec()));
    }

    if let Some(rest) = source.strip_prefix("data:image") {
        let payload = rest
            .split_once(";base64,")
            .map(|(_, data)| data)
            .ok_or_else(|| anyhow!("unsupported data URI, expected a base64 payload"))?;
        let decoded = BASE64
            .decode(payload.trim())
            .context("Failed to decode data URI")?;
        return Ok(OcrInput::Bytes(decoded));
    }

    Ok(OcrInput::FilePath(PathBuf::from(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_data_uri_decodes_to_bytes() {
        let input = resolve_image("data:image/png;base64,aGVsbG8=").await.unwrap();
        match input {
            OcrInput::Bytes(bytes) => assert_eq!(bytes, b"hello"),
            other => panic!("expected bytes, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_data_uri_without_base64_marker_is_rejected() {
        let err = resolve_image("data:image/png,rawpayload").await.unwrap_err();
        assert!(err.to_string().contains("base64"));
    }

    #[tokio::test]
    async fn test_invalid_base64_is_rejected() {
        assert!(resolve_image("data:image/png;base64,@@@@").await.is_err());
    }

    #[tokio::test]
    async fn test_plain_string_becomes_file_path() {
        let input = resolve_image("/tmp/page.png").await.unwrap();
        match input {
            OcrInput::FilePath(path) => assert_eq!(path, PathBuf::from("/tmp/page.png")),
            other => panic!("expected file path, got {other:?}"),
        }
    }
}
