//! Command line arguments backing the `fukidashi` binary.
use clap::{Parser, Subcommand};

use fukidashi_rs::DEFAULT_CONFIDENCE_FLOOR;

#[derive(Parser, Debug)]
#[command(
  name = "fukidashi",
  about = "A CLI tool for assembling manga OCR detections into speech-bubble blocks and serving OCR + translation over line-oriented JSON",
  version
)]
pub struct Args {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Serve requests read as one JSON object per stdin line
  Bridge {
    /// Minimum OCR confidence required to keep a detection
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_FLOOR)]
    min_confidence: f64,

    /// Emit blocks in top-to-bottom spatial order instead of cluster order
    #[arg(long)]
    sorted: bool,

    /// Tesseract binary to invoke for OCR
    #[arg(long, default_value = "tesseract")]
    tesseract: String,
  },
  /// Run OCR on one image and print the assembled blocks as JSON
  Ocr {
    /// Image to read: http(s) URL, data URI, or file path
    image: String,

    /// OCR language tag (e.g. "Japanese", "ja", "jpn")
    #[arg(long, short = 'l', default_value = "Japanese")]
    lang: String,

    /// Minimum OCR confidence required to keep a detection
    #[arg(long, default_value_t = DEFAULT_CONFIDENCE_FLOOR)]
    min_confidence: f64,

    /// Emit blocks in top-to-bottom spatial order instead of cluster order
    #[arg(long)]
    sorted: bool,

    /// Tesseract binary to invoke for OCR
    #[arg(long, default_value = "tesseract")]
    tesseract: String,
  },
}
