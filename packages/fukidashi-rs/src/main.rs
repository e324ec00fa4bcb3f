mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Args, Commands};
use fukidashi_ocr::{OcrEngine, TesseractEngine};
use fukidashi_rs::{
  assemble_blocks, ocr_language, resolve_image, BlockOrder, Bridge, GoogleTranslator,
  PipelineOptions,
};

#[tokio::main]
async fn main() {
  // Diagnostics go to stderr; stdout is reserved for JSON responses.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  match args.command {
    Commands::Version => {
      println!("fukidashi {}", env!("CARGO_PKG_VERSION"));
    }
    Commands::Bridge {
      min_confidence,
      sorted,
      tesseract,
    } => {
      let bridge = Bridge::new(
        Arc::new(TesseractEngine::with_program(tesseract)),
        Arc::new(GoogleTranslator::new()),
        pipeline_options(min_confidence, sorted),
      );
      let stdin = tokio::io::BufReader::new(tokio::io::stdin());
      if let Err(e) = bridge.run(stdin, tokio::io::stdout()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
      }
    }
    Commands::Ocr {
      image,
      lang,
      min_confidence,
      sorted,
      tesseract,
    } => {
      if let Err(e) = ocr_once(&image, &lang, pipeline_options(min_confidence, sorted), &tesseract).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
      }
    }
  }
}

fn pipeline_options(min_confidence: f64, sorted: bool) -> PipelineOptions {
  PipelineOptions {
    min_confidence,
    order: if sorted {
      BlockOrder::Spatial
    } else {
      BlockOrder::Creation
    },
  }
}

async fn ocr_once(
  image: &str,
  lang: &str,
  options: PipelineOptions,
  tesseract: &str,
) -> anyhow::Result<()> {
  let engine = TesseractEngine::with_program(tesseract);
  let input = resolve_image(image).await?;
  let detections = engine.detect(&input, ocr_language(lang)).await?;
  let blocks = assemble_blocks(&detections, &options);
  println!("{}", serde_json::to_string(&blocks)?);
  Ok(())
}
