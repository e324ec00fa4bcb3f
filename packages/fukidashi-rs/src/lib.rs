//! # fukidashi-rs
//!
//! Assembles raw per-line OCR detections into reading-ordered speech-bubble
//! blocks suitable for translation and overlay, and bridges OCR + translation
//! over a line-oriented JSON protocol.
//!
//! ## Features
//!
//! - **Detection Filtering**: Drop low-confidence and blank detections, reduce polygons to boxes
//! - **Bubble Clustering**: Greedy first-fit grouping of adjacent lines into speech bubbles
//! - **Reading Order**: Vertical (right-to-left) and horizontal direction-aware line sorting
//! - **Block Aggregation**: One translated-ready text block per bubble with aggregate geometry
//! - **Translation Dispatch**: Index-aligned batch translation with per-item fallback
//! - **JSON Bridge**: One request object per line in, exactly one response line out
//!
//! ## Quick Start
//!
//! ```ignore
//! use fukidashi_rs::prelude::*;
//! use fukidashi_ocr::Detection;
//!
//! // Assemble bubbles from raw OCR detections
//! let detections: Vec<Detection> = run_ocr_somehow();
//! let blocks = assemble_blocks(&detections, &PipelineOptions::default());
//! for block in &blocks {
//!     println!("[{:.2}] {}", block.confidence, block.text);
//! }
//!
//! // Translate the block texts, falling back per item on failure
//! let translator = GoogleTranslator::new();
//! let texts: Vec<String> = blocks.iter().map(|b| b.text.clone()).collect();
//! let translated = translate_batch(&translator, &texts, "en", "ja").await;
//! ```

pub mod block;
pub mod bridge;
pub mod bubble_cluster;
pub mod detection_filter;
pub mod image_source;
pub mod lang;
pub mod reading_order;
pub mod translator;

// Re-export commonly used types at the root level
pub use block::{assemble_blocks, Block, BlockOrder, PipelineOptions};
pub use bridge::Bridge;
pub use bubble_cluster::{assemble_clusters, Cluster};
pub use detection_filter::{filter_detections, LineBox, DEFAULT_CONFIDENCE_FLOOR};
pub use image_source::resolve_image;
pub use lang::{ocr_language, translation_language};
pub use reading_order::{is_vertical, sort_reading_order};
pub use translator::{translate_batch, GoogleTranslator, TranslateError, Translator};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```ignore
/// use fukidashi_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        assemble_blocks, assemble_clusters, filter_detections, is_vertical, ocr_language,
        resolve_image, sort_reading_order, translate_batch, translation_language, Block,
        BlockOrder, Bridge, Cluster, GoogleTranslator, LineBox, PipelineOptions, TranslateError,
        Translator, DEFAULT_CONFIDENCE_FLOOR,
    };
}
