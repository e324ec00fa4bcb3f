pub mod detection;
pub mod engine;
pub mod tesseract;

pub use detection::{Detection, Point};
pub use engine::{OcrEngine, OcrError, OcrInput};
pub use tesseract::TesseractEngine;
