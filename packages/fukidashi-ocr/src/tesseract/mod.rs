mod engine;
mod tsv;

pub use engine::TesseractEngine;
