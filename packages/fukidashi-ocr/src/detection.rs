/// One vertex of a detection polygon, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One OCR-recognized text line: its polygon, recognized text and confidence.
#[derive(Debug, Clone)]
pub struct Detection {
    pub polygon: Vec<Point>,
    pub text: String,
    pub confidence: f64,
}

impl Detection {
    /// Detection over an axis-aligned rectangle, the common case for engines
    /// that report plain bounding boxes rather than rotated quads.
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32, text: String, confidence: f64) -> Self {
        Self {
            polygon: vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            text,
            confidence,
        }
    }
}
