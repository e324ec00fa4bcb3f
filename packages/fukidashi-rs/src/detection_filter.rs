use fukidashi_ocr::Detection;

/// Default OCR confidence floor below which detections are discarded.
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.6;

/// Axis-aligned box for one detected text line, in integer pixel
/// coordinates. Immutable once derived from a detection.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub text: String,
    pub confidence: f64,
}

impl LineBox {
    /// Tight axis-aligned bounding box over the detection's polygon.
    pub fn from_detection(detection: &Detection) -> Self {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for point in &detection.polygon {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }
        if detection.polygon.is_empty() {
            min_x = 0.0;
            min_y = 0.0;
            max_x = 0.0;
            max_y = 0.0;
        }
        Self {
            x: min_x as i32,
            y: min_y as i32,
            width: (max_x - min_x) as i32,
            height: (max_y - min_y) as i32,
            text: detection.text.clone(),
            confidence: detection.confidence,
        }
    }
}

/// Drops detections below the confidence floor or with blank text and
/// converts the survivors to boxes, preserving input order.
///
/// Discards are silent: an empty result is a valid outcome, not an error.
pub fn filter_detections(detections: &[Detection], confidence_floor: f64) -> Vec<LineBox> {
    detections
        .iter()
        .filter(|d| d.confidence >= confidence_floor && !d.text.trim().is_empty())
        .map(LineBox::from_detection)
        .collect()
}
