use crate::detection_filter::LineBox;

/// Merge tolerances, all scaled by the candidate cluster's current
/// aggregate height.
const VERTICAL_GAP_FACTOR: f64 = 2.0;
const HORIZONTAL_OVERLAP_FACTOR: f64 = 1.5;
const HORIZONTAL_GAP_FACTOR: f64 = 4.0;

/// A working group of line boxes believed to form one speech bubble. The
/// aggregate box is kept as the tight union of the members at all times.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub lines: Vec<LineBox>,
}

impl Cluster {
    fn seed(line: LineBox) -> Self {
        Self {
            x: line.x,
            y: line.y,
            width: line.width,
            height: line.height,
            lines: vec![line],
        }
    }

    /// Whether `line` sits close enough to join this cluster. The tolerance
    /// scales with the cluster's current height, so a bubble's reach grows
    /// as it accumulates lines; tall vertical bubbles need that to pick up
    /// their later columns.
    fn accepts(&self, line: &LineBox) -> bool {
        let line_height = self.height as f64;
        let vertical_gap = (line.y - self.y).abs() as f64;
        // negative when the line overlaps the cluster horizontally
        let horizontal_gap = (line.x - (self.x + self.width)) as f64;

        vertical_gap < line_height * VERTICAL_GAP_FACTOR
            && horizontal_gap > -(line_height * HORIZONTAL_OVERLAP_FACTOR)
            && horizontal_gap < line_height * HORIZONTAL_GAP_FACTOR
    }

    fn absorb(&mut self, line: LineBox) {
        let right = (self.x + self.width).max(line.x + line.width);
        let bottom = (self.y + self.height).max(line.y + line.height);
        self.x = self.x.min(line.x);
        self.y = self.y.min(line.y);
        self.width = right - self.x;
        self.height = bottom - self.y;
        self.lines.push(line);
    }
}

/// Groups line boxes into bubble clusters in a single streaming pass over
/// the boxes in their OCR emission order.
///
/// Each box joins the FIRST existing cluster (creation order) that accepts
/// it, never the geometrically closest one; first-fit keeps ambiguous
/// layouts deterministic. A box no cluster accepts seeds a new singleton
/// cluster. O(n * clusters), which is fine for the tens of detections a
/// page yields.
pub fn assemble_clusters(boxes: Vec<LineBox>) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    for line in boxes {
        match clusters.iter_mut().find(|c| c.accepts(&line)) {
            Some(cluster) => cluster.absorb(line),
            None => clusters.push(Cluster::seed(line)),
        }
    }
    clusters
}
