//! Final aggregation step: collapses sorted clusters into the block records
//! the translation step and the bridge protocol consume.

use serde::{Deserialize, Serialize};

use fukidashi_ocr::Detection;

use crate::bubble_cluster::{assemble_clusters, Cluster};
use crate::detection_filter::{filter_detections, DEFAULT_CONFIDENCE_FLOOR};
use crate::reading_order::sort_reading_order;

/// Finalized speech-bubble unit: space-joined text in reading order, mean
/// confidence, and the owning cluster's aggregate geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub text: String,
    pub confidence: f64,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Block {
    /// Collapses a reading-order-sorted cluster into its output block.
    /// Clusters are never empty by construction.
    pub fn from_cluster(cluster: Cluster) -> Self {
        let text = cluster
            .lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let confidence =
            cluster.lines.iter().map(|l| l.confidence).sum::<f64>() / cluster.lines.len() as f64;
        Self {
            text,
            confidence,
            x: cluster.x,
            y: cluster.y,
            width: cluster.width,
            height: cluster.height,
        }
    }
}

/// Emission order for assembled blocks.
///
/// The historical default is cluster-creation order, which is NOT spatial
/// order; consumers that want top-to-bottom blocks opt into `Spatial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockOrder {
    #[default]
    Creation,
    /// Top-to-bottom, then left-to-right by aggregate box.
    Spatial,
}

/// Tuning knobs for [`assemble_blocks`].
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub min_confidence: f64,
    pub order: BlockOrder,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_CONFIDENCE_FLOOR,
            order: BlockOrder::Creation,
        }
    }
}

/// The whole core pipeline: filter raw detections, cluster them into
/// bubbles, fix each bubble's reading order, and emit one block per bubble.
pub fn assemble_blocks(detections: &[Detection], options: &PipelineOptions) -> Vec<Block> {
    let boxes = filter_detections(detections, options.min_confidence);
    let mut clusters = assemble_clusters(boxes);
    for cluster in &mut clusters {
        sort_reading_order(cluster);
    }
    let mut blocks: Vec<Block> = clusters.into_iter().map(Block::from_cluster).collect();
    if options.order == BlockOrder::Spatial {
        blocks.sort_by_key(|b| (b.y, b.x));
    }
    blocks
}
