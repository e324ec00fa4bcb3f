use std::cmp::Reverse;

use crate::bubble_cluster::Cluster;

/// Principal reading direction of a bubble, decided once from its final
/// aggregate box: taller than wide means vertical script.
pub fn is_vertical(cluster: &Cluster) -> bool {
    cluster.height > cluster.width
}

/// Orders a cluster's lines the way a reader would scan them.
///
/// Vertical text reads right-to-left by column, then top-to-bottom within a
/// column; horizontal text reads top-to-bottom by row, then left-to-right
/// within a row. Both sorts are stable, so equal keys keep the detections'
/// prior relative order.
pub fn sort_reading_order(cluster: &mut Cluster) {
    if is_vertical(cluster) {
        cluster.lines.sort_by_key(|l| (Reverse(l.x), l.y));
    } else {
        cluster.lines.sort_by_key(|l| (l.y, l.x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection_filter::LineBox;

    fn line(x: i32, y: i32, text: &str) -> LineBox {
        LineBox {
            x,
            y,
            width: 20,
            height: 20,
            text: text.to_string(),
            confidence: 0.9,
        }
    }

    fn cluster(width: i32, height: i32, lines: Vec<LineBox>) -> Cluster {
        Cluster {
            x: 0,
            y: 0,
            width,
            height,
            lines,
        }
    }

    #[test]
    fn test_vertical_reads_right_to_left() {
        // tall cluster (30x120): rightmost column first, top-to-bottom inside
        let mut c = cluster(
            30,
            120,
            vec![
                line(0, 0, "left-top"),
                line(80, 40, "right-bottom"),
                line(80, 0, "right-top"),
                line(0, 40, "left-bottom"),
            ],
        );
        sort_reading_order(&mut c);
        let order: Vec<&str> = c.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            order,
            vec!["right-top", "right-bottom", "left-top", "left-bottom"]
        );
    }

    #[test]
    fn test_horizontal_reads_top_to_bottom() {
        // wide cluster (120x30): top row first, left-to-right inside
        let mut c = cluster(
            120,
            30,
            vec![
                line(80, 40, "bottom-right"),
                line(0, 40, "bottom-left"),
                line(80, 0, "top-right"),
                line(0, 0, "top-left"),
            ],
        );
        sort_reading_order(&mut c);
        let order: Vec<&str> = c.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            order,
            vec!["top-left", "top-right", "bottom-left", "bottom-right"]
        );
    }

    #[test]
    fn test_equal_keys_keep_prior_order() {
        let mut c = cluster(
            120,
            30,
            vec![line(10, 10, "first"), line(10, 10, "second")],
        );
        sort_reading_order(&mut c);
        assert_eq!(c.lines[0].text, "first");
        assert_eq!(c.lines[1].text, "second");
    }

    #[test]
    fn test_square_cluster_counts_as_horizontal() {
        let c = cluster(50, 50, vec![]);
        assert!(!is_vertical(&c));
    }
}
