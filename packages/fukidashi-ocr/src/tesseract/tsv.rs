use crate::detection::Detection;

/// Tesseract TSV column layout: level, page_num, block_num, par_num,
/// line_num, word_num, left, top, width, height, conf, text.
const TSV_COLUMNS: usize = 12;

/// Word rows carry level 5; lower levels are layout containers.
const WORD_LEVEL: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineKey {
    page: u32,
    block: u32,
    par: u32,
    line: u32,
}

struct LineAcc {
    key: LineKey,
    words: Vec<String>,
    conf_sum: f64,
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

/// Parses tesseract TSV output into per-line detections.
///
/// Word rows belonging to the same (page, block, paragraph, line) are folded
/// into one detection: texts joined by a single space, confidence averaged
/// and rescaled from percent, polygon the four corners of the words' union
/// rectangle. Rows with negative confidence or empty text are layout noise
/// and skipped. Line order follows first appearance in the output, which is
/// tesseract's native emission order.
pub fn parse_detections(tsv: &str) -> Vec<Detection> {
    let mut lines: Vec<LineAcc> = Vec::new();

    for (idx, row) in tsv.lines().enumerate() {
        if idx == 0 {
            // header row
            continue;
        }
        let cols: Vec<&str> = row.split('\t').collect();
        if cols.len() < TSV_COLUMNS {
            continue;
        }
        let level: u32 = cols[0].parse().unwrap_or(0);
        if level != WORD_LEVEL {
            continue;
        }
        let conf: f64 = cols[10].parse().unwrap_or(-1.0);
        let text = cols[11].trim();
        if conf < 0.0 || text.is_empty() {
            continue;
        }

        let key = LineKey {
            page: cols[1].parse().unwrap_or(0),
            block: cols[2].parse().unwrap_or(0),
            par: cols[3].parse().unwrap_or(0),
            line: cols[4].parse().unwrap_or(0),
        };
        let left: i64 = cols[6].parse().unwrap_or(0);
        let top: i64 = cols[7].parse().unwrap_or(0);
        let width: i64 = cols[8].parse().unwrap_or(0);
        let height: i64 = cols[9].parse().unwrap_or(0);

        match lines.iter_mut().find(|acc| acc.key == key) {
            Some(acc) => {
                acc.words.push(text.to_string());
                acc.conf_sum += conf;
                acc.left = acc.left.min(left);
                acc.top = acc.top.min(top);
                acc.right = acc.right.max(left + width);
                acc.bottom = acc.bottom.max(top + height);
            }
            None => lines.push(LineAcc {
                key,
                words: vec![text.to_string()],
                conf_sum: conf,
                left,
                top,
                right: left + width,
                bottom: top + height,
            }),
        }
    }

    lines
        .into_iter()
        .map(|acc| {
            let confidence = acc.conf_sum / acc.words.len() as f64 / 100.0;
            Detection::from_rect(
                acc.left as f32,
                acc.top as f32,
                (acc.right - acc.left) as f32,
                (acc.bottom - acc.top) as f32,
                acc.words.join(" "),
                confidence,
            )
        })
        .collect()
}
