//! Greedy non-max suppression over one frame's raw boxes.

use crate::tracker::bbox::BoundingBox;
use crate::tracker::matching::Detection;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    bbox: BoundingBox,
    rank: f32,
    degenerate: bool,
}

impl Candidate {
    fn new(detection: &Detection, by_score: bool) -> Self {
        let rank = match detection.score {
            Some(score) if by_score => score,
            _ => detection.bbox.area(),
        };
        Self {
            bbox: detection.bbox,
            rank,
            degenerate: detection.bbox.is_degenerate(),
        }
    }
}

/// Collapse overlapping detections into a set with pairwise IoU at or below
/// `iou_threshold`.
///
/// Detections are ranked by score when every one of them carries a score,
/// otherwise all of them are ranked by box area, largest first. Degenerate
/// boxes rank last and, having IoU 0 with everything, suppress nothing and
/// are never suppressed. Ties keep input order. Returns the kept boxes in
/// selection order.
pub fn non_max_suppression(detections: &[Detection], iou_threshold: f32) -> Vec<BoundingBox> {
    let by_score = detections.iter().all(|d| d.score.is_some());
    let mut candidates: Vec<Candidate> = detections
        .iter()
        .map(|d| Candidate::new(d, by_score))
        .collect();

    // sort_by is stable, so equal ranks stay in input order.
    candidates.sort_by(|a, b| {
        a.degenerate
            .cmp(&b.degenerate)
            .then_with(|| b.rank.total_cmp(&a.rank))
    });

    let mut suppressed = vec![false; candidates.len()];
    let mut kept = Vec::new();

    for i in 0..candidates.len() {
        if suppressed[i] {
            continue;
        }
        let current = candidates[i].bbox;
        kept.push(current);

        for (j, other) in candidates.iter().enumerate().skip(i + 1) {
            if !suppressed[j] && current.iou(&other.bbox) > iou_threshold {
                suppressed[j] = true;
            }
        }
    }

    kept
}

/// Score-less NMS: ranks purely by box area.
pub fn non_max_suppression_boxes(boxes: &[BoundingBox], iou_threshold: f32) -> Vec<BoundingBox> {
    let detections: Vec<Detection> = boxes
        .iter()
        .map(|b| Detection::from_bbox(*b, None))
        .collect();
    non_max_suppression(&detections, iou_threshold)
}
