//! Matching utilities for frame-to-frame association.

use crate::tracker::bbox::{BoundingBox, iou_batch};

/// Detection input for the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    /// Bounding box in TLBR format (x1, y1, x2, y2)
    pub bbox: BoundingBox,
    /// Detection confidence score, if the detector provides one
    pub score: Option<f32>,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, score: Option<f32>) -> Self {
        Self {
            bbox: BoundingBox::new(x1, y1, x2, y2),
            score,
        }
    }

    pub fn from_bbox(bbox: BoundingBox, score: Option<f32>) -> Self {
        Self { bbox, score }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssignmentResult {
    /// `(track index, detection index)` pairs
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Greedy per-detection assignment.
///
/// Detections are visited in order. Each one looks up the track with the
/// highest IoU among *all* tracks (first track wins ties). The pair matches
/// when that IoU exceeds `thresh` and no earlier detection claimed the track
/// in this call. A detection whose best track is already claimed stays
/// unmatched; it does not fall back to its second-best track.
pub fn greedy_assignment(
    track_boxes: &[BoundingBox],
    det_boxes: &[BoundingBox],
    thresh: f32,
) -> AssignmentResult {
    let ious = iou_batch(track_boxes, det_boxes);
    let (num_tracks, num_dets) = ious.dim();

    let mut claimed = vec![false; num_tracks];
    let mut matches = Vec::new();
    let mut unmatched_detections = Vec::new();

    for idet in 0..num_dets {
        let mut best: Option<usize> = None;
        let mut best_iou = 0.0_f32;
        for itrack in 0..num_tracks {
            if ious[[itrack, idet]] > best_iou {
                best_iou = ious[[itrack, idet]];
                best = Some(itrack);
            }
        }

        match best {
            Some(itrack) if best_iou > thresh && !claimed[itrack] => {
                claimed[itrack] = true;
                matches.push((itrack, idet));
            }
            _ => unmatched_detections.push(idet),
        }
    }

    let unmatched_tracks = claimed
        .iter()
        .enumerate()
        .filter_map(|(i, &c)| if c { None } else { Some(i) })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x1: f32, y1: f32, x2: f32, y2: f32) -> BoundingBox {
        BoundingBox::new(x1, y1, x2, y2)
    }

    #[test]
    fn test_no_tracks() {
        let dets = [bbox(0.0, 0.0, 10.0, 10.0), bbox(50.0, 50.0, 60.0, 60.0)];
        let result = greedy_assignment(&[], &dets, 0.3);
        assert!(result.matches.is_empty());
        assert!(result.unmatched_tracks.is_empty());
        assert_eq!(result.unmatched_detections, vec![0, 1]);
    }

    #[test]
    fn test_no_detections() {
        let tracks = [bbox(0.0, 0.0, 10.0, 10.0)];
        let result = greedy_assignment(&tracks, &[], 0.3);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0]);
        assert!(result.unmatched_detections.is_empty());
    }

    #[test]
    fn test_each_detection_picks_best_track() {
        let tracks = [bbox(0.0, 0.0, 40.0, 40.0), bbox(100.0, 100.0, 140.0, 140.0)];
        let dets = [bbox(102.0, 101.0, 141.0, 140.0), bbox(1.0, 2.0, 40.0, 41.0)];
        let result = greedy_assignment(&tracks, &dets, 0.3);
        assert_eq!(result.matches, vec![(1, 0), (0, 1)]);
        assert!(result.unmatched_tracks.is_empty());
        assert!(result.unmatched_detections.is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Inclusive areas 100x100 each, overlap 40x100: IoU = 4000 / 16000 = 0.25.
        let tracks = [bbox(0.0, 0.0, 99.0, 99.0)];
        let dets = [bbox(60.0, 0.0, 159.0, 99.0)];
        assert!(greedy_assignment(&tracks, &dets, 0.3).matches.is_empty());
        assert!(greedy_assignment(&tracks, &dets, 0.25).matches.is_empty());
        assert_eq!(greedy_assignment(&tracks, &dets, 0.2).matches, vec![(0, 0)]);
    }

    #[test]
    fn test_claimed_track_is_not_reused() {
        // Both detections prefer track 0; track 1 is a weaker but valid
        // option for the second one, and it is still not taken.
        let tracks = [bbox(0.0, 0.0, 49.0, 49.0), bbox(10.0, 0.0, 59.0, 49.0)];
        let dets = [bbox(0.0, 0.0, 49.0, 49.0), bbox(2.0, 0.0, 51.0, 49.0)];
        let result = greedy_assignment(&tracks, &dets, 0.3);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_tracks, vec![1]);
        assert_eq!(result.unmatched_detections, vec![1]);
    }

    #[test]
    fn test_tie_goes_to_first_track() {
        let tracks = [bbox(0.0, 0.0, 49.0, 49.0), bbox(0.0, 0.0, 49.0, 49.0)];
        let dets = [bbox(0.0, 0.0, 49.0, 49.0)];
        let result = greedy_assignment(&tracks, &dets, 0.3);
        assert_eq!(result.matches, vec![(0, 0)]);
        assert_eq!(result.unmatched_tracks, vec![1]);
    }
}
