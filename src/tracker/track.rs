//! Single tracked region and the id source that names it.

use crate::tracker::bbox::BoundingBox;
use crate::tracker::track_state::TrackState;

/// Monotonic track id source, owned by whoever drives the frame loop.
///
/// Ids start at 1 and are never handed out twice, even after the track
/// that carried one has been evicted.
#[derive(Debug, Clone)]
pub struct TrackIdCounter {
    next: u64,
}

impl Default for TrackIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrackIdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Get the next unique track ID.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next new track will receive.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

/// Single tracked region.
///
/// Renderers and capture code should only read `id` and `last_box`;
/// the counters are bookkeeping exposed for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Unique track identifier
    pub id: u64,
    /// Box from the last successful match, kept stale while missing
    pub last_box: BoundingBox,
    /// Number of frames this track has been matched, including its first
    pub hit_count: u32,
    /// Consecutive frames since the last match
    pub miss_count: u32,
}

impl Track {
    /// Create a track from an unmatched candidate box.
    pub fn new(id: u64, bbox: BoundingBox) -> Self {
        Self {
            id,
            last_box: bbox,
            hit_count: 1,
            miss_count: 0,
        }
    }

    pub fn mark_matched(&mut self, bbox: BoundingBox) {
        self.hit_count = self.hit_count.saturating_add(1);
        self.last_box = bbox;
        self.miss_count = 0;
    }

    pub fn mark_missed(&mut self) {
        self.miss_count = self.miss_count.saturating_add(1);
    }

    pub fn state(&self, stability_threshold: u32) -> TrackState {
        TrackState::from_hits(self.hit_count, stability_threshold)
    }

    /// Overlay label: `"ID 4 (stable)"` once stable, `"ID 4 (#2)"` before.
    pub fn label(&self, stability_threshold: u32) -> String {
        match self.state(stability_threshold) {
            TrackState::Stable => format!("ID {} (stable)", self.id),
            _ => format!("ID {} (#{})", self.id, self.hit_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_counter_is_monotonic() {
        let mut ids = TrackIdCounter::new();
        assert_eq!(ids.peek(), 1);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_match_and_miss() {
        let mut track = Track::new(7, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(track.state(3), TrackState::New);

        track.mark_missed();
        assert_eq!(track.miss_count, 1);

        let moved = BoundingBox::new(1.0, 1.0, 11.0, 11.0);
        track.mark_matched(moved);
        assert_eq!(track.hit_count, 2);
        assert_eq!(track.miss_count, 0);
        assert_eq!(track.last_box, moved);
        assert_eq!(track.state(3), TrackState::Accumulating);
    }

    #[test]
    fn test_hit_count_saturates() {
        let mut track = Track::new(1, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        track.hit_count = u32::MAX;
        track.mark_matched(track.last_box);
        assert_eq!(track.hit_count, u32::MAX);
        assert_eq!(track.state(3), TrackState::Stable);
    }

    #[test]
    fn test_label() {
        let mut track = Track::new(4, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
        track.mark_matched(track.last_box);
        assert_eq!(track.label(3), "ID 4 (#2)");
        track.mark_matched(track.last_box);
        assert_eq!(track.label(3), "ID 4 (stable)");
    }
}
