//! Per-frame state transition and the session-owning tracker.

use crate::error::{Result, TrackerError};
use crate::tracker::bbox::BoundingBox;
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::nms::non_max_suppression;
use crate::tracker::stability;
use crate::tracker::track::{Track, TrackIdCounter};
use crate::tracker::track_table::TrackTable;

/// Configuration for the StableTracker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// NMS drops a box whose IoU with a kept box exceeds this
    pub nms_thresh: f32,
    /// A candidate matches a track only when their IoU exceeds this
    pub match_thresh: f32,
    /// Consecutive misses a track survives before eviction
    pub miss_budget: u32,
    /// Hits needed before a track counts as stable
    pub stability_threshold: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            nms_thresh: 0.4,
            match_thresh: 0.3,
            miss_budget: 1,
            stability_threshold: 3,
        }
    }
}

impl TrackerConfig {
    pub fn with_nms_thresh(mut self, thresh: f32) -> Self {
        self.nms_thresh = thresh;
        self
    }

    pub fn with_match_thresh(mut self, thresh: f32) -> Self {
        self.match_thresh = thresh;
        self
    }

    pub fn with_miss_budget(mut self, budget: u32) -> Self {
        self.miss_budget = budget;
        self
    }

    pub fn with_stability_threshold(mut self, threshold: u32) -> Self {
        self.stability_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_unit("nms_thresh", self.nms_thresh)?;
        check_unit("match_thresh", self.match_thresh)?;
        if self.stability_threshold == 0 {
            return Err(TrackerError::InvalidStabilityThreshold);
        }
        Ok(())
    }
}

fn check_unit(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TrackerError::InvalidThreshold { name, value })
    }
}

/// One frame of tracking: NMS over `detections`, then [`advance`].
pub fn update(
    prev: &TrackTable,
    detections: &[Detection],
    ids: &mut TrackIdCounter,
    config: &TrackerConfig,
) -> TrackTable {
    let candidates = non_max_suppression(detections, config.nms_thresh);
    advance(prev, &candidates, ids, config)
}

/// Build the next track table from the previous one and this frame's
/// already-deduplicated candidate boxes.
///
/// Matched tracks take the candidate box and reset their misses. Unmatched
/// candidates open new tracks in candidate order. Unmatched tracks gain a
/// miss and are carried forward with their stale box while within the miss
/// budget, otherwise they are dropped.
pub fn advance(
    prev: &TrackTable,
    candidates: &[BoundingBox],
    ids: &mut TrackIdCounter,
    config: &TrackerConfig,
) -> TrackTable {
    let pool: Vec<&Track> = prev.iter().collect();
    let pool_boxes: Vec<BoundingBox> = pool.iter().map(|t| t.last_box).collect();

    let AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    } = matching::greedy_assignment(&pool_boxes, candidates, config.match_thresh);

    let mut next = TrackTable::new();

    for (itracked, idet) in matches {
        let mut track = pool[itracked].clone();
        track.mark_matched(candidates[idet]);
        next.insert(track);
    }

    for idet in unmatched_detections {
        let track = Track::new(ids.next_id(), candidates[idet]);
        log::trace!("new track {} at {:?}", track.id, track.last_box.to_xyxy());
        next.insert(track);
    }

    for itracked in unmatched_tracks {
        let mut track = pool[itracked].clone();
        track.mark_missed();
        if track.miss_count <= config.miss_budget {
            next.insert(track);
        } else {
            log::trace!(
                "evicted track {} after {} misses ({} hits)",
                track.id,
                track.miss_count,
                track.hit_count
            );
        }
    }

    next
}

/// Owns the track table and id counter for one capture session.
#[derive(Debug, Clone)]
pub struct StableTracker {
    table: TrackTable,
    ids: TrackIdCounter,
    config: TrackerConfig,
    frame_id: u64,
}

impl Default for StableTracker {
    fn default() -> Self {
        Self {
            table: TrackTable::new(),
            ids: TrackIdCounter::new(),
            config: TrackerConfig::default(),
            frame_id: 0,
        }
    }
}

impl StableTracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Advance one frame and return the new table.
    pub fn update(&mut self, detections: &[Detection]) -> &TrackTable {
        self.frame_id += 1;
        self.table = update(&self.table, detections, &mut self.ids, &self.config);

        log::debug!(
            "frame {}: {} raw boxes, {} live tracks, {} stable",
            self.frame_id,
            detections.len(),
            self.table.len(),
            self.table
                .iter()
                .filter(|t| stability::is_stable(t, self.config.stability_threshold))
                .count()
        );

        &self.table
    }

    pub fn tracks(&self) -> &TrackTable {
        &self.table
    }

    /// Snapshot of the currently stable tracks.
    pub fn stable_tracks(&self) -> Vec<Track> {
        stability::stable_tracks(&self.table, self.config.stability_threshold)
    }

    pub fn is_stable(&self, track: &Track) -> bool {
        stability::is_stable(track, self.config.stability_threshold)
    }

    /// The biggest stable region, the one a single-subject capture keeps.
    pub fn primary_stable_track(&self) -> Option<&Track> {
        stability::primary_stable_track(&self.table, self.config.stability_threshold)
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Number of frames processed so far.
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    /// Id the next new track will receive.
    pub fn next_track_id(&self) -> u64 {
        self.ids.peek()
    }
}
