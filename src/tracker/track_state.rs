/// Stability stage of a live track.
///
/// Derived from the hit count and the configured stability threshold;
/// eviction is not a state, evicted tracks simply leave the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Matched exactly once, in the frame that created it
    #[default]
    New,
    /// Matched more than once but not yet often enough to trust
    Accumulating,
    /// Matched at least `stability_threshold` times
    Stable,
}

impl TrackState {
    pub fn from_hits(hit_count: u32, stability_threshold: u32) -> Self {
        if hit_count >= stability_threshold {
            TrackState::Stable
        } else if hit_count <= 1 {
            TrackState::New
        } else {
            TrackState::Accumulating
        }
    }
}
