//! Detection deduplication and temporal-stability tracking.
//!
//! Turns the noisy, memoryless output of a per-frame box detector into a
//! stream of identity-tagged regions. Each frame goes through non-max
//! suppression, greedy IoU association against the previous frame's tracks,
//! and miss-based aging. A track becomes *stable* once it has been matched
//! often enough, and only stable tracks are offered for capture.
//!
//! ```
//! use stabletrack_rs::{Detection, StableTracker, TrackerConfig};
//!
//! let mut tracker = StableTracker::new(TrackerConfig::default()).unwrap();
//! for _ in 0..3 {
//!     tracker.update(&[Detection::new(10.0, 10.0, 50.0, 50.0, None)]);
//! }
//! assert_eq!(tracker.stable_tracks().len(), 1);
//! ```

pub mod error;
pub mod integration;
pub mod tracker;

pub use error::TrackerError;
pub use integration::{
    CaptureRegion, DetectionBuilder, DetectionSource, PipelineError, RawDetection, TrackerPipeline,
};
pub use tracker::{
    BoundingBox, Detection, StableTracker, Track, TrackIdCounter, TrackState, TrackTable,
    TrackerConfig,
};
