//! Integration module for connecting detection backends with the tracker.
//!
//! Adapts detector-native boxes at the boundary, drives the per-frame loop
//! and answers capture queries. Frame acquisition and persistence stay with
//! the caller.

mod builder;
mod capture;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use capture::{CaptureRegion, capture_regions};
pub use detector::{DetectionSource, RawDetection};
pub use pipeline::{PipelineError, TrackerPipeline};
