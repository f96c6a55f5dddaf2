//! TrackerPipeline for combining detection with stability tracking.

use thiserror::Error;

use crate::error::TrackerError;
use crate::tracker::{Detection, StableTracker, Track, TrackTable, TrackerConfig};

use super::capture::{CaptureRegion, capture_regions};
use super::DetectionSource;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("detector failed: {0}")]
    Detection(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid tracker configuration: {0}")]
    Config(#[from] TrackerError),
}

/// A frame loop driver that bundles a detector with the `StableTracker`.
///
/// Owns all cross-frame state; dropping the pipeline ends the session.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: StableTracker,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Result<Self, PipelineError> {
        Ok(Self {
            detector,
            tracker: StableTracker::new(config)?,
        })
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self {
            detector,
            tracker: StableTracker::default(),
        }
    }

    /// Process a single frame and return the updated track table.
    ///
    /// Raw boxes that fail validation are skipped with a warning; a
    /// detector failure leaves the track table untouched.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<&TrackTable, PipelineError> {
        let raw = self
            .detector
            .detect(input, width, height)
            .map_err(|e| PipelineError::Detection(Box::new(e)))?;

        let detections: Vec<Detection> = raw
            .iter()
            .filter_map(|r| match r.to_detection() {
                Ok(det) => Some(det),
                Err(e) => {
                    log::warn!("skipping detector output: {e}");
                    None
                }
            })
            .collect();

        Ok(self.tracker.update(&detections))
    }

    /// Snapshot of the stable tracks after the last processed frame.
    pub fn stable_tracks(&self) -> Vec<Track> {
        self.tracker.stable_tracks()
    }

    /// Crop rectangles for every stable track, clamped to a
    /// `width` x `height` frame. Read once per capture request.
    pub fn capture_regions(&self, width: u32, height: u32) -> Vec<CaptureRegion> {
        capture_regions(&self.tracker.stable_tracks(), width, height)
    }

    /// Crop rectangle of the largest stable track, if any.
    pub fn primary_capture_region(&self, width: u32, height: u32) -> Option<CaptureRegion> {
        self.tracker
            .primary_stable_track()
            .and_then(|t| CaptureRegion::from_track(t, width, height))
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &StableTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::RawDetection;

    struct MockDetector {
        detections: Vec<RawDetection>,
    }

    impl DetectionSource for MockDetector {
        type Error = std::convert::Infallible;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<RawDetection>, Self::Error> {
            Ok(self.detections.clone())
        }
    }

    #[derive(Debug, Error)]
    #[error("camera unplugged")]
    struct CameraGone;

    struct FailingDetector;

    impl DetectionSource for FailingDetector {
        type Error = CameraGone;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<RawDetection>, Self::Error> {
            Err(CameraGone)
        }
    }

    #[test]
    fn test_tracker_pipeline() {
        let detector = MockDetector {
            detections: vec![
                RawDetection::new(10.0, 20.0, 40.0, 60.0),
                RawDetection::new(f32::NAN, 0.0, 5.0, 5.0),
            ],
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector);
        for frame in 1..=3 {
            let tracks = pipeline.process_frame(&[], 640, 480).unwrap();
            assert_eq!(tracks.len(), 1);
            assert_eq!(tracks.get(1).map(|t| t.hit_count), Some(frame));
        }

        let regions = pipeline.capture_regions(640, 480);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].track_id, 1);
        assert_eq!(pipeline.primary_capture_region(640, 480), Some(regions[0]));
    }

    #[test]
    fn test_nothing_captured_before_stable() {
        let detector = MockDetector {
            detections: vec![RawDetection::new(10.0, 20.0, 40.0, 60.0)],
        };
        let mut pipeline = TrackerPipeline::with_default_config(detector);
        pipeline.process_frame(&[], 640, 480).unwrap();
        pipeline.process_frame(&[], 640, 480).unwrap();
        assert!(pipeline.stable_tracks().is_empty());
        assert!(pipeline.capture_regions(640, 480).is_empty());
    }

    #[test]
    fn test_detector_error_propagates() {
        let mut pipeline = TrackerPipeline::with_default_config(FailingDetector);
        let err = pipeline.process_frame(&[], 640, 480).unwrap_err();
        assert!(matches!(err, PipelineError::Detection(_)));
        assert_eq!(err.to_string(), "detector failed: camera unplugged");
        assert_eq!(pipeline.tracker().frame_id(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let detector = MockDetector { detections: vec![] };
        let config = TrackerConfig::default().with_nms_thresh(2.0);
        assert!(matches!(
            TrackerPipeline::new(detector, config),
            Err(PipelineError::Config(TrackerError::InvalidThreshold { .. }))
        ));
    }
}
