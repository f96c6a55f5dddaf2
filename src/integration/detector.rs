//! Trait for object detection inference backends.

use crate::error::Result;
use crate::integration::DetectionBuilder;
use crate::tracker::Detection;

/// Raw detector output in its native (x, y, width, height) convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDetection {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Confidence, absent for score-less detectors such as Haar cascades
    pub score: Option<f32>,
}

impl RawDetection {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            score: None,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    /// Adapt to a corner-format `Detection`, validating the coordinates.
    pub fn to_detection(&self) -> Result<Detection> {
        let builder = DetectionBuilder::new().tlwh(self.x, self.y, self.width, self.height);
        match self.score {
            Some(score) => builder.score(score).build(),
            None => builder.build(),
        }
    }
}

/// Trait for object detection inference backends.
///
/// Implement this trait to feed any detector into the tracker. Output may be
/// empty, unordered and full of overlapping duplicates.
///
/// # Example
///
/// ```ignore
/// use stabletrack_rs::{DetectionSource, RawDetection};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, input: &[u8], width: u32, height: u32) -> Result<Vec<RawDetection>, Self::Error> {
///         // Run inference and return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run inference on raw image data and return detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> std::result::Result<Vec<RawDetection>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_detection_adapts() {
        let det = RawDetection::new(5.0, 6.0, 20.0, 30.0)
            .with_score(0.7)
            .to_detection()
            .unwrap();
        assert_eq!(det.bbox.to_xyxy(), [5.0, 6.0, 25.0, 36.0]);
        assert_eq!(det.score, Some(0.7));
    }

    #[test]
    fn test_raw_detection_rejects_negative_size() {
        assert!(RawDetection::new(5.0, 6.0, -1.0, 30.0).to_detection().is_err());
    }
}
