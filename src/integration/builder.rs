//! Builder for creating Detection objects from detector-native formats.

use crate::error::{Result, TrackerError};
use crate::tracker::Detection;

/// Builder for creating `Detection` objects from various input formats.
///
/// This is the adapter boundary: coordinates that would poison the tracker
/// (NaN, infinities, inverted corners) are rejected here.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    score: Option<f32>,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height), the
    /// convention cascade-style face detectors report in.
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x1 = x;
        self.y1 = y;
        self.x2 = x + w;
        self.y2 = y + h;
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }

    /// Build the final `Detection`.
    ///
    /// Zero-sized boxes pass; NMS ranks them last and they never match a
    /// track.
    pub fn build(self) -> Result<Detection> {
        let coords = [self.x1, self.y1, self.x2, self.y2];
        if coords.iter().any(|v| !v.is_finite()) || self.x2 < self.x1 || self.y2 < self.y1 {
            return Err(TrackerError::InvalidBox {
                x1: self.x1,
                y1: self.y1,
                x2: self.x2,
                y2: self.y2,
            });
        }
        if let Some(score) = self.score.filter(|s| !s.is_finite()) {
            return Err(TrackerError::InvalidScore(score));
        }
        Ok(Detection::new(self.x1, self.y1, self.x2, self.y2, self.score))
    }
}
