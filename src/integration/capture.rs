//! Crop rectangles handed to the external capture writer.

use crate::tracker::Track;

/// Pixel crop of a stable track, clamped into the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureRegion {
    pub track_id: u64,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    /// Clamp `track.last_box` into the frame.
    ///
    /// The region spans `[x1, x2)` x `[y1, y2)` after clamping to
    /// `[0, frame_width - 1]` x `[0, frame_height - 1]`. Returns `None` when
    /// nothing of the box is left inside the frame.
    pub fn from_track(track: &Track, frame_width: u32, frame_height: u32) -> Option<Self> {
        let clamped = track.last_box.clamp_to(frame_width, frame_height);
        let x1 = clamped.x1 as u32;
        let y1 = clamped.y1 as u32;
        let width = (clamped.x2 as u32).saturating_sub(x1);
        let height = (clamped.y2 as u32).saturating_sub(y1);

        if width == 0 || height == 0 {
            return None;
        }

        Some(Self {
            track_id: track.id,
            x: x1,
            y: y1,
            width,
            height,
        })
    }
}

/// Crop rectangles for `tracks`, skipping the ones entirely off-frame.
pub fn capture_regions(
    tracks: &[Track],
    frame_width: u32,
    frame_height: u32,
) -> Vec<CaptureRegion> {
    tracks
        .iter()
        .filter_map(|t| CaptureRegion::from_track(t, frame_width, frame_height))
        .collect()
}
