use ndarray::Array2;

/// Axis-aligned bounding box in frame coordinates.
///
/// Stored as corners (x1, y1, x2, y2). Sizes follow the inclusive pixel
/// convention, so a box from 10 to 50 is 41 pixels wide. Detector output in
/// TLWH form goes through [`BoundingBox::from_tlwh`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Left edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
    /// Right edge
    pub x2: f32,
    /// Bottom edge
    pub y2: f32,
}

impl BoundingBox {
    /// Create a box from corner coordinates (x1, y1, x2, y2).
    #[inline]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a box from TLWH format (top-left x, top-left y, width, height).
    #[inline]
    pub fn from_tlwh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Convert to TLWH format: (x, y, x2 - x1, y2 - y1).
    #[inline]
    pub fn to_tlwh(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2 - self.x1, self.y2 - self.y1]
    }

    #[inline]
    pub fn to_xyxy(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// True when the box has no extent or carries non-finite coordinates.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let finite = self.to_xyxy().iter().all(|v| v.is_finite());
        !(finite && self.x2 > self.x1 && self.y2 > self.y1)
    }

    /// Inclusive pixel width, 0 for degenerate boxes.
    #[inline]
    pub fn width(&self) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            self.x2 - self.x1 + 1.0
        }
    }

    /// Inclusive pixel height, 0 for degenerate boxes.
    #[inline]
    pub fn height(&self) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            self.y2 - self.y1 + 1.0
        }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Calculate Intersection over Union (IoU) with another bounding box.
    ///
    /// Returns 0 when either box is degenerate or the union is empty.
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        if self.is_degenerate() || other.is_degenerate() {
            return 0.0;
        }

        let ix1 = self.x1.max(other.x1);
        let iy1 = self.y1.max(other.y1);
        let ix2 = self.x2.min(other.x2);
        let iy2 = self.y2.min(other.y2);

        let inter_width = (ix2 - ix1 + 1.0).max(0.0);
        let inter_height = (iy2 - iy1 + 1.0).max(0.0);
        let inter_area = inter_width * inter_height;

        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            (inter_area / union_area).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Clamp the box into a `frame_width` x `frame_height` frame.
    ///
    /// Corners end up in `[0, frame_width - 1] x [0, frame_height - 1]`.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> BoundingBox {
        let max_x = frame_width.saturating_sub(1) as f32;
        let max_y = frame_height.saturating_sub(1) as f32;
        BoundingBox {
            x1: self.x1.clamp(0.0, max_x),
            y1: self.y1.clamp(0.0, max_y),
            x2: self.x2.clamp(0.0, max_x),
            y2: self.y2.clamp(0.0, max_y),
        }
    }
}

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a matrix of shape (M, N) where M is the length of `boxes_a`
/// and N is the length of `boxes_b`.
pub fn iou_batch(boxes_a: &[BoundingBox], boxes_b: &[BoundingBox]) -> Array2<f32> {
    let mut ious = Array2::zeros((boxes_a.len(), boxes_b.len()));
    for (i, a) in boxes_a.iter().enumerate() {
        for (j, b) in boxes_b.iter().enumerate() {
            ious[[i, j]] = a.iou(b);
        }
    }
    ious
}
