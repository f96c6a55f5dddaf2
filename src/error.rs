//! Error types for configuration and input validation.

use thiserror::Error;

/// Rejected configuration or input at the adapter boundary.
///
/// The tracking algorithm itself never fails; everything here is caught
/// before a box or a config reaches it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
    #[error("stability threshold must be at least 1")]
    InvalidStabilityThreshold,
    #[error("invalid box ({x1}, {y1}, {x2}, {y2})")]
    InvalidBox { x1: f32, y1: f32, x2: f32, y2: f32 },
    #[error("detection score must be finite, got {0}")]
    InvalidScore(f32),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
