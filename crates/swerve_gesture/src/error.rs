//! Error types for swerve_gesture

use thiserror::Error;

/// Errors raised while assembling gesture monitors and areas.
///
/// All validation happens at construction time; once built, the delivery
/// paths are infallible.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GestureError {
    /// A monitor's travel target must be a positive distance to normalize
    /// progress against. Rejects zero, negatives, and NaN.
    #[error("swipe target distance must be positive, got {0}")]
    InvalidTargetDistance(f64),

    /// The engagement gate must be zero or a positive distance.
    #[error("minimum drag distance must be zero or positive, got {0}")]
    InvalidMinDistance(f64),
}

/// Result type for swerve_gesture operations
pub type Result<T> = std::result::Result<T, GestureError>;
