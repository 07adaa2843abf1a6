//! Error types for swerve_panel

use swerve_gesture::{Direction, GestureError};
use thiserror::Error;

/// Errors raised while configuring a panel.
///
/// Validation is fail-fast: a controller that constructs successfully never
/// errors while handling gestures.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PanelError {
    /// The dismissal threshold is `extent * sensitivity`, so sensitivity
    /// must stay within `(0, 1]`.
    #[error("swipe sensitivity must be in (0, 1], got {0}")]
    InvalidSwipeSensitivity(f64),

    /// Extents (configured or resolved against a container) must be
    /// positive distances.
    #[error("panel extent must be positive, got {0}")]
    InvalidExtent(f64),

    /// A panel exits toward one signed direction; axis filters and the
    /// wildcard don't name one.
    #[error("panel exit direction must be a signed direction, got {0:?}")]
    InvalidExitDirection(Direction),

    /// Monitor construction failed.
    #[error(transparent)]
    Gesture(#[from] GestureError),
}

/// Result type for swerve_panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
