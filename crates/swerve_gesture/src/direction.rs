//! Swipe direction classification.
//!
//! A drag displacement reduces to a single dominant direction, and monitors
//! filter on it: "does this drag count as a leftward swipe, and how far has
//! it travelled leftward?". Classification, filter matching, and directed
//! distance are all pure functions over [`Delta`].

use crate::geometry::Delta;

/// Dominant direction of a drag, and the filter language monitors use.
///
/// `Any` plays two roles: it is the classification result for a perfectly
/// diagonal (or zero) displacement, and as a filter it admits every drag.
/// `X` and `Y` are filter-only axis values - "either way along the axis" -
/// and are never produced by classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Wildcard filter; also the classification of an exact diagonal.
    #[default]
    Any,
    /// Either direction along the horizontal axis (filter only).
    X,
    /// Either direction along the vertical axis (filter only).
    Y,
    /// Rightward.
    PositiveX,
    /// Leftward.
    NegativeX,
    /// Downward (y grows toward the bottom edge).
    PositiveY,
    /// Upward.
    NegativeY,
}

impl Direction {
    /// Classify a displacement by its dominant axis.
    ///
    /// Ties between the axes (including the zero delta) classify as `Any`.
    /// A zero component on the dominant axis counts as positive, so a purely
    /// vertical drag downward is `PositiveY` even when `dx` is 0.
    pub fn of(delta: Delta) -> Direction {
        let ax = delta.dx.abs();
        let ay = delta.dy.abs();
        if ax == ay {
            Direction::Any
        } else if ax > ay {
            if delta.dx >= 0.0 {
                Direction::PositiveX
            } else {
                Direction::NegativeX
            }
        } else if delta.dy >= 0.0 {
            Direction::PositiveY
        } else {
            Direction::NegativeY
        }
    }

    /// Whether a drag classified as `self` satisfies `filter`.
    ///
    /// The relation is asymmetric: the filter may be broader than the
    /// classification. `PositiveX.matches(X)` holds, but `Any.matches(X)`
    /// does not - an exact diagonal satisfies no filter except `Any`.
    pub fn matches(self, filter: Direction) -> bool {
        match filter {
            Direction::Any => true,
            Direction::X => matches!(self, Direction::PositiveX | Direction::NegativeX),
            Direction::Y => matches!(self, Direction::PositiveY | Direction::NegativeY),
            other => self == other,
        }
    }

    /// Displacement travelled along this filter direction.
    ///
    /// `Any` measures the full Euclidean length; axis filters measure the
    /// component magnitude; signed filters measure the component in their
    /// direction only, so wrong-way travel reports 0 rather than a negative
    /// distance.
    pub fn distance_along(self, delta: Delta) -> f64 {
        match self {
            Direction::Any => delta.magnitude(),
            Direction::X => delta.dx.abs(),
            Direction::Y => delta.dy.abs(),
            Direction::PositiveX => delta.dx.max(0.0),
            Direction::NegativeX => (-delta.dx).max(0.0),
            Direction::PositiveY => delta.dy.max(0.0),
            Direction::NegativeY => (-delta.dy).max(0.0),
        }
    }
}
