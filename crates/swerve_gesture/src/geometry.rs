//! Core geometry for gesture interpretation.
//!
//! Positions arrive from the host in its own coordinate units; nothing here
//! assumes pixels or points. The convention throughout the engine is x
//! growing rightward and y growing downward (toward the bottom edge).

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`.
    pub fn delta_to(self, other: Point) -> Delta {
        Delta {
            dx: other.x - self.x,
            dy: other.y - self.y,
        }
    }
}

/// 2D displacement
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the displacement.
    pub fn magnitude(self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}
